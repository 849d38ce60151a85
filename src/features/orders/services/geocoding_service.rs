use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::core::config::GeocodingConfig;
use crate::features::orders::models::Location;

/// Provider status for a successful lookup
const STATUS_OK: &str = "OK";

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Geocode request failed: {0}")]
    Request(reqwest::Error),

    #[error("Geocode provider returned HTTP {0}")]
    HttpStatus(StatusCode),

    #[error("Failed to parse geocode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Geocode request failed with status: {status}")]
    Status {
        status: String,
        message: Option<String>,
    },

    #[error("No geocoding results for address '{0}'")]
    NoResults(String),
}

/// Resolves a free-text address to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Location, GeocodeError>;
}

/// Geocoding API response structure
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
    status: String,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: Location,
}

impl GeocodeResponse {
    /// First result's coordinates, or an explicit error for a non-OK status
    /// or an empty result set.
    fn into_location(self, address: &str) -> Result<Location, GeocodeError> {
        if self.status != STATUS_OK {
            return Err(GeocodeError::Status {
                status: self.status,
                message: self.error_message,
            });
        }

        self.results
            .into_iter()
            .next()
            .map(|r| r.geometry.location)
            .ok_or_else(|| GeocodeError::NoResults(address.to_string()))
    }
}

/// Client for a Google-compatible geocoding endpoint
pub struct GoogleGeocoder {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GoogleGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("order-map/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .map_err(GeocodeError::Request)?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Lookup request; parameters are appended to any query already on the base URL
    fn request(&self, address: &str) -> reqwest::RequestBuilder {
        self.client
            .get(&self.base_url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, address: &str) -> Result<Location, GeocodeError> {
        tracing::debug!("Geocoding: {} -> {}", address, self.base_url);

        // URLs are stripped from request errors so the key never reaches logs or clients
        let response = self
            .request(address)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Geocode request failed: {:?}", e);
                GeocodeError::Request(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Geocoding provider returned status: {}", status);
            return Err(GeocodeError::HttpStatus(status));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GeocodeError::Request(e.without_url()))?;

        let parsed: GeocodeResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse geocode response: {:?}", e);
            GeocodeError::Decode(e)
        })?;

        parsed.into_location(address).inspect_err(|e| {
            if let GeocodeError::Status {
                message: Some(message),
                ..
            } = e
            {
                tracing::warn!("Geocoding provider message: {}", message);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::Query,
        response::{IntoResponse, Response},
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;
    use std::time::Duration;

    /// Stand-in provider keyed on the `address` query parameter.
    async fn fake_provider(Query(params): Query<HashMap<String, String>>) -> Response {
        if params.get("key").map(String::as_str) != Some("test-key") {
            return Json(json!({
                "status": "REQUEST_DENIED",
                "error_message": "bad key",
                "results": []
            }))
            .into_response();
        }

        match params.get("address").map(String::as_str) {
            Some("1 Infinite Loop, Cupertino, CA") => Json(json!({
                "status": "OK",
                "results": [
                    { "geometry": { "location": { "lat": 37.3318, "lng": -122.0312 } } },
                    { "geometry": { "location": { "lat": 0.0, "lng": 0.0 } } }
                ]
            }))
            .into_response(),
            Some("empty results") => {
                Json(json!({ "status": "OK", "results": [] })).into_response()
            }
            Some("server error") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
            Some("garbage") => "not json".into_response(),
            Some("slow") => {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!({ "status": "OK", "results": [] })).into_response()
            }
            _ => Json(json!({ "status": "ZERO_RESULTS", "results": [] })).into_response(),
        }
    }

    async fn spawn_provider() -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/geocode/json", get(fake_provider));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/geocode/json", addr)
    }

    fn geocoder(base_url: String, api_key: &str) -> GoogleGeocoder {
        GoogleGeocoder::new(&GeocodingConfig {
            api_key: api_key.to_string(),
            base_url,
            timeout: Duration::from_millis(500),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_geocode_returns_first_result() {
        let geocoder = geocoder(spawn_provider().await, "test-key");

        let location = geocoder
            .geocode("1 Infinite Loop, Cupertino, CA")
            .await
            .unwrap();

        assert!(location.lat.is_finite() && location.lng.is_finite());
        assert!((location.lat - 37.33).abs() < 0.01);
        assert!((location.lng + 122.03).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_non_ok_status_is_an_error() {
        let geocoder = geocoder(spawn_provider().await, "test-key");

        let err = geocoder.geocode("Nowhere at all").await.unwrap_err();

        assert!(matches!(err, GeocodeError::Status { ref status, .. } if status == "ZERO_RESULTS"));
    }

    #[tokio::test]
    async fn test_empty_results_is_an_explicit_error() {
        let geocoder = geocoder(spawn_provider().await, "test-key");

        let err = geocoder.geocode("empty results").await.unwrap_err();

        assert!(matches!(err, GeocodeError::NoResults(ref a) if a == "empty results"));
    }

    #[tokio::test]
    async fn test_http_error_status_is_an_error() {
        let geocoder = geocoder(spawn_provider().await, "test-key");

        let err = geocoder.geocode("server error").await.unwrap_err();

        assert!(matches!(err, GeocodeError::HttpStatus(s) if s == StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_decode_error() {
        let geocoder = geocoder(spawn_provider().await, "test-key");

        let err = geocoder.geocode("garbage").await.unwrap_err();

        assert!(matches!(err, GeocodeError::Decode(_)));
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let geocoder = geocoder(spawn_provider().await, "test-key");

        let err = geocoder.geocode("slow").await.unwrap_err();

        assert!(matches!(err, GeocodeError::Request(ref e) if e.is_timeout()));
    }

    #[tokio::test]
    async fn test_rejected_key_carries_provider_status() {
        let geocoder = geocoder(spawn_provider().await, "wrong-key");

        let err = geocoder
            .geocode("1 Infinite Loop, Cupertino, CA")
            .await
            .unwrap_err();

        match err {
            GeocodeError::Status { status, message } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message.as_deref(), Some("bad key"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_does_not_leak_key() {
        // Nothing listens on port 9 locally
        let geocoder = geocoder("http://127.0.0.1:9/geocode/json".to_string(), "secret-key");

        let err = geocoder.geocode("anywhere").await.unwrap_err();

        assert!(matches!(err, GeocodeError::Request(_)));
        assert!(!err.to_string().contains("secret-key"));
    }

    #[test]
    fn test_request_encodes_address() {
        let geocoder = geocoder("http://localhost/geocode/json".to_string(), "k");

        let request = geocoder.request("1 Main St, Springfield").build().unwrap();

        assert_eq!(request.url().path(), "/geocode/json");
        assert_eq!(
            request.url().query(),
            Some("address=1+Main+St%2C+Springfield&key=k")
        );
    }

    #[test]
    fn test_request_keeps_existing_base_url_query() {
        let geocoder = geocoder("http://localhost/geocode/json?region=us".to_string(), "k");

        let request = geocoder.request("Springfield").build().unwrap();

        assert_eq!(
            request.url().query(),
            Some("region=us&address=Springfield&key=k")
        );
    }

    #[tokio::test]
    async fn test_geocode_with_query_in_base_url() {
        let base_url = format!("{}?region=us", spawn_provider().await);
        let geocoder = geocoder(base_url, "test-key");

        let location = geocoder
            .geocode("1 Infinite Loop, Cupertino, CA")
            .await
            .unwrap();

        assert!((location.lat - 37.33).abs() < 0.01);
    }
}
