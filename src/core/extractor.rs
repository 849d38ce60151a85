use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
};

use crate::core::error::AppError;

/// Decoded form fields: request body pairs followed by query-string pairs.
///
/// Lookups return the first occurrence of a name, so body values win over
/// query values and repeated fields never fail the request.
#[derive(Debug, Clone, Default)]
pub struct FormValues(Vec<(String, String)>);

impl FormValues {
    pub fn parse(body: &[u8], query: Option<&str>) -> Result<Self, serde_urlencoded::de::Error> {
        let mut pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
        if let Some(query) = query {
            pairs.extend(serde_urlencoded::from_str::<Vec<(String, String)>>(query)?);
        }
        Ok(Self(pairs))
    }

    /// First value for `name`, if present
    pub fn first(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// First value for `name`, or an empty string
    pub fn value(&self, name: &str) -> String {
        self.first(name).unwrap_or_default().to_string()
    }
}

/// URL-encoded form extractor with consistent error responses.
///
/// Unlike `axum::Form`, the content type is not checked: an empty body
/// decodes to an empty set of values, matching how browsers and plain
/// clients submit an empty form.
pub struct AppForm<T>(pub T);

impl<T, S> FromRequest<S> for AppForm<T>
where
    T: From<FormValues>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let query = req.uri().query().map(str::to_string);

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Form(rejection.body_text()))?;

        FormValues::parse(&bytes, query.as_deref())
            .map(|values| Self(T::from(values)))
            .map_err(|e| AppError::Form(e.to_string()))
    }
}
