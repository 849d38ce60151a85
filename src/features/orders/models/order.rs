use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A submitted delivery request.
///
/// Fields are stored verbatim; empty strings are valid values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Order {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub preferred_delivery_time: String,
}

/// A geocoded point in degrees. Computed per request, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
impl Location {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}
