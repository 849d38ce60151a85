mod geocoding_service;
mod order_service;
mod order_store;

pub use geocoding_service::{GeocodeError, Geocoder, GoogleGeocoder};
pub use order_service::OrderService;
pub use order_store::{OrderStore, PgOrderStore, StoreError};
