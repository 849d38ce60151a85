use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::features::orders::models::{Location, Order};
use crate::features::orders::services::{
    GeocodeError, Geocoder, OrderService, OrderStore, StoreError,
};
use crate::features::orders::OrdersState;
use crate::shared::templates::PageRenderer;

/// In-memory order store with switchable failure
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: Mutex<Vec<Order>>,
    failing: AtomicBool,
    inserts: AtomicUsize,
}

impl MemoryOrderStore {
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of successful inserts
    pub fn insert_count(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub async fn snapshot(&self) -> Vec<Order> {
        self.orders.lock().await.clone()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert(&self, order: &Order) -> Result<(), StoreError> {
        self.check()?;
        self.orders.lock().await.push(order.clone());
        self.inserts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        self.check()?;
        Ok(self.orders.lock().await.clone())
    }
}

/// Geocoder answering from a fixed table and recording every lookup
#[derive(Default)]
pub struct ScriptedGeocoder {
    known: HashMap<String, Location>,
    rejected: HashMap<String, String>,
    fallback: Option<Location>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedGeocoder {
    pub fn with(mut self, address: &str, location: Location) -> Self {
        self.known.insert(address.to_string(), location);
        self
    }

    /// Answer `address` with a non-OK provider status
    pub fn rejecting(mut self, address: &str, status: &str) -> Self {
        self.rejected.insert(address.to_string(), status.to_string());
        self
    }

    /// Location for any address not otherwise scripted
    pub fn with_fallback(mut self, location: Location) -> Self {
        self.fallback = Some(location);
        self
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl Geocoder for ScriptedGeocoder {
    async fn geocode(&self, address: &str) -> Result<Location, GeocodeError> {
        self.calls.lock().await.push(address.to_string());

        if let Some(status) = self.rejected.get(address) {
            return Err(GeocodeError::Status {
                status: status.clone(),
                message: None,
            });
        }

        self.known
            .get(address)
            .copied()
            .or(self.fallback)
            .ok_or_else(|| GeocodeError::NoResults(address.to_string()))
    }
}

/// Page renderer over the repository's own templates
pub fn test_renderer() -> PageRenderer {
    PageRenderer::from_dir(&Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/pages"))
}

pub fn test_state(store: Arc<dyn OrderStore>, geocoder: Arc<dyn Geocoder>) -> OrdersState {
    OrdersState {
        service: Arc::new(OrderService::new(store, geocoder)),
        pages: Arc::new(test_renderer()),
    }
}
