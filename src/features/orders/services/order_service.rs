use std::sync::Arc;

use crate::core::error::Result;
use crate::features::orders::dtos::OrdersResponseDto;
use crate::features::orders::models::Order;
use crate::features::orders::services::{Geocoder, OrderStore};

/// Order intake and geocoded retrieval
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    geocoder: Arc<dyn Geocoder>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { store, geocoder }
    }

    /// Persist one order exactly as submitted
    pub async fn submit(&self, order: Order) -> Result<()> {
        self.store.insert(&order).await?;
        tracing::info!("Order stored");
        Ok(())
    }

    /// Every stored order paired with the location of its address.
    ///
    /// Addresses are geocoded one at a time, in listing order. The first
    /// failure aborts the whole listing; a store failure aborts before any
    /// geocoding happens.
    pub async fn list_with_locations(&self) -> Result<OrdersResponseDto> {
        let orders = self.store.list_all().await?;

        let mut locations = Vec::with_capacity(orders.len());
        for order in &orders {
            let location = self.geocoder.geocode(&order.address).await?;
            locations.push(location);
        }

        tracing::debug!("Geocoded {} orders", orders.len());

        Ok(OrdersResponseDto { orders, locations })
    }
}
