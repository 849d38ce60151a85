use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::features::orders::models::Order;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Durable storage for submitted orders.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Append one order. No deduplication.
    async fn insert(&self, order: &Order) -> Result<(), StoreError>;

    /// Every stored order, oldest first. A single undecodable row fails the
    /// whole listing.
    async fn list_all(&self) -> Result<Vec<Order>, StoreError>;
}

/// PostgreSQL-backed order store
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn insert(&self, order: &Order) -> Result<(), StoreError> {
        // UUID v7 keys keep insertion order without a separate sort column
        sqlx::query(
            r#"
            INSERT INTO orders (id, name, phone, address, preferred_delivery_time)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::now_v7())
        .bind(&order.name)
        .bind(&order.phone)
        .bind(&order.address)
        .bind(&order.preferred_delivery_time)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert order: {:?}", e);
            StoreError::Database(e)
        })?;

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let orders = sqlx::query_as::<_, Order>(
            r#"
            SELECT name, phone, address, preferred_delivery_time
            FROM orders
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list orders: {:?}", e);
            StoreError::Database(e)
        })?;

        Ok(orders)
    }
}
