//! Order intake and geocoded order listing.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/` | Submission form |
//! | POST | `/submit` | Store one order, redirect to `/map` |
//! | GET | `/map` | Orders and their locations on a map |
//! | GET | `/api/orders` | `{"Orders": [...], "Locations": [...]}` |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::extract::FromRef;

pub use services::{GoogleGeocoder, OrderService, PgOrderStore};

use crate::shared::templates::PageRenderer;

/// Dependencies shared by the order routes
#[derive(Clone, FromRef)]
pub struct OrdersState {
    pub service: Arc<OrderService>,
    pub pages: Arc<PageRenderer>,
}
