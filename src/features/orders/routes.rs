use axum::{
    routing::{get, post},
    Router,
};

use crate::features::orders::{handlers, OrdersState};
use crate::shared::constants::{API_ORDERS_PATH, FORM_PATH, MAP_PATH, SUBMIT_PATH};

/// Create routes for the orders feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(state: OrdersState) -> Router {
    Router::new()
        .route(FORM_PATH, get(handlers::show_form))
        .route(
            SUBMIT_PATH,
            post(handlers::submit_order).fallback(handlers::submit_method_not_allowed),
        )
        .route(MAP_PATH, get(handlers::show_map))
        .route(API_ORDERS_PATH, get(handlers::list_orders))
        .with_state(state)
}
