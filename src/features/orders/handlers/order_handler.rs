use std::sync::Arc;

use axum::{extract::State, response::Redirect, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppForm;
use crate::features::orders::dtos::{OrdersResponseDto, SubmitOrderForm};
use crate::features::orders::services::OrderService;
use crate::shared::constants::MAP_PATH;

/// Submit a new order
///
/// Stores the submitted fields verbatim and redirects to the map page.
#[utoipa::path(
    post,
    path = "/submit",
    request_body(
        content = SubmitOrderForm,
        content_type = "application/x-www-form-urlencoded"
    ),
    responses(
        (status = 303, description = "Order stored, redirect to /map"),
        (status = 405, description = "Method other than POST", body = String, content_type = "text/plain"),
        (status = 500, description = "Form or store failure", body = String, content_type = "text/plain")
    ),
    tag = "orders"
)]
pub async fn submit_order(
    State(service): State<Arc<OrderService>>,
    AppForm(form): AppForm<SubmitOrderForm>,
) -> Result<Redirect> {
    service.submit(form.into()).await?;
    Ok(Redirect::to(MAP_PATH))
}

/// Any non-POST request to the submit route
pub async fn submit_method_not_allowed() -> AppError {
    AppError::MethodNotAllowed { allow: "POST" }
}

/// List orders with their geocoded locations
///
/// `Locations[i]` is the location of `Orders[i].address`. Any geocoding
/// failure fails the whole request.
#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "Orders and locations", body = OrdersResponseDto),
        (status = 500, description = "Store or geocoding failure", body = String, content_type = "text/plain")
    ),
    tag = "orders"
)]
pub async fn list_orders(
    State(service): State<Arc<OrderService>>,
) -> Result<Json<OrdersResponseDto>> {
    let listing = service.list_with_locations().await?;
    Ok(Json(listing))
}
