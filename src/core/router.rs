use std::path::Path;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::AppConfig;
use crate::core::middleware;
use crate::features::orders::{routes as orders_routes, OrdersState};
use crate::shared::constants::{HEALTH_PATH, STATIC_PREFIX};

/// Simple health check endpoint
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Assemble the full application: pages, API, static assets, docs and the
/// shared layer stack.
pub fn build_router(
    state: OrdersState,
    app: &AppConfig,
    static_dir: &Path,
    openapi: utoipa::openapi::OpenApi,
) -> Router {
    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

    Router::new()
        .merge(orders_routes::routes(state))
        .merge(swagger)
        .route(HEALTH_PATH, get(health_check))
        .nest_service(STATIC_PREFIX, ServeDir::new(static_dir))
        .layer(DefaultBodyLimit::max(app.max_request_body_size))
        .layer(middleware::cors_layer(&app.cors_allowed_origins))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
