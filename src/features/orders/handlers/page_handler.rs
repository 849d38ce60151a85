use std::sync::Arc;

use axum::{extract::State, response::Html};
use minijinja::context;

use crate::core::error::Result;
use crate::features::orders::services::OrderService;
use crate::shared::constants::{
    FORM_PATH, FORM_TEMPLATE, MAP_PATH, MAP_TEMPLATE, STATIC_PREFIX, SUBMIT_PATH,
};
use crate::shared::templates::PageRenderer;

/// Render the order submission form
pub async fn show_form(State(pages): State<Arc<PageRenderer>>) -> Result<Html<String>> {
    let html = pages.render(
        FORM_TEMPLATE,
        context! {
            submit_path => SUBMIT_PATH,
            map_path => MAP_PATH,
            static_prefix => STATIC_PREFIX,
        },
    )?;
    Ok(Html(html))
}

/// Render every order with its location on the map page
pub async fn show_map(
    State(service): State<Arc<OrderService>>,
    State(pages): State<Arc<PageRenderer>>,
) -> Result<Html<String>> {
    let listing = service.list_with_locations().await?;

    let html = pages.render(
        MAP_TEMPLATE,
        context! {
            orders => listing.orders,
            locations => listing.locations,
            form_path => FORM_PATH,
            static_prefix => STATIC_PREFIX,
        },
    )?;
    Ok(Html(html))
}
