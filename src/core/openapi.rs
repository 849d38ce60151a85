use utoipa::{Modify, OpenApi};

use crate::features::orders::{dtos as orders_dtos, handlers as orders_handlers, models};

#[derive(OpenApi)]
#[openapi(
    paths(
        orders_handlers::submit_order,
        orders_handlers::list_orders,
    ),
    components(
        schemas(
            models::Order,
            models::Location,
            orders_dtos::SubmitOrderForm,
            orders_dtos::OrdersResponseDto,
        )
    ),
    tags(
        (name = "orders", description = "Order intake and geocoded listing")
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
