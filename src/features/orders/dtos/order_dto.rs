use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::extractor::FormValues;
use crate::features::orders::models::{Location, Order};

const LEGACY_DELIVERY_TIME_FIELD: &str = "preferable_delivery_time";

/// Fields posted by the submission form. Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, ToSchema)]
pub struct SubmitOrderForm {
    pub name: String,
    pub phone: String,
    pub address: String,
    /// Older forms post this as `preferable_delivery_time`
    pub preferred_delivery_time: String,
}

impl From<FormValues> for SubmitOrderForm {
    fn from(values: FormValues) -> Self {
        let preferred_delivery_time = values
            .first("preferred_delivery_time")
            .or_else(|| values.first(LEGACY_DELIVERY_TIME_FIELD))
            .unwrap_or_default()
            .to_string();

        Self {
            name: values.value("name"),
            phone: values.value("phone"),
            address: values.value("address"),
            preferred_delivery_time,
        }
    }
}

impl From<SubmitOrderForm> for Order {
    fn from(form: SubmitOrderForm) -> Self {
        Self {
            name: form.name,
            phone: form.phone,
            address: form.address,
            preferred_delivery_time: form.preferred_delivery_time,
        }
    }
}

/// Orders paired with their geocoded locations.
///
/// `locations[i]` is the location of `orders[i].address`; both lists always
/// have the same length.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrdersResponseDto {
    #[serde(rename = "Orders")]
    pub orders: Vec<Order>,
    #[serde(rename = "Locations")]
    pub locations: Vec<Location>,
}
