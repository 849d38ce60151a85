/// Submission form page
pub const FORM_PATH: &str = "/";

/// Form target; only POST is accepted
pub const SUBMIT_PATH: &str = "/submit";

/// Map/list page, also the post-submit redirect target
pub const MAP_PATH: &str = "/map";

/// JSON listing of orders and their locations
pub const API_ORDERS_PATH: &str = "/api/orders";

pub const STATIC_PREFIX: &str = "/static";

pub const HEALTH_PATH: &str = "/health";

// =============================================================================
// TEMPLATES
// =============================================================================

pub const FORM_TEMPLATE: &str = "form.html.jinja";

pub const MAP_TEMPLATE: &str = "map.html.jinja";
