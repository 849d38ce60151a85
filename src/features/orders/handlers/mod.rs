mod order_handler;
mod page_handler;

pub use order_handler::*;
pub use page_handler::*;
