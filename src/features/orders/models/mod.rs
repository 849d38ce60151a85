mod order;

pub use order::{Location, Order};
