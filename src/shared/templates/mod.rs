//! HTML page templates.

pub mod engine;

pub use engine::{PageRenderer, TemplateError};
