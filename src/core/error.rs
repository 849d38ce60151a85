use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::features::orders::services::{GeocodeError, StoreError};
use crate::shared::templates::TemplateError;

/// Request-level failure. Every variant aborts the request; nothing is
/// retried or degraded.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Method not allowed")]
    MethodNotAllowed { allow: &'static str },

    #[error("Failed to parse form: {0}")]
    Form(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Form(_)
            | AppError::Store(_)
            | AppError::Geocode(_)
            | AppError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            AppError::MethodNotAllowed { allow } => {
                return (status, [(header::ALLOW, *allow)], self.to_string()).into_response();
            }
            AppError::Form(msg) => tracing::warn!("Form error: {}", msg),
            AppError::Store(e) => tracing::error!("Store error: {:?}", e),
            AppError::Geocode(e) => tracing::error!("Geocoding error: {}", e),
            AppError::Template(e) => tracing::error!("Template error: {}", e),
        }

        (status, self.to_string()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
