//! Unified error handling with Sentry integration.
//!
//! Route handlers return `Result<T, AppError>`. Server errors are captured to
//! Sentry before responding; rejected gestures are logged and answered with
//! an empty response so the page stays as it is.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::widget::GestureError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A gesture named something the widget does not know.
    #[error("Gesture rejected: {0}")]
    Gesture(#[from] GestureError),

    /// Template rendering failed.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            // The surfaces are unchanged, so there is nothing to swap.
            Self::Gesture(err) => {
                tracing::warn!(error = %err, "gesture rejected, nothing to refresh");
                StatusCode::NO_CONTENT.into_response()
            }
            Self::Template(_) => {
                let event_id = sentry::capture_error(&self);
                tracing::error!(
                    error = %self,
                    sentry_event_id = %event_id,
                    "Request error"
                );
                // Don't expose internal error details to clients
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
