//! Route error type and Sentry helpers.
//!
//! Handlers return `Result<T, AppError>`; the `IntoResponse` impl decides
//! what the shopper sees and what gets reported to Sentry.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::routes::NotFoundTemplate;

#[derive(Debug, Error)]
pub enum AppError {
    /// No such product, page, or cart line.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The client sent something the handler cannot act on.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Anything that is our fault.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Only server faults are worth a Sentry event.
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        match &self {
            // Branded 404 page rather than a bare status line.
            Self::NotFound(_) => (StatusCode::NOT_FOUND, NotFoundTemplate).into_response(),
            Self::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()).into_response(),
            // Internal detail stays out of the response body.
            Self::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
                .into_response(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Record a shopper action as a Sentry breadcrumb.
///
/// When an error event fires, the trail of breadcrumbs shows what the
/// shopper did on the way there.
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Added item to cart", Some(&[("product", "1")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let data = data
        .unwrap_or_default()
        .iter()
        .map(|(key, value)| {
            (
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            )
        })
        .collect();

    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        data,
        ..Default::default()
    });
}
