//! Prayan Masale storefront.
//!
//! The storefront is built as a library so integration tests can drive the
//! real router over HTTP. The binary in `main.rs` only adds Sentry layers,
//! logging, and the listener.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use axum::{Router, middleware::from_fn, routing::get};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod cart;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod pricing;
pub mod routes;
pub mod state;

use state::AppState;

/// Directory holding the markdown content pages.
#[must_use]
pub fn content_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/content"))
}

/// Directory holding static assets (CSS, favicon).
#[must_use]
pub fn static_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

/// Build the application router with all routes and middleware.
///
/// Layers run top to bottom on the way in: tracing, request id, CSP nonce,
/// security headers.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .nest_service("/static", ServeDir::new(static_dir()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(middleware::make_request_span))
                .layer(from_fn(middleware::request_id_middleware))
                .layer(from_fn(middleware::csp_nonce_middleware))
                .layer(from_fn(middleware::security_headers_middleware)),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
