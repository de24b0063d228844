//! Per-request correlation IDs.
//!
//! Every request carries an `x-request-id`: either the value supplied by the
//! reverse proxy in front of the app, or a fresh UUID v4 minted here. The ID
//! is recorded on the request span, tagged on the Sentry scope, and echoed in
//! the response headers, so a shopper's bug report can be matched to the log
//! lines and Sentry events it produced.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the correlation ID, inbound and outbound.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Root span handed to `TraceLayer` for each request.
///
/// The `request_id` field starts out empty; `request_id_middleware` records
/// it once it has settled on an ID. Tracing only accepts records for fields
/// the span declared up front, so the placeholder has to live here.
pub fn make_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}

/// Proxy-assigned ID, if the header is present and readable as a string.
fn incoming_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(String::from)
}

/// Assigns the request its correlation ID and propagates it everywhere the
/// ID needs to show up.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id =
        incoming_request_id(request.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", &request_id);

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    // Echo the ID on the way out.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
