//! HTTP middleware, applied outermost first:
//!
//! 1. Sentry layers (added in the binary)
//! 2. `TraceLayer` with the span from [`make_request_span`]
//! 3. Request ID assignment
//! 4. CSP nonce minting
//! 5. Security headers, which read the nonce into the CSP header
//!
//! The nonce middleware has to sit outside the header middleware on the
//! request path so the nonce exists by the time the CSP header is built.

pub mod csp;
pub mod request_id;
pub mod security_headers;

pub use csp::{CspNonce, csp_nonce_middleware};
pub use request_id::{make_request_span, request_id_middleware};
pub use security_headers::security_headers_middleware;
