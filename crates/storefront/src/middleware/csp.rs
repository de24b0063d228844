//! Per-request CSP nonces.
//!
//! The home page ships a small inline script, and the CSP forbids inline
//! scripts unless they carry a nonce. A fresh random nonce is minted for
//! every request, stashed in request extensions, and read from two places:
//! the security headers middleware (to build the CSP header) and the home
//! handler (to stamp the `<script nonce="...">` tag).

use axum::{
    extract::{FromRequestParts, Request},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::STANDARD};
use rand::RngCore;

/// Nonce length before base64 encoding.
const NONCE_BYTES: usize = 16;

/// Random nonce tying an inline script to this response's CSP header.
#[derive(Clone, Debug)]
pub struct CspNonce(pub String);

impl CspNonce {
    /// Mint a fresh 128-bit nonce, base64-encoded.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; NONCE_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        Self(STANDARD.encode(bytes))
    }

    /// Nonce string for interpolation into headers and templates.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Stores a fresh nonce in request extensions.
///
/// Must run before `security_headers_middleware`, which reads the nonce
/// while building the CSP header.
pub async fn csp_nonce_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(CspNonce::generate());
    next.run(request).await
}

/// Handler-side access to the nonce:
///
/// ```ignore
/// pub async fn home(CspNonce(nonce): CspNonce) -> HomeTemplate {
///     HomeTemplate { nonce, .. }
/// }
/// ```
///
/// Falls back to an empty nonce (and a warning) if the middleware never ran,
/// which blocks the inline script rather than the page.
impl<S> FromRequestParts<S> for CspNonce
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts.extensions.get::<Self>().cloned().unwrap_or_else(|| {
            tracing::warn!("no CSP nonce in request extensions, check middleware order");
            Self(String::new())
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_is_base64_of_expected_width() {
        let nonce = CspNonce::generate();

        // 16 bytes encode to 24 base64 characters including padding.
        assert_eq!(nonce.value().len(), 24);
        assert!(STANDARD.decode(nonce.value()).is_ok());
    }

    #[test]
    fn test_nonces_are_unique_per_call() {
        assert_ne!(CspNonce::generate().value(), CspNonce::generate().value());
    }
}
