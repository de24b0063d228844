//! Hardened response headers.
//!
//! Every response leaves with the same locked-down header set. The only
//! per-request piece is the CSP script nonce, which comes from
//! `csp_nonce_middleware` via request extensions.

use axum::{
    extract::Request,
    http::{
        HeaderName, HeaderValue,
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};

use super::csp::CspNonce;

/// Headers that never vary between requests.
///
/// The permissions policy denies every sensitive browser feature; a spice
/// shop needs none of them. Cache-control is no-store because cart and
/// checkout markup is personal to the visitor.
const STATIC_HEADERS: &[(&str, &str)] = &[
    (
        "permissions-policy",
        "accelerometer=(), \
         ambient-light-sensor=(), \
         autoplay=(), \
         battery=(), \
         browsing-topics=(), \
         camera=(), \
         cross-origin-isolated=(), \
         display-capture=(), \
         document-domain=(), \
         encrypted-media=(), \
         execution-while-not-rendered=(), \
         execution-while-out-of-viewport=(), \
         fullscreen=(), \
         geolocation=(), \
         gyroscope=(), \
         hid=(), \
         idle-detection=(), \
         interest-cohort=(), \
         magnetometer=(), \
         microphone=(), \
         midi=(), \
         navigation-override=(), \
         payment=(), \
         picture-in-picture=(), \
         publickey-credentials-get=(), \
         screen-wake-lock=(), \
         serial=(), \
         sync-xhr=(), \
         usb=(), \
         web-share=(), \
         xr-spatial-tracking=()",
    ),
    ("cache-control", "no-store, max-age=0"),
    ("cross-origin-opener-policy", "same-origin"),
    ("cross-origin-resource-policy", "same-origin"),
    // credentialless rather than require-corp: Unsplash does not set CORP
    // headers, and require-corp would block every product photo.
    ("cross-origin-embedder-policy", "credentialless"),
    ("x-dns-prefetch-control", "off"),
];

/// Stamps the security header set onto the response.
///
/// The CSP is strict by construction:
///
/// ```text
/// default-src 'none';
/// script-src 'self' https://unpkg.com 'nonce-...';
/// style-src 'self';
/// font-src 'self';
/// img-src 'self' https://images.unsplash.com;
/// connect-src 'self';
/// frame-src 'none';
/// object-src 'none';
/// base-uri 'self';
/// form-action 'self';
/// frame-ancestors 'none';
/// upgrade-insecure-requests
/// ```
///
/// `script-src` admits unpkg.com (htmx) plus the per-request nonce, which
/// covers the inline review carousel script on the home page. Everything
/// else is self-only or denied outright.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    // The nonce must be read before next.run consumes the request.
    let nonce = request.extensions().get::<CspNonce>().cloned();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));

    if let Ok(value) = HeaderValue::from_str(&content_security_policy(nonce.as_ref())) {
        headers.insert(CONTENT_SECURITY_POLICY, value);
    }

    for &(name, value) in STATIC_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }

    response
}

/// CSP header value with the script nonce spliced in when one exists.
fn content_security_policy(nonce: Option<&CspNonce>) -> String {
    let script_src = nonce.map_or_else(
        || "'self' https://unpkg.com".to_string(),
        |n| format!("'self' https://unpkg.com 'nonce-{}'", n.value()),
    );

    format!(
        "default-src 'none'; \
         script-src {script_src}; \
         style-src 'self'; \
         font-src 'self'; \
         img-src 'self' https://images.unsplash.com; \
         connect-src 'self'; \
         frame-src 'none'; \
         object-src 'none'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'; \
         upgrade-insecure-requests"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_includes_nonce_when_present() {
        let nonce = CspNonce("abc123".to_string());
        let csp = content_security_policy(Some(&nonce));
        assert!(csp.contains("'nonce-abc123'"));
    }

    #[test]
    fn test_csp_omits_nonce_when_absent() {
        let csp = content_security_policy(None);
        assert!(!csp.contains("nonce"));
    }

    #[test]
    fn test_csp_allows_htmx_and_product_images() {
        let csp = content_security_policy(None);
        assert!(csp.contains("script-src 'self' https://unpkg.com"));
        assert!(csp.contains("img-src 'self' https://images.unsplash.com"));
    }

    #[test]
    fn test_static_headers_are_valid() {
        for &(name, value) in STATIC_HEADERS {
            assert!(HeaderName::from_bytes(name.as_bytes()).is_ok());
            assert!(HeaderValue::from_str(value).is_ok());
        }
    }
}
