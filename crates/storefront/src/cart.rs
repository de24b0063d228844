//! Cart persistence in a signed cookie.
//!
//! The cart cookie stores only (product id, size, quantity) triples. Prices,
//! names, and images are rehydrated from the catalog on every read, so a
//! stale cookie can never show outdated prices. Lines referencing products or
//! pack sizes no longer in the catalog are dropped with a warning.
//!
//! The cookie value is a base64-encoded JSON array, signed by the jar's key.
//! Tampered or undecodable cookies read as an empty cart.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use prayan_core::{Cart, CartItem, ProductId};
use serde::{Deserialize, Serialize};

use crate::catalog;

/// Name of the signed cart cookie.
pub const CART_COOKIE: &str = "prayan_cart";

/// Compact persisted form of one cart line.
#[derive(Debug, Serialize, Deserialize)]
struct StoredLine {
    id: i32,
    size: String,
    qty: u32,
}

#[derive(Debug, thiserror::Error)]
enum CartCookieError {
    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read the cart from the signed cookie jar.
///
/// A missing, tampered, or undecodable cookie yields an empty cart. Lines
/// pointing at unknown products or sizes are dropped.
#[must_use]
pub fn read_cart(jar: &SignedCookieJar) -> Cart {
    let Some(cookie) = jar.get(CART_COOKIE) else {
        return Cart::new();
    };

    let lines = match decode_lines(cookie.value()) {
        Ok(lines) => lines,
        Err(e) => {
            tracing::warn!("Discarding undecodable cart cookie: {e}");
            return Cart::new();
        }
    };

    let items = lines
        .into_iter()
        .filter_map(|line| {
            let product = catalog::product_by_id(ProductId::new(line.id));
            let variant = product.and_then(|p| p.variant(&line.size));
            match (product, variant) {
                (Some(product), Some(variant)) => Some(CartItem {
                    product: product.clone(),
                    variant: variant.clone(),
                    quantity: line.qty,
                }),
                _ => {
                    tracing::warn!(
                        product_id = line.id,
                        size = %line.size,
                        "Dropping cart line no longer in catalog"
                    );
                    None
                }
            }
        })
        .collect();

    Cart::from_items(items)
}

/// Write the cart back to the jar, replacing any previous cart cookie.
///
/// If the cart cannot be serialized the jar is returned unchanged, so the
/// response still goes out with the previous cart intact.
#[must_use]
pub fn write_cart(jar: SignedCookieJar, cart: &Cart) -> SignedCookieJar {
    let lines: Vec<StoredLine> = cart
        .iter()
        .map(|item| StoredLine {
            id: item.product.id.as_i32(),
            size: item.variant.size.clone(),
            qty: item.quantity,
        })
        .collect();

    match encode_lines(&lines) {
        Ok(value) => jar.add(cart_cookie(value)),
        Err(e) => {
            tracing::error!("Failed to serialize cart cookie: {e}");
            jar
        }
    }
}

/// Remove the cart cookie entirely.
#[must_use]
pub fn clear_cart(jar: SignedCookieJar) -> SignedCookieJar {
    // Removal cookie must carry the same path as the original
    jar.remove(Cookie::build((CART_COOKIE, "")).path("/").build())
}

fn cart_cookie(value: String) -> Cookie<'static> {
    Cookie::build((CART_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .permanent()
        .build()
}

fn encode_lines(lines: &[StoredLine]) -> Result<String, serde_json::Error> {
    let json = serde_json::to_vec(lines)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

fn decode_lines(value: &str) -> Result<Vec<StoredLine>, CartCookieError> {
    let bytes = URL_SAFE_NO_PAD.decode(value)?;
    Ok(serde_json::from_slice(&bytes)?)
}
