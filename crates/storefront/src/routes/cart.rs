//! Shopping cart route handlers.
//!
//! The cart lives entirely in a signed cookie, so every handler takes the
//! [`SignedCookieJar`] and returns the updated jar alongside its response.
//! Mutating handlers are HTMX endpoints: they return a fragment plus an
//! `HX-Trigger: cart-updated` header so the nav badge refreshes itself.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, response::AppendHeaders};
use axum_extra::extract::SignedCookieJar;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{instrument, warn};

use prayan_core::{Cart, ProductId};

use crate::cart::{clear_cart, read_cart, write_cart};
use crate::catalog;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::pricing::OrderSummary;

// =============================================================================
// View Models
// =============================================================================

/// A single cart line prepared for rendering.
pub struct CartItemView {
    pub product_id: i32,
    pub name: String,
    pub size: String,
    pub image: String,
    pub quantity: u32,
    /// Unit price, e.g. "₹299".
    pub price: String,
    /// Quantity times unit price, e.g. "₹598".
    pub line_price: String,
}

/// The full cart with order summary totals, prices preformatted.
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub item_count: u32,
    pub subtotal: String,
    /// "Free" above the threshold, otherwise the flat fee.
    pub shipping: String,
    pub tax: String,
    pub total: String,
    pub free_shipping: bool,
}

impl CartView {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        let summary = OrderSummary::for_cart(cart);
        let items = cart
            .iter()
            .map(|item| CartItemView {
                product_id: item.product.id.as_i32(),
                name: item.product.name.clone(),
                size: item.variant.size.clone(),
                image: item.product.image.clone(),
                quantity: item.quantity,
                price: item.variant.price.to_string(),
                line_price: format_rupees(item.line_total()),
            })
            .collect();
        Self {
            items,
            item_count: cart.total_items(),
            subtotal: format_rupees(summary.subtotal),
            shipping: if summary.free_shipping() {
                "Free".to_string()
            } else {
                format_rupees(summary.shipping)
            },
            tax: format_rupees(summary.tax),
            total: format_rupees(summary.total),
            free_shipping: summary.free_shipping(),
        }
    }
}

/// Format a rupee amount for display, dropping trailing zeros.
pub fn format_rupees(amount: Decimal) -> String {
    format!("₹{}", amount.normalize())
}

// =============================================================================
// Forms
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    pub size: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub product_id: i32,
    pub size: String,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub product_id: i32,
    pub size: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Full cart page.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart contents fragment swapped in by quantity and remove actions.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Nav badge fragment polled via the `cart-updated` trigger.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

type CartUpdateHeaders = AppendHeaders<[(&'static str, &'static str); 1]>;

/// Header that tells HTMX listeners the cart changed.
fn cart_updated() -> CartUpdateHeaders {
    AppendHeaders([("HX-Trigger", "cart-updated")])
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(jar))]
pub async fn show(jar: SignedCookieJar) -> CartShowTemplate {
    let cart = read_cart(&jar);
    CartShowTemplate {
        cart: CartView::from(&cart),
    }
}

/// Add a product variant to the cart.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] when the product or pack size does not
/// exist in the catalog.
#[instrument(skip(jar))]
pub async fn add(
    jar: SignedCookieJar,
    Form(form): Form<AddToCartForm>,
) -> Result<(SignedCookieJar, CartUpdateHeaders, CartCountTemplate)> {
    let product = catalog::product_by_id(ProductId::new(form.product_id));
    let variant = product.and_then(|p| p.variant(&form.size));
    let (Some(product), Some(variant)) = (product, variant) else {
        warn!(
            product_id = form.product_id,
            size = %form.size,
            "Rejected add-to-cart for unknown product or size"
        );
        return Err(AppError::BadRequest("Unknown product or size".to_string()));
    };

    let mut cart = read_cart(&jar);
    cart.add_item(product, variant);
    add_breadcrumb(
        "cart",
        "Added item to cart",
        Some(&[
            ("product", product.name.as_str()),
            ("size", variant.size.as_str()),
        ]),
    );

    let count = cart.total_items();
    Ok((
        write_cart(jar, &cart),
        cart_updated(),
        CartCountTemplate { count },
    ))
}

/// Set the quantity of a cart line. Zero or below removes the line.
#[instrument(skip(jar))]
pub async fn update(
    jar: SignedCookieJar,
    Form(form): Form<UpdateCartForm>,
) -> (SignedCookieJar, CartUpdateHeaders, CartItemsTemplate) {
    let mut cart = read_cart(&jar);
    cart.update_quantity(ProductId::new(form.product_id), &form.size, form.quantity);
    let view = CartView::from(&cart);
    (
        write_cart(jar, &cart),
        cart_updated(),
        CartItemsTemplate { cart: view },
    )
}

/// Remove a cart line entirely.
#[instrument(skip(jar))]
pub async fn remove(
    jar: SignedCookieJar,
    Form(form): Form<RemoveFromCartForm>,
) -> (SignedCookieJar, CartUpdateHeaders, CartItemsTemplate) {
    let mut cart = read_cart(&jar);
    cart.remove_item(ProductId::new(form.product_id), &form.size);
    let view = CartView::from(&cart);
    (
        write_cart(jar, &cart),
        cart_updated(),
        CartItemsTemplate { cart: view },
    )
}

/// Empty the cart.
#[instrument(skip(jar))]
pub async fn clear(jar: SignedCookieJar) -> (SignedCookieJar, CartUpdateHeaders, CartItemsTemplate) {
    let cart = Cart::new();
    let view = CartView::from(&cart);
    (
        clear_cart(jar),
        cart_updated(),
        CartItemsTemplate { cart: view },
    )
}

/// Render the nav cart badge. Loaded on page load and on `cart-updated`.
#[instrument(skip(jar))]
pub async fn count(jar: SignedCookieJar) -> CartCountTemplate {
    let cart = read_cart(&jar);
    CartCountTemplate {
        count: cart.total_items(),
    }
}

// =============================================================================
// Tests
// =============================================================================
