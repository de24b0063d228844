//! Checkout route handlers.
//!
//! Checkout is three server-rendered steps: delivery details, payment method,
//! confirmation. There is no checkout session; the details form fields are
//! carried forward as hidden inputs and re-validated at every step. The cart
//! cookie is cleared only on the confirmation response, so refreshing the
//! payment page never loses the order.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;
use chrono::Utc;
use serde::Deserialize;
use tracing::instrument;

use crate::cart::{clear_cart, read_cart};
use crate::error::add_breadcrumb;
use crate::filters;

use super::cart::CartView;

// =============================================================================
// Forms
// =============================================================================

/// Delivery address fields, all required.
///
/// Every field defaults to empty so a partially filled form round-trips
/// instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeliveryDetails {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
}

impl DeliveryDetails {
    /// True when every required field has non-whitespace content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.address,
            &self.city,
            &self.state,
            &self.pincode,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// Final step form: the carried-over details plus the payment choice.
#[derive(Debug, Deserialize)]
pub struct PlaceOrderForm {
    #[serde(flatten)]
    pub details: DeliveryDetails,
    #[serde(default)]
    pub payment_method: String,
}

/// Human label for a payment method value. Anything unrecognized is treated
/// as cash on delivery, the only live option.
fn payment_label(method: &str) -> &'static str {
    match method {
        "online" => "Online Payment",
        _ => "Cash on Delivery",
    }
}

/// Generate a display order id like `#PM482917`.
///
/// Order ids are not persisted anywhere, so a millisecond-derived number is
/// enough to give the customer a reference for WhatsApp follow-ups.
fn generate_order_id() -> String {
    let millis = Utc::now().timestamp_millis() % 1_000_000;
    format!("#PM{millis:06}")
}

// =============================================================================
// Templates
// =============================================================================

/// Step one: delivery details form.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/details.html")]
pub struct CheckoutDetailsTemplate {
    pub cart: CartView,
    pub details: DeliveryDetails,
    pub error: Option<&'static str>,
}

/// Step two: payment method selection.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/payment.html")]
pub struct CheckoutPaymentTemplate {
    pub cart: CartView,
    pub details: DeliveryDetails,
}

/// Step three: order confirmation.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct CheckoutConfirmationTemplate {
    pub order_id: String,
    pub cart: CartView,
    pub details: DeliveryDetails,
    pub payment_label: &'static str,
}

// =============================================================================
// Handlers
// =============================================================================

/// Step one: show the delivery details form.
///
/// An empty cart has nothing to check out, so it redirects back to the cart
/// page instead of rendering a zero-total order.
#[instrument(skip(jar))]
pub async fn details(jar: SignedCookieJar) -> Response {
    let cart = read_cart(&jar);
    if cart.is_empty() {
        return Redirect::to("/cart").into_response();
    }
    CheckoutDetailsTemplate {
        cart: CartView::from(&cart),
        details: DeliveryDetails::default(),
        error: None,
    }
    .into_response()
}

/// Step two: validate the details and show payment options.
///
/// Incomplete details re-render step one with the submitted values filled in,
/// so the customer only retypes what was missing.
#[instrument(skip(jar, form))]
pub async fn payment(jar: SignedCookieJar, Form(form): Form<DeliveryDetails>) -> Response {
    let cart = read_cart(&jar);
    if cart.is_empty() {
        return Redirect::to("/cart").into_response();
    }
    if !form.is_complete() {
        return CheckoutDetailsTemplate {
            cart: CartView::from(&cart),
            details: form,
            error: Some("Please fill in all required fields"),
        }
        .into_response();
    }
    CheckoutPaymentTemplate {
        cart: CartView::from(&cart),
        details: form,
    }
    .into_response()
}

/// Step three: place the order and clear the cart.
#[instrument(skip(jar, form))]
pub async fn place_order(jar: SignedCookieJar, Form(form): Form<PlaceOrderForm>) -> Response {
    let cart = read_cart(&jar);
    if cart.is_empty() {
        return Redirect::to("/cart").into_response();
    }
    if !form.details.is_complete() {
        return CheckoutDetailsTemplate {
            cart: CartView::from(&cart),
            details: form.details,
            error: Some("Please fill in all required fields"),
        }
        .into_response();
    }

    // Snapshot the totals before the cookie goes away.
    let view = CartView::from(&cart);
    let order_id = generate_order_id();
    tracing::info!(order_id = %order_id, items = cart.total_items(), "Order placed");
    add_breadcrumb("checkout", "Order placed", Some(&[("order_id", &order_id)]));

    (
        clear_cart(jar),
        CheckoutConfirmationTemplate {
            order_id,
            cart: view,
            payment_label: payment_label(&form.payment_method),
            details: form.details,
        },
    )
        .into_response()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete_details() -> DeliveryDetails {
        DeliveryDetails {
            first_name: "Priya".to_string(),
            last_name: "Sharma".to_string(),
            email: "priya@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "12 Marine Drive".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "400001".to_string(),
        }
    }

    #[test]
    fn test_complete_details_pass_validation() {
        assert!(complete_details().is_complete());
    }

    #[test]
    fn test_blank_field_fails_validation() {
        let mut details = complete_details();
        details.pincode = "   ".to_string();
        assert!(!details.is_complete());
    }

    #[test]
    fn test_default_details_fail_validation() {
        assert!(!DeliveryDetails::default().is_complete());
    }

    #[test]
    fn test_order_id_format() {
        let order_id = generate_order_id();
        let digits = order_id.strip_prefix("#PM").unwrap();
        assert_eq!(digits.len(), 6);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_payment_label() {
        assert_eq!(payment_label("online"), "Online Payment");
        assert_eq!(payment_label("cod"), "Cash on Delivery");
        assert_eq!(payment_label(""), "Cash on Delivery");
    }
}
