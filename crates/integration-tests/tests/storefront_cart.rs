//! Integration tests for the cookie-backed cart.
//!
//! The cart lives entirely in a signed cookie, so these tests exercise the
//! full round trip: HTMX fragment responses, the `HX-Trigger` header that
//! refreshes the nav badge, and totals crossing the free-shipping threshold.

use prayan_integration_tests::TestApp;
use reqwest::StatusCode;

// ============================================================================
// Cart Count Badge
// ============================================================================

#[tokio::test]
async fn test_count_is_blank_for_fresh_visitor() {
    let app = TestApp::spawn().await;

    let resp = app.get("/cart/count").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = resp.text().await.expect("Failed to read body");
    assert_eq!(body.trim(), "");
}

#[tokio::test]
async fn test_add_returns_badge_and_htmx_trigger() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form("/cart/add", &[("product_id", "1"), ("size", "100g")])
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("HX-Trigger")
            .expect("HX-Trigger header missing"),
        "cart-updated"
    );

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("cart-badge"));
    assert!(body.contains('1'));
}

#[tokio::test]
async fn test_add_unknown_product_is_rejected() {
    let app = TestApp::spawn().await;

    let resp = app
        .post_form("/cart/add", &[("product_id", "999"), ("size", "100g")])
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = app
        .post_form("/cart/add", &[("product_id", "1"), ("size", "5kg")])
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ============================================================================
// Totals & Free Shipping
// ============================================================================

#[tokio::test]
async fn test_totals_above_free_shipping_threshold() {
    let app = TestApp::spawn().await;

    // Two packs of garam masala plus one turmeric: 299 + 299 + 199 = 797.
    app.post_form("/cart/add", &[("product_id", "1"), ("size", "100g")])
        .await;
    app.post_form("/cart/add", &[("product_id", "1"), ("size", "100g")])
        .await;
    app.post_form("/cart/add", &[("product_id", "3"), ("size", "100g")])
        .await;

    let body = app
        .get("/cart")
        .await
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("3 items in your cart"));
    assert!(body.contains("₹797"));
    assert!(body.contains("Free"));
    assert!(body.contains("₹143"));
    assert!(body.contains("₹940"));
}

#[tokio::test]
async fn test_totals_below_free_shipping_threshold() {
    let app = TestApp::spawn().await;

    // A single 100g turmeric pack stays under the threshold.
    app.post_form("/cart/add", &[("product_id", "3"), ("size", "100g")])
        .await;

    let body = app
        .get("/cart")
        .await
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("1 item in your cart"));
    assert!(body.contains("₹199"));
    assert!(body.contains("₹50"));
    assert!(body.contains("₹36"));
    assert!(body.contains("₹285"));
    assert!(body.contains("Free shipping on orders above ₹500"));
}

// ============================================================================
// Update, Remove, Clear
// ============================================================================

#[tokio::test]
async fn test_update_quantity_recalculates_totals() {
    let app = TestApp::spawn().await;

    app.post_form("/cart/add", &[("product_id", "1"), ("size", "100g")])
        .await;
    app.post_form("/cart/add", &[("product_id", "1"), ("size", "100g")])
        .await;
    app.post_form("/cart/add", &[("product_id", "3"), ("size", "100g")])
        .await;

    // Drop garam masala back to one pack: 299 + 199 = 498, under the
    // threshold, so the flat fee applies again.
    let resp = app
        .post_form(
            "/cart/update",
            &[("product_id", "1"), ("size", "100g"), ("quantity", "1")],
        )
        .await;
    assert_eq!(
        resp.headers()
            .get("HX-Trigger")
            .expect("HX-Trigger header missing"),
        "cart-updated"
    );

    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("₹498"));
    assert!(body.contains("₹50"));
    assert!(body.contains("₹90"));
    assert!(body.contains("₹638"));
}

#[tokio::test]
async fn test_update_to_zero_removes_line() {
    let app = TestApp::spawn().await;

    app.post_form("/cart/add", &[("product_id", "1"), ("size", "100g")])
        .await;

    let body = app
        .post_form(
            "/cart/update",
            &[("product_id", "1"), ("size", "100g"), ("quantity", "0")],
        )
        .await
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("Your Cart is Empty"));
}

#[tokio::test]
async fn test_remove_line() {
    let app = TestApp::spawn().await;

    app.post_form("/cart/add", &[("product_id", "1"), ("size", "100g")])
        .await;
    app.post_form("/cart/add", &[("product_id", "3"), ("size", "100g")])
        .await;

    let body = app
        .post_form("/cart/remove", &[("product_id", "3"), ("size", "100g")])
        .await
        .text()
        .await
        .expect("Failed to read body");
    assert!(!body.contains("Organic Turmeric Powder"));
    assert!(body.contains("Royal Garam Masala"));
    assert!(body.contains("₹299"));
    assert!(body.contains("₹403"));
}

#[tokio::test]
async fn test_clear_empties_cart() {
    let app = TestApp::spawn().await;

    app.post_form("/cart/add", &[("product_id", "1"), ("size", "100g")])
        .await;
    app.post_form("/cart/add", &[("product_id", "2"), ("size", "50g")])
        .await;

    let body = app
        .post_form("/cart/clear", &[])
        .await
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("Your Cart is Empty"));

    let count = app
        .get("/cart/count")
        .await
        .text()
        .await
        .expect("Failed to read body");
    assert_eq!(count.trim(), "");
}

// ============================================================================
// Cookie Isolation
// ============================================================================

#[tokio::test]
async fn test_cart_persists_across_requests() {
    let app = TestApp::spawn().await;

    app.post_form("/cart/add", &[("product_id", "4"), ("size", "100g")])
        .await;

    // Same client, new request: the signed cookie carries the cart.
    let body = app
        .get("/cart")
        .await
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("Biryani Masala Supreme"));
}

#[tokio::test]
async fn test_other_visitors_see_an_empty_cart() {
    let app = TestApp::spawn().await;

    app.post_form("/cart/add", &[("product_id", "1"), ("size", "100g")])
        .await;

    // A client without the cookie jar is a different visitor.
    let stranger = reqwest::Client::new();
    let body = stranger
        .get(app.url("/cart"))
        .send()
        .await
        .expect("Request failed")
        .text()
        .await
        .expect("Failed to read body");
    assert!(body.contains("Your Cart is Empty"));
}
