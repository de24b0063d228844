//! HTTP route handlers.
//!
//! Route tree:
//!
//! ```text
//! GET  /                          Home page
//! GET  /shop                      Product listing with search, filter, sort
//! GET  /product/{id}              Product detail
//! GET  /cart                      Cart page
//! POST /cart/add                  Add a variant (HTMX, returns nav badge)
//! POST /cart/update               Set line quantity (HTMX, returns cart body)
//! POST /cart/remove               Remove a line (HTMX, returns cart body)
//! POST /cart/clear                Empty the cart (HTMX, returns cart body)
//! GET  /cart/count                Nav badge fragment
//! GET  /checkout                  Delivery details form
//! POST /checkout/details          Validate details, show payment step
//! POST /checkout/place-order      Place the order, show confirmation
//! GET  /story                     Brand story (markdown)
//! GET  /trust                     Quality and certifications (markdown)
//! GET  /recipes                   Recipes (markdown)
//! ```
//!
//! `GET /health` and the `/static` file service are wired up in
//! [`crate::build_app`].

use askama::Template;
use askama_web::WebTemplate;
use axum::http::Uri;
use axum::{
    Router,
    routing::{get, post},
};

use crate::error::AppError;
use crate::filters;
use crate::state::AppState;

pub mod cart;
pub mod checkout;
pub mod home;
pub mod pages;
pub mod products;
pub mod shop;

/// Branded 404 page.
#[derive(Template, WebTemplate)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;

/// Fallback for unmatched paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_owned())
}

fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/checkout", get(checkout::details))
        .route("/checkout/details", post(checkout::payment))
        .route("/checkout/place-order", post(checkout::place_order))
}

/// Assemble the full route tree.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/shop", get(shop::index))
        .route("/product/{id}", get(products::show))
        .nest("/cart", cart_routes())
        .merge(checkout_routes())
        .merge(pages::router())
        .fallback(not_found)
}
