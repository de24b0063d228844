//! Product route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use prayan_core::{Product, ProductId, Variant};
use serde::Deserialize;
use tracing::instrument;

use crate::catalog;
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;

/// Product card display data for grids (home, shop, related products).
#[derive(Clone)]
pub struct ProductCardView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: String,
    pub original_price: Option<String>,
    pub discount_percent: Option<u32>,
    pub image: String,
    pub category_label: &'static str,
    pub heat_level: u8,
    /// Pack size the card's add-to-cart button posts.
    pub default_size: String,
    pub best_seller: bool,
    pub new_arrival: bool,
    pub in_stock: bool,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
            original_price: product.original_price.map(|p| p.to_string()),
            discount_percent: product.discount_percent(),
            image: product.image.clone(),
            category_label: product.category.label(),
            heat_level: product.heat.as_u8(),
            default_size: product
                .default_variant()
                .map_or_else(String::new, |v| v.size.clone()),
            best_seller: product.best_seller,
            new_arrival: product.new_arrival,
            in_stock: product.in_stock,
        }
    }
}

/// Variant display data for the pack-size selector.
#[derive(Clone)]
pub struct VariantView {
    pub size: String,
    pub price: String,
    pub selected: bool,
}

/// Full product display data for the detail page.
#[derive(Clone)]
pub struct ProductDetailView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub aroma: String,
    pub taste: String,
    pub usage: Vec<String>,
    pub image: String,
    pub category_label: &'static str,
    pub heat_level: u8,
    pub heat_label: &'static str,
    /// Price of the selected variant.
    pub price: String,
    pub original_price: Option<String>,
    pub discount_percent: Option<u32>,
    pub variants: Vec<VariantView>,
    pub selected_size: String,
    pub whatsapp_url: String,
    pub best_seller: bool,
    pub new_arrival: bool,
    pub in_stock: bool,
}

impl ProductDetailView {
    fn new(product: &Product, selected: &Variant, whatsapp_phone: &str) -> Self {
        Self {
            id: product.id.as_i32(),
            name: product.name.clone(),
            description: product.description.clone(),
            aroma: product.aroma.clone(),
            taste: product.taste.clone(),
            usage: product.usage.clone(),
            image: product.image.clone(),
            category_label: product.category.label(),
            heat_level: product.heat.as_u8(),
            heat_label: product.heat.label(),
            price: selected.price.to_string(),
            original_price: product.original_price.map(|p| p.to_string()),
            discount_percent: product.discount_percent(),
            variants: product
                .variants
                .iter()
                .map(|v| VariantView {
                    size: v.size.clone(),
                    price: v.price.to_string(),
                    selected: v.size == selected.size,
                })
                .collect(),
            selected_size: selected.size.clone(),
            whatsapp_url: whatsapp_order_url(whatsapp_phone, product, selected),
            best_seller: product.best_seller,
            new_arrival: product.new_arrival,
            in_stock: product.in_stock,
        }
    }
}

/// Query parameters for the product detail page.
#[derive(Debug, Deserialize)]
pub struct ShowQuery {
    /// Selected pack size; unknown sizes fall back to the default variant.
    pub size: Option<String>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: ProductDetailView,
    pub related: Vec<ProductCardView>,
}

/// Display product detail page.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ShowQuery>,
) -> Result<ProductShowTemplate> {
    let product = catalog::product_by_id(ProductId::new(id))
        .ok_or_else(|| AppError::NotFound(format!("/product/{id}")))?;

    let selected = query
        .size
        .as_deref()
        .and_then(|size| product.variant(size))
        .or_else(|| product.default_variant())
        .ok_or_else(|| AppError::Internal(format!("product {id} has no variants")))?;

    Ok(ProductShowTemplate {
        product: ProductDetailView::new(product, selected, &state.config().whatsapp_phone),
        related: related_products(product)
            .into_iter()
            .map(ProductCardView::from)
            .collect(),
    })
}

/// Up to three other products from the same category.
fn related_products(product: &Product) -> Vec<&'static Product> {
    catalog::all_products()
        .iter()
        .filter(|p| p.category == product.category && p.id != product.id)
        .take(3)
        .collect()
}

/// Build a `wa.me` deep link prefilled with an order enquiry for the
/// selected pack size.
fn whatsapp_order_url(phone: &str, product: &Product, variant: &Variant) -> String {
    let message = format!(
        "Hi! I'm interested in ordering {} ({} - {}). Can you help me with the details?",
        product.name, variant.size, variant.price
    );
    format!("https://wa.me/{phone}?text={}", urlencoding::encode(&message))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn garam_masala() -> &'static Product {
        catalog::product_by_id(ProductId::new(1)).unwrap()
    }

    #[test]
    fn test_whatsapp_url_encodes_message() {
        let product = garam_masala();
        let variant = product.variant("100g").unwrap();
        let url = whatsapp_order_url("919876543210", product, variant);

        assert!(url.starts_with("https://wa.me/919876543210?text="));
        assert!(url.contains("Royal%20Garam%20Masala"));
        assert!(url.contains("100g"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_card_view_discount() {
        // 299 from 399 is a 25% discount
        let card = ProductCardView::from(garam_masala());
        assert_eq!(card.price, "₹299");
        assert_eq!(card.original_price.as_deref(), Some("₹399"));
        assert_eq!(card.discount_percent, Some(25));
    }

    #[test]
    fn test_card_view_without_discount() {
        let turmeric = catalog::product_by_id(ProductId::new(3)).unwrap();
        let card = ProductCardView::from(turmeric);
        assert!(card.original_price.is_none());
        assert!(card.discount_percent.is_none());
    }

    #[test]
    fn test_detail_view_marks_selected_variant() {
        let product = garam_masala();
        let selected = product.variant("200g").unwrap();
        let view = ProductDetailView::new(product, selected, "919876543210");

        assert_eq!(view.selected_size, "200g");
        assert_eq!(view.price, "₹499");
        let marked: Vec<&str> = view
            .variants
            .iter()
            .filter(|v| v.selected)
            .map(|v| v.size.as_str())
            .collect();
        assert_eq!(marked, vec!["200g"]);
    }

    #[test]
    fn test_related_products_same_category_excluding_self() {
        let product = garam_masala();
        let related = related_products(product);

        assert!(!related.is_empty());
        assert!(related.len() <= 3);
        for other in related {
            assert_eq!(other.category, product.category);
            assert_ne!(other.id, product.id);
        }
    }
}
