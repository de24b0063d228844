//! The shopping cart: line items, mutations, and derived totals.
//!
//! The cart is the storefront's single source of truth for what the shopper
//! has selected. It is a plain in-memory collection with no I/O; the
//! storefront crate persists it to a client cookie and rehydrates it per
//! request.
//!
//! Line identity is the (product id, variant size) pair: two sizes of the
//! same product are distinct lines, and adding an existing product+size
//! again increments its quantity rather than duplicating the line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Product, Variant};
use crate::types::ProductId;

/// One cart entry: a product snapshot, the chosen variant, and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub variant: Variant,
    pub quantity: u32,
}

impl CartItem {
    /// Price of this line: variant price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.variant.price.amount * Decimal::from(self.quantity)
    }

    fn matches(&self, product_id: ProductId, size: &str) -> bool {
        self.product.id == product_id && self.variant.size == size
    }
}

/// The shopper's cart: an ordered collection of line items.
///
/// Lines keep insertion order. Every quantity is a positive integer; an
/// update that would take a quantity to zero or below removes the line
/// instead of retaining it at zero. Mutations never fail - removing or
/// updating an absent line is a silent no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from previously stored items.
    ///
    /// Lines with a zero quantity are dropped to uphold the
    /// positive-quantity invariant.
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        Self {
            items: items.into_iter().filter(|i| i.quantity > 0).collect(),
        }
    }

    /// Add one unit of a product variant.
    ///
    /// Increments the quantity of the matching (product id, size) line, or
    /// appends a new line with quantity 1. Always succeeds; the product's
    /// stock flag is not consulted.
    pub fn add_item(&mut self, product: &Product, variant: &Variant) {
        if let Some(item) = self
            .items
            .iter_mut()
            .find(|i| i.matches(product.id, &variant.size))
        {
            item.quantity = item.quantity.saturating_add(1);
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                variant: variant.clone(),
                quantity: 1,
            });
        }
    }

    /// Remove the line with the given identity. No-op if absent.
    pub fn remove_item(&mut self, product_id: ProductId, size: &str) {
        self.items.retain(|i| !i.matches(product_id, size));
    }

    /// Set a line's quantity exactly (not additively).
    ///
    /// A quantity of zero or below removes the line. No-op if the line is
    /// absent.
    pub fn update_quantity(&mut self, product_id: ProductId, size: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id, size);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.matches(product_id, size)) {
            item.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    /// Empty the cart unconditionally.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of (variant price × quantity) over all lines. Zero for an empty
    /// cart. No rounding is applied here.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Sum of quantities across all lines (not the number of distinct
    /// lines).
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate the lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
