//! Catalog entities: products, variants, and categories.
//!
//! Products are immutable catalog data. They are never created or destroyed
//! at runtime; the storefront crate owns the static catalog and the lookup
//! functions over it.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::types::{HeatLevel, Price, ProductId};

/// Error parsing a [`Category`] from its slug.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

/// Product category shown in shop filters and on cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Blends,
    SingleSpices,
}

impl Category {
    /// URL-safe identifier used in query strings.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Blends => "blends",
            Self::SingleSpices => "single-spices",
        }
    }

    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blends => "Blends",
            Self::SingleSpices => "Single Spices",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blends" => Ok(Self::Blends),
            "single-spices" => Ok(Self::SingleSpices),
            other => Err(CategoryParseError(other.to_owned())),
        }
    }
}

/// A purchasable size/price option belonging to a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Size label, e.g. `50g`.
    pub size: String,
    /// Price for this size.
    pub price: Price,
}

/// A catalog product.
///
/// `price` and `original_price` describe the product's headline (100g)
/// pricing; per-size prices live on the variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    /// Pre-discount price, when the product is on offer.
    pub original_price: Option<Price>,
    /// Image URL for cards and the detail gallery.
    pub image: String,
    pub category: Category,
    pub description: String,
    pub aroma: String,
    pub taste: String,
    pub heat: HeatLevel,
    /// Dishes and preparations the spice works in.
    pub usage: Vec<String>,
    pub variants: Vec<Variant>,
    pub in_stock: bool,
    pub featured: bool,
    pub best_seller: bool,
    pub new_arrival: bool,
}

impl Product {
    /// Look up a variant by its size label.
    #[must_use]
    pub fn variant(&self, size: &str) -> Option<&Variant> {
        self.variants.iter().find(|v| v.size == size)
    }

    /// The variant preselected in the UI: the 100g pack when present,
    /// otherwise the first listed size.
    #[must_use]
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.get(1).or_else(|| self.variants.first())
    }

    /// Discount percentage against the original price, rounded half away
    /// from zero. `None` when the product is not discounted.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?.amount;
        if original <= Decimal::ZERO {
            return None;
        }
        let percent = (original - self.price.amount) / original * Decimal::from(100);
        percent
            .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
            .to_u32()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Royal Garam Masala".to_owned(),
            price: Price::from_rupees(299),
            original_price: Some(Price::from_rupees(399)),
            image: "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?w=500".to_owned(),
            category: Category::Blends,
            description: "Signature blend.".to_owned(),
            aroma: "Warm".to_owned(),
            taste: "Rich".to_owned(),
            heat: HeatLevel::Hot,
            usage: vec!["Biryani".to_owned()],
            variants: vec![
                Variant {
                    size: "50g".to_owned(),
                    price: Price::from_rupees(199),
                },
                Variant {
                    size: "100g".to_owned(),
                    price: Price::from_rupees(299),
                },
                Variant {
                    size: "200g".to_owned(),
                    price: Price::from_rupees(499),
                },
            ],
            in_stock: true,
            featured: true,
            best_seller: true,
            new_arrival: false,
        }
    }

    #[test]
    fn test_variant_lookup() {
        let product = sample_product();
        assert_eq!(
            product.variant("100g").unwrap().price,
            Price::from_rupees(299)
        );
        assert!(product.variant("500g").is_none());
    }

    #[test]
    fn test_default_variant_is_100g() {
        let product = sample_product();
        assert_eq!(product.default_variant().unwrap().size, "100g");
    }

    #[test]
    fn test_default_variant_falls_back_to_first() {
        let mut product = sample_product();
        product.variants.truncate(1);
        assert_eq!(product.default_variant().unwrap().size, "50g");
    }

    #[test]
    fn test_discount_percent() {
        // (399 - 299) / 399 * 100 = 25.06... -> 25
        assert_eq!(sample_product().discount_percent(), Some(25));
    }

    #[test]
    fn test_discount_percent_without_original_price() {
        let mut product = sample_product();
        product.original_price = None;
        assert_eq!(product.discount_percent(), None);
    }

    #[test]
    fn test_category_slug_roundtrip() {
        for category in [Category::Blends, Category::SingleSpices] {
            assert_eq!(category.slug().parse::<Category>().unwrap(), category);
        }
        assert!("masala".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Blends.to_string(), "Blends");
        assert_eq!(Category::SingleSpices.to_string(), "Single Spices");
    }
}
