//! Static product catalog with filtering, sorting, and search.
//!
//! The full range ships inside the binary (see [`data`]), so catalog reads
//! never touch the network or a database. Filter and sort values arrive as
//! query-string parameters; unknown values fall back to the defaults so stale
//! links keep working.

pub mod data;

pub use data::{all_products, product_by_id};

use std::cmp::Reverse;
use std::str::FromStr;

use prayan_core::{Category, Product};

/// Shop page sort orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Featured,
    PriceLowToHigh,
    PriceHighToLow,
    NameAToZ,
}

impl SortOrder {
    /// All sort orders, in display order.
    pub const ALL: [Self; 4] = [
        Self::Featured,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::NameAToZ,
    ];

    /// Parse a query-string value, falling back to the default.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("price-low") => Self::PriceLowToHigh,
            Some("price-high") => Self::PriceHighToLow,
            Some("name") => Self::NameAToZ,
            _ => Self::Featured,
        }
    }

    /// The query-string value for this sort order.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::NameAToZ => "name",
        }
    }

    /// Human-readable label for the sort dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::NameAToZ => "Name A-Z",
        }
    }
}

/// Shop page filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShopFilter {
    #[default]
    All,
    Category(Category),
    Featured,
    BestSellers,
    NewArrivals,
}

impl ShopFilter {
    /// All filters, in display order.
    pub const ALL: [Self; 6] = [
        Self::All,
        Self::Category(Category::Blends),
        Self::Category(Category::SingleSpices),
        Self::Featured,
        Self::BestSellers,
        Self::NewArrivals,
    ];

    /// Parse a query-string value, falling back to the default.
    #[must_use]
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("featured") => Self::Featured,
            Some("best-sellers") => Self::BestSellers,
            Some("new-arrivals") => Self::NewArrivals,
            Some(other) => Category::from_str(other).map_or(Self::All, Self::Category),
            None => Self::All,
        }
    }

    /// Whether a product passes this filter.
    #[must_use]
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => product.category == category,
            Self::Featured => product.featured,
            Self::BestSellers => product.best_seller,
            Self::NewArrivals => product.new_arrival,
        }
    }

    /// The query-string value for this filter.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Category(category) => category.slug(),
            Self::Featured => "featured",
            Self::BestSellers => "best-sellers",
            Self::NewArrivals => "new-arrivals",
        }
    }

    /// Human-readable label for the filter chips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Products",
            Self::Category(category) => category.label(),
            Self::Featured => "Featured",
            Self::BestSellers => "Best Sellers",
            Self::NewArrivals => "New Arrivals",
        }
    }
}

/// Products flagged for the home page feature grid, in catalog order.
#[must_use]
pub fn featured_products() -> Vec<&'static Product> {
    all_products().iter().filter(|p| p.featured).collect()
}

/// Apply search, filter, and sort for the shop page.
///
/// Search matches name, description, and category label,
/// case-insensitively. An empty or whitespace-only query matches
/// everything.
#[must_use]
pub fn shop_products(query: &str, filter: ShopFilter, sort: SortOrder) -> Vec<&'static Product> {
    let needle = query.trim().to_lowercase();

    let mut products: Vec<&'static Product> = all_products()
        .iter()
        .filter(|p| filter.matches(p))
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
                || p.category.label().to_lowercase().contains(&needle)
        })
        .collect();

    sort_products(&mut products, sort);
    products
}

fn sort_products(products: &mut [&'static Product], sort: SortOrder) {
    match sort {
        // Stable sort keeps catalog order within each group
        SortOrder::Featured => products.sort_by_key(|p| Reverse(p.featured)),
        SortOrder::PriceLowToHigh => products.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        SortOrder::PriceHighToLow => products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
        SortOrder::NameAToZ => products.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_parse_known_values() {
        assert_eq!(SortOrder::parse(Some("price-low")), SortOrder::PriceLowToHigh);
        assert_eq!(SortOrder::parse(Some("price-high")), SortOrder::PriceHighToLow);
        assert_eq!(SortOrder::parse(Some("name")), SortOrder::NameAToZ);
        assert_eq!(SortOrder::parse(Some("featured")), SortOrder::Featured);
    }

    #[test]
    fn test_sort_order_parse_unknown_falls_back() {
        assert_eq!(SortOrder::parse(Some("price-medium")), SortOrder::Featured);
        assert_eq!(SortOrder::parse(None), SortOrder::Featured);
    }

    #[test]
    fn test_shop_filter_parse_known_values() {
        assert_eq!(ShopFilter::parse(Some("all")), ShopFilter::All);
        assert_eq!(
            ShopFilter::parse(Some("blends")),
            ShopFilter::Category(Category::Blends)
        );
        assert_eq!(
            ShopFilter::parse(Some("single-spices")),
            ShopFilter::Category(Category::SingleSpices)
        );
        assert_eq!(ShopFilter::parse(Some("featured")), ShopFilter::Featured);
        assert_eq!(ShopFilter::parse(Some("best-sellers")), ShopFilter::BestSellers);
        assert_eq!(ShopFilter::parse(Some("new-arrivals")), ShopFilter::NewArrivals);
    }

    #[test]
    fn test_shop_filter_parse_unknown_falls_back() {
        assert_eq!(ShopFilter::parse(Some("exotic")), ShopFilter::All);
        assert_eq!(ShopFilter::parse(None), ShopFilter::All);
    }

    #[test]
    fn test_filter_matches_category() {
        let filter = ShopFilter::Category(Category::Blends);
        for product in all_products() {
            assert_eq!(filter.matches(product), product.category == Category::Blends);
        }
    }

    #[test]
    fn test_filter_matches_flags() {
        for product in all_products() {
            assert_eq!(ShopFilter::Featured.matches(product), product.featured);
            assert_eq!(ShopFilter::BestSellers.matches(product), product.best_seller);
            assert_eq!(ShopFilter::NewArrivals.matches(product), product.new_arrival);
            assert!(ShopFilter::All.matches(product));
        }
    }

    #[test]
    fn test_featured_filter_narrows_to_flagged_products() {
        let results = shop_products("", ShopFilter::Featured, SortOrder::Featured);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|p| p.featured));
    }

    #[test]
    fn test_shop_products_search_is_case_insensitive() {
        let by_lower = shop_products("garam", ShopFilter::All, SortOrder::Featured);
        let by_upper = shop_products("GARAM", ShopFilter::All, SortOrder::Featured);
        assert_eq!(by_lower.len(), by_upper.len());
        assert!(!by_lower.is_empty());
        assert!(by_lower.iter().all(|p| p.name.contains("Garam")));
    }

    #[test]
    fn test_shop_products_search_matches_description() {
        // "curcumin" appears only in the turmeric description
        let results = shop_products("curcumin", ShopFilter::All, SortOrder::Featured);
        assert_eq!(results.len(), 1);
        assert!(results.iter().all(|p| p.name.contains("Turmeric")));
    }

    #[test]
    fn test_shop_products_search_matches_category_label() {
        let results = shop_products("blends", ShopFilter::All, SortOrder::Featured);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|p| p.category == Category::Blends));

        let results = shop_products("single spices", ShopFilter::All, SortOrder::Featured);
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|p| p.category == Category::SingleSpices));
    }

    #[test]
    fn test_shop_products_blank_query_matches_everything() {
        let results = shop_products("   ", ShopFilter::All, SortOrder::Featured);
        assert_eq!(results.len(), all_products().len());
    }

    #[test]
    fn test_sort_price_low_to_high() {
        let results = shop_products("", ShopFilter::All, SortOrder::PriceLowToHigh);
        for pair in results.windows(2) {
            assert!(pair[0].price.amount <= pair[1].price.amount);
        }
    }

    #[test]
    fn test_sort_price_high_to_low() {
        let results = shop_products("", ShopFilter::All, SortOrder::PriceHighToLow);
        for pair in results.windows(2) {
            assert!(pair[0].price.amount >= pair[1].price.amount);
        }
    }

    #[test]
    fn test_sort_name_a_to_z() {
        let results = shop_products("", ShopFilter::All, SortOrder::NameAToZ);
        for pair in results.windows(2) {
            assert!(pair[0].name <= pair[1].name);
        }
    }

    #[test]
    fn test_sort_featured_puts_featured_first() {
        let results = shop_products("", ShopFilter::All, SortOrder::Featured);
        let first_regular = results.iter().position(|p| !p.featured);
        if let Some(boundary) = first_regular {
            assert!(results.iter().skip(boundary).all(|p| !p.featured));
        }
    }

    #[test]
    fn test_featured_products_all_flagged() {
        let featured = featured_products();
        assert!(!featured.is_empty());
        assert!(featured.iter().all(|p| p.featured));
    }
}
