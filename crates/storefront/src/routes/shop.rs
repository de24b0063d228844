//! Shop page: search, filter chips, and sorting.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::Query;
use serde::Deserialize;
use tracing::instrument;

use crate::catalog::{self, ShopFilter, SortOrder};
use crate::filters;

use super::products::ProductCardView;

/// Shop page query parameters.
///
/// Unknown filter and sort values fall back to the defaults so stale links
/// keep working.
#[derive(Debug, Default, Deserialize)]
pub struct ShopQuery {
    pub q: Option<String>,
    pub filter: Option<String>,
    pub sort: Option<String>,
}

/// One filter chip above the product grid.
pub struct FilterChip {
    pub label: &'static str,
    pub href: String,
    pub active: bool,
}

/// One option in the sort dropdown.
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Shop page template.
#[derive(Template, WebTemplate)]
#[template(path = "shop/index.html")]
pub struct ShopIndexTemplate {
    pub products: Vec<ProductCardView>,
    pub chips: Vec<FilterChip>,
    pub sort_options: Vec<SortOption>,
    /// Current search text, echoed into the search box.
    pub query: String,
    /// Current filter value, carried by the sort form.
    pub filter_value: &'static str,
    pub shown: usize,
    pub total: usize,
    /// Whether any non-default search, filter, or sort is active.
    pub filtered: bool,
}

/// Display the shop page.
#[instrument]
pub async fn index(Query(params): Query<ShopQuery>) -> ShopIndexTemplate {
    let query = params.q.unwrap_or_default();
    let filter = ShopFilter::parse(params.filter.as_deref());
    let sort = SortOrder::parse(params.sort.as_deref());

    let results = catalog::shop_products(&query, filter, sort);
    let shown = results.len();
    let total = catalog::all_products().len();

    let chips = ShopFilter::ALL
        .iter()
        .map(|&f| FilterChip {
            label: f.label(),
            href: chip_href(f, &query, sort),
            active: f == filter,
        })
        .collect();

    let sort_options = SortOrder::ALL
        .iter()
        .map(|&s| SortOption {
            value: s.value(),
            label: s.label(),
            selected: s == sort,
        })
        .collect();

    let filtered = !query.trim().is_empty()
        || filter != ShopFilter::default()
        || sort != SortOrder::default();

    ShopIndexTemplate {
        products: results.into_iter().map(ProductCardView::from).collect(),
        chips,
        sort_options,
        query,
        filter_value: filter.value(),
        shown,
        total,
        filtered,
    }
}

/// Chip link that switches the filter while preserving search and sort.
fn chip_href(filter: ShopFilter, query: &str, sort: SortOrder) -> String {
    let mut href = format!("/shop?filter={}", filter.value());
    if !query.trim().is_empty() {
        href.push_str("&q=");
        href.push_str(&urlencoding::encode(query));
    }
    if sort != SortOrder::default() {
        href.push_str("&sort=");
        href.push_str(sort.value());
    }
    href
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chip_href_bare_filter() {
        let href = chip_href(ShopFilter::BestSellers, "", SortOrder::Featured);
        assert_eq!(href, "/shop?filter=best-sellers");
    }

    #[test]
    fn test_chip_href_preserves_encoded_query_and_sort() {
        let href = chip_href(ShopFilter::All, "garam masala", SortOrder::PriceLowToHigh);
        assert_eq!(href, "/shop?filter=all&q=garam%20masala&sort=price-low");
    }

    #[test]
    fn test_chip_href_skips_blank_query() {
        let href = chip_href(ShopFilter::NewArrivals, "   ", SortOrder::Featured);
        assert_eq!(href, "/shop?filter=new-arrivals");
    }
}
