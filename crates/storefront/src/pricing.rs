//! Order totals: shipping and GST.
//!
//! All money math is exact decimal arithmetic. The shipping threshold lives
//! here and nowhere else, so the cart page, checkout summary, and confirmation
//! can never disagree about when an order ships free.

use prayan_core::Cart;
use rust_decimal::{Decimal, RoundingStrategy};

/// Orders at or above this subtotal (in rupees) ship free.
pub const FREE_SHIPPING_THRESHOLD: i64 = 500;

/// Flat shipping fee (in rupees) below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: i64 = 50;

/// GST rate applied to the subtotal, as a percentage.
const TAX_RATE_PERCENT: i64 = 18;

/// Computed totals for an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    /// Totals for the current cart contents.
    #[must_use]
    pub fn for_cart(cart: &Cart) -> Self {
        Self::from_subtotal(cart.total_price())
    }

    /// Totals for a given subtotal.
    #[must_use]
    pub fn from_subtotal(subtotal: Decimal) -> Self {
        let shipping = shipping_fee(subtotal);
        let tax = tax_amount(subtotal);
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    /// Whether this order qualifies for free shipping.
    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping == Decimal::ZERO
    }
}

/// Flat fee below the threshold, free at or above it.
///
/// A zero subtotal still prices the flat fee; handlers keep empty carts out
/// of checkout so that case never reaches a customer.
fn shipping_fee(subtotal: Decimal) -> Decimal {
    if subtotal >= Decimal::from(FREE_SHIPPING_THRESHOLD) {
        Decimal::ZERO
    } else {
        Decimal::from(FLAT_SHIPPING_FEE)
    }
}

/// 18% GST on the subtotal, rounded to whole rupees with halves away from zero.
fn tax_amount(subtotal: Decimal) -> Decimal {
    (subtotal * Decimal::new(TAX_RATE_PERCENT, 2))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use prayan_core::{Cart, ProductId};

    use crate::catalog;

    #[test]
    fn test_shipping_free_at_threshold() {
        assert_eq!(shipping_fee(Decimal::from(500)), Decimal::ZERO);
        assert_eq!(shipping_fee(Decimal::from(501)), Decimal::ZERO);
    }

    #[test]
    fn test_shipping_charged_below_threshold() {
        assert_eq!(shipping_fee(Decimal::from(499)), Decimal::from(50));
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // 25 * 0.18 = 4.50, rounds up to 5
        assert_eq!(tax_amount(Decimal::from(25)), Decimal::from(5));
    }

    #[test]
    fn test_tax_rounds_down_below_half() {
        // 997 * 0.18 = 179.46, rounds down to 179
        assert_eq!(tax_amount(Decimal::from(997)), Decimal::from(179));
    }

    #[test]
    fn test_summary_above_threshold() {
        // 797 = two Royal Garam Masala 100g (299) + one turmeric 100g (199)
        let summary = OrderSummary::from_subtotal(Decimal::from(797));
        assert_eq!(summary.shipping, Decimal::ZERO);
        assert_eq!(summary.tax, Decimal::from(143));
        assert_eq!(summary.total, Decimal::from(940));
        assert!(summary.free_shipping());
    }

    #[test]
    fn test_summary_below_threshold() {
        let summary = OrderSummary::from_subtotal(Decimal::from(499));
        assert_eq!(summary.shipping, Decimal::from(50));
        assert_eq!(summary.tax, Decimal::from(90));
        assert_eq!(summary.total, Decimal::from(639));
        assert!(!summary.free_shipping());
    }

    #[test]
    fn test_zero_subtotal_charges_flat_fee() {
        let summary = OrderSummary::from_subtotal(Decimal::ZERO);
        assert_eq!(summary.shipping, Decimal::from(50));
        assert_eq!(summary.tax, Decimal::ZERO);
    }

    #[test]
    fn test_for_cart_matches_from_subtotal() {
        let garam = catalog::product_by_id(ProductId::new(1)).unwrap();
        let variant = garam.variant("200g").unwrap();
        let mut cart = Cart::new();
        cart.add_item(garam, variant);

        let summary = OrderSummary::for_cart(&cart);
        assert_eq!(summary, OrderSummary::from_subtotal(cart.total_price()));
        assert_eq!(summary.subtotal, Decimal::from(499));
    }
}
