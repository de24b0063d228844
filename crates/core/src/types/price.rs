//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts use [`Decimal`] so money arithmetic is exact; catalog prices are
/// whole rupees but derived values (taxes) may be computed at higher scale
/// before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create an INR price from a whole-rupee amount.
    #[must_use]
    pub fn from_rupees(rupees: i64) -> Self {
        Self {
            amount: Decimal::from(rupees),
            currency_code: CurrencyCode::INR,
        }
    }
}

impl fmt::Display for Price {
    /// Formats as the currency symbol followed by the normalized amount,
    /// e.g. `₹299`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.currency_code.symbol(),
            self.amount.normalize()
        )
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
}

impl CurrencyCode {
    /// The display symbol for the currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::INR => "₹",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::INR => "INR",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees() {
        let price = Price::from_rupees(299);
        assert_eq!(price.amount, Decimal::from(299));
        assert_eq!(price.currency_code, CurrencyCode::INR);
    }

    #[test]
    fn test_display_whole_rupees() {
        assert_eq!(Price::from_rupees(299).to_string(), "₹299");
        assert_eq!(Price::from_rupees(0).to_string(), "₹0");
    }

    #[test]
    fn test_display_normalizes_trailing_zeros() {
        let price = Price::new(Decimal::new(29900, 2), CurrencyCode::INR);
        assert_eq!(price.to_string(), "₹299");
    }

    #[test]
    fn test_currency_code() {
        assert_eq!(CurrencyCode::INR.symbol(), "₹");
        assert_eq!(CurrencyCode::INR.code(), "INR");
    }
}
