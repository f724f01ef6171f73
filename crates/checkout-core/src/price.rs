//! Price math for the checkout summary
//!
//! All amounts are `Decimal` and rounded to cents half-up, matching how
//! currency is displayed on the page.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Flight price before any coupon
pub const ORIGINAL_PRICE: Decimal = dec!(299.99);

/// Decimal places used for currency
pub const CURRENCY_PRECISION: u32 = 2;

/// Round an amount to cents, half-up
pub fn round2(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

/// Format an amount as `$X.YY`
pub fn format_currency(amount: Decimal) -> String {
    format!("${:.2}", round2(amount))
}

/// Derived price figures for a given discount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSummary {
    pub original: Decimal,
    pub discount: Decimal,
    pub discounted: Decimal,
    pub savings: Decimal,
}

impl PriceSummary {
    /// `discounted = round2(original * (1 - discount))`,
    /// `savings = round2(original - discounted)`
    pub fn compute(original: Decimal, discount: Decimal) -> Self {
        let discounted = round2(original * (Decimal::ONE - discount));
        let savings = round2(original - discounted);
        Self {
            original,
            discount,
            discounted,
            savings,
        }
    }

    /// Summary with no coupon applied
    pub fn undiscounted(original: Decimal) -> Self {
        Self::compute(original, Decimal::ZERO)
    }

    /// Whether the discount line, strikethrough and savings badge apply
    pub fn has_discount(&self) -> bool {
        self.discount > Decimal::ZERO
    }

    /// Whole-number percentage of the discount
    pub fn discount_percent(&self) -> Decimal {
        (self.discount * dec!(100)).round()
    }
}

impl Default for PriceSummary {
    fn default() -> Self {
        Self::undiscounted(ORIGINAL_PRICE)
    }
}
