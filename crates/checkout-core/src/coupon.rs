//! Coupon catalog and validation
//!
//! The catalog is a fixed table of upper-case codes mapped to discount
//! fractions in the open interval (0, 1). Validation normalizes raw user input
//! (trim + upper-case) and looks the result up in the catalog.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use thiserror::Error;

/// Message shown when the user validates an empty code
pub const EMPTY_INPUT_MESSAGE: &str = "Por favor ingresa un código de cupón";

/// Message shown when the code is not in the catalog
pub const INVALID_CODE_MESSAGE: &str = "Código de cupón inválido";

/// A single catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CouponDefinition {
    pub code: &'static str,
    pub discount: Decimal,
}

impl CouponDefinition {
    /// Whole-number percentage, e.g. `10` for a 0.10 discount
    pub fn percent(&self) -> Decimal {
        (self.discount * dec!(100)).round()
    }

    /// Label used in the "available coupons" list, e.g. `SAVE10 (10%)`
    pub fn label(&self) -> String {
        format!("{} ({}%)", self.code, self.percent())
    }
}

const STANDARD_COUPONS: [CouponDefinition; 4] = [
    CouponDefinition {
        code: "SAVE10",
        discount: dec!(0.10),
    },
    CouponDefinition {
        code: "SAVE20",
        discount: dec!(0.20),
    },
    CouponDefinition {
        code: "SUMMER25",
        discount: dec!(0.25),
    },
    CouponDefinition {
        code: "WELCOME15",
        discount: dec!(0.15),
    },
];

/// Immutable table of known coupon codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CouponCatalog {
    entries: &'static [CouponDefinition],
}

impl CouponCatalog {
    /// The catalog shipped with the checkout page
    pub const fn standard() -> Self {
        Self {
            entries: &STANDARD_COUPONS,
        }
    }

    /// Look up an already-normalized code
    pub fn get(&self, code: &str) -> Option<&CouponDefinition> {
        self.entries.iter().find(|entry| entry.code == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Entries in display order
    pub fn iter(&self) -> impl Iterator<Item = &CouponDefinition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CouponCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// A coupon accepted by [`validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedCoupon {
    /// Normalized (upper-case, trimmed) code
    pub code: String,
    /// Discount fraction, always in (0, 1)
    pub discount: Decimal,
}

impl AppliedCoupon {
    pub fn percent(&self) -> Decimal {
        (self.discount * dec!(100)).round()
    }
}

/// Why a coupon was rejected
///
/// Both variants are user-recoverable and rendered inline under the input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum CouponError {
    #[error("Por favor ingresa un código de cupón")]
    EmptyInput,

    #[error("Código de cupón inválido")]
    InvalidCode { code: String },
}

impl CouponError {
    /// Whether this rejection revokes a previously applied coupon
    pub fn revokes_applied(&self) -> bool {
        matches!(self, CouponError::InvalidCode { .. })
    }
}

/// Normalize raw user input into the catalog key form
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Validate raw user input against a catalog
pub fn validate(raw: &str, catalog: &CouponCatalog) -> Result<AppliedCoupon, CouponError> {
    let code = normalize(raw);

    if code.is_empty() {
        return Err(CouponError::EmptyInput);
    }

    match catalog.get(&code) {
        Some(entry) => Ok(AppliedCoupon {
            code,
            discount: entry.discount,
        }),
        None => Err(CouponError::InvalidCode { code }),
    }
}
