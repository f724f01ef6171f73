//! # checkout-core - Core Domain Types
//!
//! Foundation crate for Airline Checkout. Provides the coupon catalog and
//! validator, price math, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, rust_decimal, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Coupons (`coupon`)
//! - [`CouponCatalog`] - Fixed table of codes and discount fractions
//! - [`validate()`] - Normalize raw input and look it up
//! - [`AppliedCoupon`] - An accepted code with its discount
//! - [`CouponError`] - `EmptyInput` / `InvalidCode`
//!
//! ### Prices (`price`)
//! - [`PriceSummary`] - Discounted total and savings for a discount
//! - [`format_currency()`] - `$X.YY` display form
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Infrastructure errors (IO, JSON, terminal, configuration)
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use checkout_core::prelude::*;
//! ```

pub mod coupon;
pub mod error;
pub mod logging;
pub mod price;

/// Prelude for common imports used throughout all Airline Checkout crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use coupon::{
    normalize, validate, AppliedCoupon, CouponCatalog, CouponDefinition, CouponError,
    EMPTY_INPUT_MESSAGE, INVALID_CODE_MESSAGE,
};
pub use error::{Error, Result, ResultExt};
pub use price::{format_currency, round2, PriceSummary, ORIGINAL_PRICE};
pub use rust_decimal::Decimal;
