//! Headless mode - JSON event output instead of the TUI
//!
//! Each `--coupon` value is pushed through the same update path the
//! interactive screen uses, and the outcome is printed as an event.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"coupon_applied","code":"SAVE20","discount_percent":"20","total":"$239.99","savings":"$60.00","timestamp":1704700001000}
//! {"event":"coupon_rejected","input":"bogus","reason":"invalid_code","code":"BOGUS","message":"Código de cupón inválido","revoked":"SAVE20","timestamp":1704700001001}
//! {"event":"summary","view":{...},"timestamp":1704700001002}
//! ```

pub mod runner;

pub use runner::{build_events, run_headless, REMOVE_MARKER};

use checkout_app::CheckoutView;
use checkout_core::prelude::*;
use checkout_core::{format_currency, AppliedCoupon, CouponError, PriceSummary};
use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A code was accepted
    CouponApplied {
        code: String,
        discount_percent: String,
        total: String,
        savings: String,
        timestamp: i64,
    },

    /// A code was refused
    CouponRejected {
        /// Raw text as submitted
        input: String,
        /// `reason` tag plus the normalized `code` for unknown codes
        #[serde(flatten)]
        error: CouponError,
        message: String,
        /// Coupon that this rejection cleared, if any
        revoked: Option<String>,
        timestamp: i64,
    },

    /// The applied coupon was removed (`removed` is null when none was applied)
    CouponRemoved {
        removed: Option<String>,
        timestamp: i64,
    },

    /// Final screen contents
    Summary {
        view: Box<CheckoutView>,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        // Flush to ensure immediate output
        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Single-line JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The `event` tag of this event
    pub fn name(&self) -> &'static str {
        match self {
            Self::CouponApplied { .. } => "coupon_applied",
            Self::CouponRejected { .. } => "coupon_rejected",
            Self::CouponRemoved { .. } => "coupon_removed",
            Self::Summary { .. } => "summary",
            Self::Error { .. } => "error",
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn coupon_applied(coupon: &AppliedCoupon, summary: &PriceSummary) -> Self {
        Self::CouponApplied {
            code: coupon.code.clone(),
            discount_percent: coupon.percent().to_string(),
            total: format_currency(summary.discounted),
            savings: format_currency(summary.savings),
            timestamp: Self::now(),
        }
    }

    pub fn coupon_rejected(input: &str, error: &CouponError, revoked: Option<&AppliedCoupon>) -> Self {
        Self::CouponRejected {
            input: input.to_string(),
            error: error.clone(),
            message: error.to_string(),
            revoked: revoked.map(|c| c.code.clone()),
            timestamp: Self::now(),
        }
    }

    pub fn coupon_removed(removed: Option<&AppliedCoupon>) -> Self {
        Self::CouponRemoved {
            removed: removed.map(|c| c.code.clone()),
            timestamp: Self::now(),
        }
    }

    pub fn summary(view: CheckoutView) -> Self {
        Self::Summary {
            view: Box::new(view),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
