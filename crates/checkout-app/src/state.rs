//! Application state (Model in TEA pattern)

use checkout_core::prelude::*;
use checkout_core::{
    validate, AppliedCoupon, CouponCatalog, CouponError, Decimal, PriceSummary, ORIGINAL_PRICE,
};

use crate::config::Settings;

/// Outcome of the last coupon interaction
///
/// A single tagged value instead of loose `applied`/`discount`/`error`
/// fields: an applied coupon and an error message can never coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CouponStatus {
    /// Nothing applied, nothing to report
    #[default]
    Idle,
    /// A coupon is applied
    Applied(AppliedCoupon),
    /// The last validation failed and no coupon is applied
    Rejected(CouponError),
}

/// Coupon form and price state for the checkout page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutState {
    /// Raw text in the coupon input
    pub input: String,
    pub coupon: CouponStatus,
    original_price: Decimal,
    catalog: CouponCatalog,
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckoutState {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            coupon: CouponStatus::Idle,
            original_price: ORIGINAL_PRICE,
            catalog: CouponCatalog::standard(),
        }
    }

    pub fn catalog(&self) -> &CouponCatalog {
        &self.catalog
    }

    pub fn original_price(&self) -> Decimal {
        self.original_price
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Validate the current input against the catalog
    ///
    /// - success: coupon applied, input cleared
    /// - `InvalidCode`: any applied coupon is revoked, input kept
    /// - `EmptyInput`: an applied coupon is kept (the error is only stored
    ///   when nothing is applied), input kept
    pub fn validate_coupon(&mut self) -> std::result::Result<AppliedCoupon, CouponError> {
        match validate(&self.input, &self.catalog) {
            Ok(coupon) => {
                self.coupon = CouponStatus::Applied(coupon.clone());
                self.input.clear();
                Ok(coupon)
            }
            Err(err) => {
                if err.revokes_applied() || !self.is_coupon_applied() {
                    self.coupon = CouponStatus::Rejected(err.clone());
                } else {
                    debug!("Empty coupon input ignored while a coupon is applied");
                }
                Err(err)
            }
        }
    }

    /// Reset to the no-coupon state. Idempotent.
    ///
    /// Returns the coupon that was removed, if any.
    pub fn remove_coupon(&mut self) -> Option<AppliedCoupon> {
        let previous = std::mem::take(&mut self.coupon);
        self.input.clear();
        match previous {
            CouponStatus::Applied(coupon) => Some(coupon),
            _ => None,
        }
    }

    pub fn applied_coupon(&self) -> Option<&AppliedCoupon> {
        match &self.coupon {
            CouponStatus::Applied(coupon) => Some(coupon),
            _ => None,
        }
    }

    pub fn applied_coupon_code(&self) -> Option<&str> {
        self.applied_coupon().map(|c| c.code.as_str())
    }

    pub fn is_coupon_applied(&self) -> bool {
        self.applied_coupon().is_some()
    }

    /// Discount fraction, zero when no coupon is applied
    pub fn discount(&self) -> Decimal {
        self.applied_coupon()
            .map(|c| c.discount)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn error(&self) -> Option<&CouponError> {
        match &self.coupon {
            CouponStatus::Rejected(err) => Some(err),
            _ => None,
        }
    }

    /// Inline error text under the coupon input
    pub fn error_message(&self) -> Option<String> {
        self.error().map(|e| e.to_string())
    }

    pub fn price_summary(&self) -> PriceSummary {
        PriceSummary::compute(self.original_price, self.discount())
    }
}

/// Focusable controls on the checkout screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Coupon text input
    #[default]
    Input,
    /// "Validar" button
    Validate,
    /// "Remover" button
    Remove,
    /// "Confirmar Reserva" button
    Confirm,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug, Clone)]
pub struct AppState {
    pub checkout: CheckoutState,
    pub focus: Focus,
    pub phase: AppPhase,
    pub settings: Settings,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            checkout: CheckoutState::new(),
            focus: Focus::Input,
            phase: AppPhase::Running,
            settings,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Controls currently on screen, in tab order
    pub fn focus_order(&self) -> &'static [Focus] {
        if self.checkout.is_coupon_applied() {
            &[Focus::Remove, Focus::Confirm]
        } else {
            &[Focus::Input, Focus::Validate, Focus::Confirm]
        }
    }

    pub fn focus_next(&mut self) {
        self.step_focus(1);
    }

    pub fn focus_previous(&mut self) {
        let len = self.focus_order().len();
        self.step_focus(len - 1);
    }

    fn step_focus(&mut self, offset: usize) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + offset) % order.len()];
    }

    /// Move focus off controls that the current coupon state hides
    pub fn normalize_focus(&mut self) {
        let applied = self.checkout.is_coupon_applied();
        self.focus = match self.focus {
            Focus::Input | Focus::Validate if applied => Focus::Remove,
            Focus::Remove if !applied => Focus::Input,
            focus => focus,
        };
    }
}
