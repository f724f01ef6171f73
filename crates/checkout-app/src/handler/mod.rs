//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers per focused control

pub(crate) mod keys;
pub(crate) mod update;


use checkout_core::{AppliedCoupon, CouponError};

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Something the driver may want to report after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutEvent {
    CouponApplied(AppliedCoupon),
    CouponRejected {
        error: CouponError,
        /// A previously applied coupon was revoked by this rejection
        revoked: Option<AppliedCoupon>,
    },
    CouponRemoved {
        removed: Option<AppliedCoupon>,
    },
    /// "Confirmar Reserva" was pressed; booking itself is not performed
    BookingRequested,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional outcome for the driver to report
    pub event: Option<CheckoutEvent>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            event: None,
        }
    }

    pub fn event(event: CheckoutEvent) -> Self {
        Self {
            message: None,
            event: Some(event),
        }
    }
}
