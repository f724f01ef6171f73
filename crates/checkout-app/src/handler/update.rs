//! Main update function - handles state transitions (TEA pattern)

use checkout_core::prelude::*;

use crate::message::Message;
use crate::state::{AppPhase, AppState};

use super::{keys::handle_key, CheckoutEvent, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or event
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let result = match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Coupon Messages
        // ─────────────────────────────────────────────────────────
        Message::InputChanged { text } => {
            if state.checkout.is_coupon_applied() {
                trace!("Ignoring input change while a coupon is applied");
            } else {
                state.checkout.set_input(text);
            }
            UpdateResult::none()
        }

        Message::ValidateCoupon => handle_validate(state),

        Message::RemoveCoupon => {
            let removed = state.checkout.remove_coupon();
            match &removed {
                Some(coupon) => info!("Coupon {} removed", coupon.code),
                None => debug!("Remove requested with no coupon applied"),
            }
            UpdateResult::event(CheckoutEvent::CouponRemoved { removed })
        }

        Message::ConfirmBooking => {
            // Inert: booking is handled outside this screen.
            debug!(
                "Confirmar Reserva pressed (total {})",
                state.checkout.price_summary().discounted
            );
            UpdateResult::event(CheckoutEvent::BookingRequested)
        }

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus_next();
            UpdateResult::none()
        }

        Message::FocusPrevious => {
            state.focus_previous();
            UpdateResult::none()
        }
    };

    state.normalize_focus();
    result
}

fn handle_validate(state: &mut AppState) -> UpdateResult {
    let previous = state.checkout.applied_coupon().cloned();

    match state.checkout.validate_coupon() {
        Ok(coupon) => {
            info!(
                "Coupon {} applied ({}% off, total {})",
                coupon.code,
                coupon.percent(),
                state.checkout.price_summary().discounted
            );
            UpdateResult::event(CheckoutEvent::CouponApplied(coupon))
        }
        Err(error) => {
            let revoked = previous.filter(|_| error.revokes_applied());
            if let Some(coupon) = &revoked {
                info!("Coupon {} revoked by invalid retry", coupon.code);
            }
            info!("Coupon rejected: {:?}", error);
            UpdateResult::event(CheckoutEvent::CouponRejected { error, revoked })
        }
    }
}
