//! Headless mode runner - replays coupon submissions without the TUI

use checkout_app::config::Settings;
use checkout_app::{process_message, AppState, CheckoutEvent, CheckoutView, Message};
use checkout_core::prelude::*;

use super::HeadlessEvent;

/// `--coupon` value that removes the applied coupon instead of submitting a code
pub const REMOVE_MARKER: &str = "-";

/// Run in headless mode - output JSON events instead of TUI
pub fn run_headless(settings: Settings, coupons: &[String]) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Airline Checkout starting in HEADLESS mode");
    info!("{} coupon action(s)", coupons.len());
    info!("═══════════════════════════════════════════════════════");

    for event in build_events(settings, coupons) {
        event.emit();
    }

    info!("Airline Checkout headless mode exiting");
    Ok(())
}

/// Apply each action in order and collect the resulting events,
/// ending with a `summary` of the final screen
pub fn build_events(settings: Settings, coupons: &[String]) -> Vec<HeadlessEvent> {
    let mut state = AppState::with_settings(settings);
    let mut out = Vec::with_capacity(coupons.len() + 1);

    for raw in coupons {
        let message = if raw == REMOVE_MARKER {
            Message::RemoveCoupon
        } else {
            // The applied-coupon screen hides the input, so write it directly
            // rather than through InputChanged
            state.checkout.set_input(raw.as_str());
            Message::ValidateCoupon
        };

        for event in process_message(&mut state, message) {
            out.push(convert(&state, raw, event));
        }
    }

    debug!(
        "Headless run finished with coupon {:?}",
        state.checkout.applied_coupon_code()
    );
    out.push(HeadlessEvent::summary(CheckoutView::project(&state)));
    out
}

fn convert(state: &AppState, raw: &str, event: CheckoutEvent) -> HeadlessEvent {
    match event {
        CheckoutEvent::CouponApplied(coupon) => {
            HeadlessEvent::coupon_applied(&coupon, &state.checkout.price_summary())
        }
        CheckoutEvent::CouponRejected { error, revoked } => {
            HeadlessEvent::coupon_rejected(raw, &error, revoked.as_ref())
        }
        CheckoutEvent::CouponRemoved { removed } => HeadlessEvent::coupon_removed(removed.as_ref()),
        // Not produced by coupon actions
        CheckoutEvent::BookingRequested => {
            HeadlessEvent::error("Unexpected booking request".to_string(), false)
        }
    }
}
