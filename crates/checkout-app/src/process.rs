//! Message processing loop shared by the TUI and headless drivers

use crate::handler::{update, CheckoutEvent};
use crate::message::Message;
use crate::state::AppState;

/// Process a message and every follow-up message it produces
///
/// Returns the events raised along the way, in order.
pub fn process_message(state: &mut AppState, message: Message) -> Vec<CheckoutEvent> {
    let mut events = Vec::new();
    let mut next = Some(message);

    while let Some(msg) = next {
        let result = update(state, msg);
        events.extend(result.event);
        next = result.message;
    }

    events
}
