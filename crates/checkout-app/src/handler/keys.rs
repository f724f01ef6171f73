//! Key event handlers for the focused control

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on the focused control
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit from anywhere
        InputKey::CharCtrl('c') | InputKey::Esc => return Some(Message::Quit),

        // Focus cycling
        InputKey::Tab | InputKey::Down => return Some(Message::FocusNext),
        InputKey::BackTab | InputKey::Up => return Some(Message::FocusPrevious),

        _ => {}
    }

    match state.focus {
        Focus::Input => handle_key_input(state, key),
        Focus::Validate => activate(key, Message::ValidateCoupon),
        Focus::Remove => activate(key, Message::RemoveCoupon),
        Focus::Confirm => activate(key, Message::ConfirmBooking),
    }
}

/// Handle key events while the coupon input has focus
fn handle_key_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Enter submits exactly like the "Validar" button
        InputKey::Enter => Some(Message::ValidateCoupon),

        InputKey::Backspace => {
            let mut text = state.checkout.input.clone();
            text.pop()?;
            Some(Message::InputChanged { text })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::InputChanged {
            text: String::new(),
        }),

        InputKey::Char(c) => {
            let mut text = state.checkout.input.clone();
            text.push(c);
            Some(Message::InputChanged { text })
        }

        _ => None,
    }
}

/// Handle key events while a button has focus
fn activate(key: InputKey, message: Message) -> Option<Message> {
    match key {
        k if k.is_activate() => Some(message),
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}
