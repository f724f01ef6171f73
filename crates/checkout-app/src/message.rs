//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit the checkout screen
    Quit,

    // ─────────────────────────────────────────────────────────
    // Coupon Messages
    // ─────────────────────────────────────────────────────────
    /// Coupon input text replaced (typing, backspace, clear)
    InputChanged { text: String },
    /// Validate the current input ("Validar" button or Enter in the input)
    ValidateCoupon,
    /// Remove the applied coupon ("Remover" button)
    RemoveCoupon,

    /// "Confirmar Reserva" pressed
    ConfirmBooking,

    // ─────────────────────────────────────────────────────────
    // Focus Messages
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next visible control
    FocusNext,
    /// Move focus to the previous visible control
    FocusPrevious,
}
