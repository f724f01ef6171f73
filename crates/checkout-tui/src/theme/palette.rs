//! Color palette for the checkout screen.
//!
//! Blue/indigo header and buttons, green for applied coupons and savings,
//! red for coupon errors.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const HINT_BG: Color = Color::Rgb(20, 28, 48);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Header gradient (approximate) ---
pub const GRADIENT_BLUE: Color = Color::Blue;
pub const GRADIENT_INDIGO: Color = Color::Magenta;
pub const HEADER_SUBTITLE: Color = Color::LightBlue;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;

// --- Prices ---
pub const PRICE_TOTAL: Color = Color::LightBlue;
pub const PRICE_STRUCK: Color = Color::DarkGray;
pub const SAVINGS_BADGE_BG: Color = Color::Rgb(20, 60, 30);
