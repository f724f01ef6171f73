//! Custom widget components

mod coupon_panel;
mod header;
mod key_hints;
mod price_summary;

pub use coupon_panel::CouponPanel;
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use price_summary::PriceSummaryPanel;

use ratatui::text::{Line, Span};

use crate::theme::styles;

/// Button rendered as padded label text
pub(crate) fn button_line(label: &str, focused: bool) -> Line<'static> {
    Line::from(Span::styled(format!(" {} ", label), styles::button(focused)))
}
