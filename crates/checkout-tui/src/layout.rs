//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title + subtitle + bottom border
pub const HEADER_HEIGHT: u16 = 4;

/// Coupon card: borders + input row + error row + hint heading + two rows of codes
pub const COUPON_HEIGHT: u16 = 7;

/// Price card: borders + flight price, discount, struck price, total,
/// savings badge and the confirm button
pub const PRICE_HEIGHT: u16 = 8;

/// Maximum width of the checkout card
pub const MAX_CONTENT_WIDTH: u16 = 80;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub coupon: Rect,
    pub price: Rect,
    /// Key hint footer (zero height when hidden)
    pub footer: Rect,
}

/// Create the checkout layout, centered horizontally
pub fn create(area: Rect, show_footer: bool) -> ScreenAreas {
    let width = area.width.min(MAX_CONTENT_WIDTH);
    let content = Rect::new(
        area.x + (area.width - width) / 2,
        area.y,
        width,
        area.height,
    );

    let footer_height = if show_footer { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(COUPON_HEIGHT),
        Constraint::Length(PRICE_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .split(content);

    ScreenAreas {
        header: chunks[0],
        coupon: chunks[1],
        price: chunks[2],
        footer: chunks[4],
    }
}
