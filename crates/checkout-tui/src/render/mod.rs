//! Main render/view function (View in TEA pattern)


use super::{layout, widgets};
use checkout_app::{AppState, CheckoutView};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state, never modifies it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let show_hints = state.settings.ui.show_key_hints;
    let areas = layout::create(area, show_hints);
    let view = CheckoutView::project(state);

    frame.render_widget(
        widgets::MainHeader::new(&view.heading, &view.subheading),
        areas.header,
    );
    frame.render_widget(
        widgets::CouponPanel::new(&view.coupon_heading, &view.coupon, view.focus),
        areas.coupon,
    );
    frame.render_widget(
        widgets::PriceSummaryPanel::new(&view.price, &view.confirm_label, view.focus),
        areas.price,
    );

    if show_hints {
        frame.render_widget(widgets::KeyHints::new(view.focus), areas.footer);
    }
}
