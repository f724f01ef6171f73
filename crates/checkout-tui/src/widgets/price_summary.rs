//! Price summary card with the confirm button

use checkout_app::view_model::{FocusTarget, PricePanel};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::button_line;
use crate::theme::styles;

pub struct PriceSummaryPanel<'a> {
    panel: &'a PricePanel,
    confirm_label: &'a str,
    focus: FocusTarget,
}

impl<'a> PriceSummaryPanel<'a> {
    pub fn new(panel: &'a PricePanel, confirm_label: &'a str, focus: FocusTarget) -> Self {
        Self {
            panel,
            confirm_label,
            focus,
        }
    }
}

impl Widget for PriceSummaryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let panel = self.panel;
        let confirm_focused = self.focus == FocusTarget::Confirm;

        let block = styles::glass_block(confirm_focused).title(Span::styled(
            format!(" {} ", panel.heading),
            styles::heading(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Length(1); 6]).split(inner);

        label_value_row(
            Line::styled(panel.flight_label.as_str(), styles::text_secondary()),
            Line::styled(panel.flight_price.as_str(), styles::text_primary()),
            rows[0],
            buf,
        );

        if let Some((label, amount)) = &panel.discount_line {
            label_value_row(
                Line::styled(label.as_str(), styles::success()),
                Line::styled(amount.as_str(), styles::success()),
                rows[1],
                buf,
            );
        }

        let mut total = Vec::with_capacity(3);
        if let Some(struck) = &panel.strikethrough {
            total.push(Span::styled(struck.as_str(), styles::price_struck()));
            total.push(Span::raw(" "));
        }
        total.push(Span::styled(panel.total.as_str(), styles::price_total()));
        label_value_row(
            Line::styled(panel.total_label.as_str(), styles::heading()),
            Line::from(total),
            rows[2],
            buf,
        );

        if let Some(badge) = &panel.savings_badge {
            Paragraph::new(Span::styled(format!(" {} ", badge), styles::savings_badge()))
                .alignment(Alignment::Right)
                .render(rows[3], buf);
        }

        Paragraph::new(button_line(self.confirm_label, confirm_focused))
            .alignment(Alignment::Center)
            .render(rows[5], buf);
    }
}

/// Label on the left, value flush right
fn label_value_row(label: Line<'_>, value: Line<'_>, area: Rect, buf: &mut Buffer) {
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(value.width() as u16)])
            .areas(area);
    Paragraph::new(label).render(left, buf);
    Paragraph::new(value).render(right, buf);
}
