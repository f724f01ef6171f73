//! Coupon entry form / applied-coupon confirmation

use checkout_app::view_model::{AvailableCoupons, CouponSection, FocusTarget};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::button_line;
use crate::theme::{palette, styles};

/// Coupon card
pub struct CouponPanel<'a> {
    heading: &'a str,
    section: &'a CouponSection,
    focus: FocusTarget,
}

impl<'a> CouponPanel<'a> {
    pub fn new(heading: &'a str, section: &'a CouponSection, focus: FocusTarget) -> Self {
        Self {
            heading,
            section,
            focus,
        }
    }
}

impl Widget for CouponPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let focused = matches!(
            self.focus,
            FocusTarget::Input | FocusTarget::Validate | FocusTarget::Remove
        );
        let block = styles::glass_block(focused).title(Span::styled(
            format!(" {} ", self.heading),
            styles::heading(),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::vertical([Constraint::Length(1); 5]).split(inner);

        match self.section {
            CouponSection::Form {
                input,
                placeholder,
                validate_label,
                error,
                available,
            } => {
                let input_focused = self.focus == FocusTarget::Input;
                let button = button_line(validate_label, self.focus == FocusTarget::Validate);
                let [input_area, button_area] = split_right(rows[0], button.width() as u16);

                input_line(input, placeholder, input_focused, input_area.width)
                    .render(input_area, buf);
                Paragraph::new(button).render(button_area, buf);

                if let Some(error) = error {
                    Paragraph::new(Line::from(vec![
                        Span::styled("✗ ", styles::error().add_modifier(Modifier::BOLD)),
                        Span::styled(error.as_str(), styles::error()),
                    ]))
                    .render(rows[1], buf);
                }

                if let Some(available) = available {
                    render_available(available, rows[2], [rows[3], rows[4]], buf);
                }
            }
            CouponSection::Applied {
                title,
                detail,
                remove_label,
            } => {
                let button = button_line(remove_label, self.focus == FocusTarget::Remove);
                let [title_area, button_area] = split_right(rows[0], button.width() as u16);

                Paragraph::new(Line::from(vec![
                    Span::styled("✓ ", styles::success_bold()),
                    Span::styled(title.as_str(), styles::success_bold()),
                ]))
                .render(title_area, buf);
                Paragraph::new(button).render(button_area, buf);

                Paragraph::new(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(detail.as_str(), styles::success()),
                ]))
                .render(rows[1], buf);
            }
        }
    }
}

/// Split a row into a flexible left part and a right part of `width`
fn split_right(area: Rect, width: u16) -> [Rect; 2] {
    let [left, _, right] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(width),
    ])
    .areas(area);
    [left, right]
}

const PROMPT: &str = "› ";
const ELLIPSIS: &str = "…";

/// Text input: typed text or a muted placeholder, with a cursor when focused
///
/// Text wider than `width` keeps its tail (and the cursor) visible.
fn input_line<'a>(
    input: &'a str,
    placeholder: &'a str,
    focused: bool,
    width: u16,
) -> Paragraph<'a> {
    let prompt_style = if focused {
        styles::border_active()
    } else {
        styles::text_muted()
    };

    let mut spans = vec![Span::styled(PROMPT, prompt_style)];
    if input.is_empty() {
        spans.push(Span::styled(placeholder, styles::text_muted()));
    } else {
        let cursor = usize::from(focused);
        let room = usize::from(width).saturating_sub(PROMPT.chars().count() + cursor);
        let len = input.chars().count();
        if len > room {
            let keep = room.saturating_sub(1);
            let tail: String = input.chars().skip(len - keep).collect();
            spans.push(Span::styled(ELLIPSIS, styles::text_muted()));
            spans.push(Span::styled(tail, styles::text_primary()));
        } else {
            spans.push(Span::styled(input, styles::text_primary()));
        }
    }
    if focused {
        spans.push(Span::styled("_", Style::default().fg(palette::ACCENT)));
    }

    Paragraph::new(Line::from(spans)).style(Style::default().bg(palette::HINT_BG))
}

/// Heading plus the codes as a two-column grid
fn render_available(
    available: &AvailableCoupons,
    heading: Rect,
    grid_rows: [Rect; 2],
    buf: &mut Buffer,
) {
    Paragraph::new(Span::styled(
        available.heading.as_str(),
        Style::default()
            .fg(palette::TEXT_SECONDARY)
            .add_modifier(Modifier::BOLD),
    ))
    .render(heading, buf);

    let code_style = Style::default().fg(palette::ACCENT).bg(palette::HINT_BG);
    for (row, pair) in grid_rows.iter().zip(available.codes.chunks(2)) {
        let cells = Layout::horizontal([Constraint::Fill(1); 2]).split(*row);
        for (cell, code) in cells.iter().zip(pair) {
            Paragraph::new(Span::styled(code.as_str(), code_style)).render(*cell, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{state_after_submit, TestTerminal};
    use checkout_app::{AppState, CheckoutView};

    fn render(state: &AppState) -> TestTerminal {
        let view = CheckoutView::project(state);
        let mut term = TestTerminal::new();
        let panel = CouponPanel::new(&view.coupon_heading, &view.coupon, view.focus);
        term.render_widget(panel, Rect::new(0, 0, 80, 7));
        term
    }

    #[test]
    fn test_form_shows_placeholder_and_button() {
        let term = render(&AppState::new());

        assert!(term.buffer_contains("Código de Cupón"));
        assert!(term.buffer_contains("Ingresa tu código"));
        assert!(term.buffer_contains("Validar"));
        assert!(!term.buffer_contains("Remover"));
    }

    #[test]
    fn test_form_lists_available_coupons() {
        let term = render(&AppState::new());

        assert!(term.buffer_contains("Cupones disponibles:"));
        assert!(term.buffer_contains("SAVE10 (10%)"));
        assert!(term.buffer_contains("SAVE20 (20%)"));
        assert!(term.buffer_contains("SUMMER25 (25%)"));
        assert!(term.buffer_contains("WELCOME15 (15%)"));
    }

    #[test]
    fn test_available_codes_fit_narrow_panel() {
        let view = CheckoutView::project(&AppState::new());
        let mut term = TestTerminal::with_size(40, 7);
        let panel = CouponPanel::new(&view.coupon_heading, &view.coupon, view.focus);
        term.render_widget(panel, term.area());

        for label in ["SAVE10 (10%)", "SAVE20 (20%)", "SUMMER25 (25%)", "WELCOME15 (15%)"] {
            assert!(term.buffer_contains(label), "missing {}", label);
        }
        assert!(term.line_contains(4, "SAVE10 (10%)"));
        assert!(term.line_contains(4, "SAVE20 (20%)"));
        assert!(term.line_contains(5, "SUMMER25 (25%)"));
        assert!(term.line_contains(5, "WELCOME15 (15%)"));
    }

    #[test]
    fn test_long_input_keeps_tail_and_cursor() {
        let mut state = AppState::new();
        let mut text = "X".repeat(119);
        text.push('Z');
        state.checkout.set_input(text);
        let term = render(&state);

        assert!(term.line_contains(1, "XZ_"));
        assert!(term.line_contains(1, "…"));
        assert!(term.line_contains(1, "Validar"));
    }

    #[test]
    fn test_short_input_is_not_elided() {
        let mut state = AppState::new();
        state.checkout.set_input("SAVE10");
        let term = render(&state);

        assert!(term.line_contains(1, "› SAVE10_"));
        assert!(!term.buffer_contains("…"));
    }

    #[test]
    fn test_form_shows_typed_text() {
        let mut state = AppState::new();
        state.checkout.set_input("TEST123");
        let term = render(&state);

        assert!(term.buffer_contains("TEST123"));
        assert!(!term.buffer_contains("Ingresa tu código"));
    }

    #[test]
    fn test_form_shows_invalid_code_error() {
        let term = render(&state_after_submit("INVALID"));

        assert!(term.buffer_contains("Código de cupón inválido"));
        assert!(term.buffer_contains("Ingresa tu código") || term.buffer_contains("INVALID"));
        assert!(!term.buffer_contains("Cupón aplicado"));
    }

    #[test]
    fn test_form_shows_empty_input_error() {
        let term = render(&state_after_submit(""));
        assert!(term.buffer_contains("Por favor ingresa un código de cupón"));
    }

    #[test]
    fn test_applied_confirmation() {
        let term = render(&state_after_submit("SAVE10"));

        assert!(term.buffer_contains("Cupón aplicado: SAVE10"));
        assert!(term.buffer_contains("Descuento del 10%"));
        assert!(term.buffer_contains("Remover"));
        assert!(!term.buffer_contains("Ingresa tu código"));
        assert!(!term.buffer_contains("Validar"));
        assert!(!term.buffer_contains("Cupones disponibles:"));
    }
}
