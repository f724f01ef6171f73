//! Keybinding footer

use checkout_app::view_model::FocusTarget;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// One-line hint bar; hints depend on which control has focus
pub struct KeyHints {
    focus: FocusTarget,
}

impl KeyHints {
    pub fn new(focus: FocusTarget) -> Self {
        Self { focus }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.focus {
            FocusTarget::Input => &[
                ("Enter", "Validar"),
                ("Tab", "Siguiente"),
                ("Ctrl+U", "Borrar"),
                ("Esc", "Salir"),
            ],
            FocusTarget::Validate | FocusTarget::Remove | FocusTarget::Confirm => &[
                ("Enter", "Activar"),
                ("Tab", "Siguiente"),
                ("Shift+Tab", "Anterior"),
                ("q", "Salir"),
            ],
        }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(palette::DEEPEST_BG))
            .render(area, buf);
    }
}
