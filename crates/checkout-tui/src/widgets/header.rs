//! Page header widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::theme::palette;

/// Title bar with the page heading and subheading
pub struct MainHeader<'a> {
    heading: &'a str,
    subheading: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(heading: &'a str, subheading: &'a str) -> Self {
        Self {
            heading,
            subheading,
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette::GRADIENT_INDIGO))
            .style(Style::default().bg(palette::GRADIENT_BLUE));

        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(Span::styled(
                format!(" {}", self.heading),
                Style::default()
                    .fg(palette::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(" {}", self.subheading),
                Style::default().fg(palette::HEADER_SUBTITLE),
            )),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
