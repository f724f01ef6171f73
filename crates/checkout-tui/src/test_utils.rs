//! Test utilities for TUI rendering verification
//!
//! Provides helpers for testing widgets and full-screen rendering
//! using ratatui's TestBackend.
//!
//! # Example
//!
//! ```ignore
//! let mut term = TestTerminal::new();
//! term.draw_with(|frame| view(frame, &state));
//! assert!(term.buffer_contains("Confirmar Reserva"));
//! ```

use checkout_app::{process_message, AppState, Message};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    /// The underlying ratatui terminal with TestBackend.
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with custom dimensions
    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Get the full terminal area
    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function.
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    /// Get the underlying buffer for assertions
    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Count non-overlapping occurrences of `text` across all lines
    pub fn count_occurrences(&self, text: &str) -> usize {
        let buffer = self.buffer();
        (0..buffer.area.height)
            .map(|y| get_line_content(buffer, y).matches(text).count())
            .sum()
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Whether some occurrence of `text` is rendered with `modifier` on all its cells
    pub fn text_has_modifier(&self, text: &str, modifier: Modifier) -> bool {
        let buffer = self.buffer();
        let needle: Vec<&str> = text.split("").filter(|s| !s.is_empty()).collect();
        for y in 0..buffer.area.height {
            let symbols: Vec<&str> = (0..buffer.area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            for start in 0..symbols.len().saturating_sub(needle.len() - 1) {
                if symbols[start..start + needle.len()] == needle[..]
                    && (start..start + needle.len())
                        .all(|x| buffer[(x as u16, y)].modifier.contains(modifier))
                {
                    return true;
                }
            }
        }
        false
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert buffer to string representation
fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

/// Get content of a specific line
fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// AppState with `code` typed into the input and submitted with Enter
pub fn state_after_submit(code: &str) -> AppState {
    let mut state = AppState::new();
    state.checkout.set_input(code);
    process_message(&mut state, Message::ValidateCoupon);
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;
    use ratatui::text::Span;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_terminal_creation() {
        let term = TestTerminal::new();
        assert_eq!(term.area().width, TEST_WIDTH);
        assert_eq!(term.area().height, TEST_HEIGHT);
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello World"), term.area());

        assert!(term.buffer_contains("Hello World"));
        assert!(!term.buffer_contains("Goodbye"));
    }

    #[test]
    fn test_line_contains() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("Hello\nWorld"), term.area());

        assert!(term.line_contains(0, "Hello"));
        assert!(term.line_contains(1, "World"));
        assert!(!term.line_contains(0, "World"));
    }

    #[test]
    fn test_count_occurrences() {
        let mut term = TestTerminal::with_size(20, 5);
        term.render_widget(Paragraph::new("ab ab\nab"), term.area());
        assert_eq!(term.count_occurrences("ab"), 3);
    }

    #[test]
    fn test_text_has_modifier() {
        let mut term = TestTerminal::with_size(20, 2);
        let line = ratatui::text::Line::from(vec![
            Span::raw("plain "),
            Span::styled("struck", Style::default().add_modifier(Modifier::CROSSED_OUT)),
        ]);
        term.render_widget(Paragraph::new(line), term.area());

        assert!(term.text_has_modifier("struck", Modifier::CROSSED_OUT));
        assert!(!term.text_has_modifier("plain", Modifier::CROSSED_OUT));
    }

    #[test]
    fn test_state_after_submit() {
        let state = state_after_submit("save10");
        assert_eq!(state.checkout.applied_coupon_code(), Some("SAVE10"));
    }
}
