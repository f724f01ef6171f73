//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! that this crate, and the headless driver, never depend on crossterm.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, etc.)
    CharCtrl(char),

    /// Up arrow key
    Up,
    /// Down arrow key
    Down,

    /// Enter/Return key
    Enter,
    /// Escape key
    Esc,
    /// Tab key
    Tab,
    /// Shift+Tab (BackTab)
    BackTab,
    /// Backspace key
    Backspace,
}

impl InputKey {
    /// Keys that activate a focused button
    pub fn is_activate(&self) -> bool {
        matches!(self, InputKey::Enter | InputKey::Char(' '))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_activate_keys() {
        assert!(InputKey::Enter.is_activate());
        assert!(InputKey::Char(' ').is_activate());
        assert!(!InputKey::Char('x').is_activate());
        assert!(!InputKey::Tab.is_activate());
    }
}
