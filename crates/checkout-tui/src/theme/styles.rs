//! Semantic style builders for the checkout screen.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::TEXT_PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Status styles ---
pub fn success() -> Style {
    Style::default().fg(palette::STATUS_GREEN)
}

pub fn success_bold() -> Style {
    success().add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Price styles ---
pub fn price_total() -> Style {
    Style::default()
        .fg(palette::PRICE_TOTAL)
        .add_modifier(Modifier::BOLD)
}

/// Original price shown above a discounted total
pub fn price_struck() -> Style {
    Style::default()
        .fg(palette::PRICE_STRUCK)
        .add_modifier(Modifier::CROSSED_OUT)
}

pub fn savings_badge() -> Style {
    Style::default()
        .fg(palette::STATUS_GREEN)
        .bg(palette::SAVINGS_BADGE_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Controls ---

/// "Black on Cyan" - focused button or input
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn button(focused: bool) -> Style {
    if focused {
        focused_selected()
    } else {
        Style::default()
            .fg(palette::TEXT_PRIMARY)
            .bg(palette::GRADIENT_BLUE)
    }
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::ACCENT)
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
        .style(Style::default().bg(palette::CARD_BG))
}
