use super::colors::*;
use ratatui::style::{Modifier, Style};
use taskboard_board::Accent;

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn dimmed_text() -> Style {
    Style::default().fg(DIMMED_TEXT).add_modifier(Modifier::DIM)
}

/// Left-border accent of a card, by status.
pub fn accent_style(accent: Accent) -> Style {
    let color = match accent {
        Accent::Blue => ACCENT_TODO,
        Accent::Yellow => ACCENT_DOING,
        Accent::Green => ACCENT_DONE,
    };
    Style::default().fg(color)
}

pub fn drop_highlight() -> Style {
    Style::default().bg(DROP_HIGHLIGHT_BG)
}

pub fn button() -> Style {
    Style::default()
        .fg(BUTTON_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn danger_text() -> Style {
    Style::default().fg(DANGER_TEXT)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
