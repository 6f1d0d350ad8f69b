use ratatui::style::Color;

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const DIMMED_TEXT: Color = Color::DarkGray;

pub const ACCENT_TODO: Color = Color::Blue;
pub const ACCENT_DOING: Color = Color::Yellow;
pub const ACCENT_DONE: Color = Color::Green;

pub const DROP_HIGHLIGHT_BG: Color = Color::Rgb(55, 65, 81);
pub const BUTTON_TEXT: Color = Color::Cyan;
pub const DANGER_TEXT: Color = Color::Red;

pub const POPUP_BG: Color = Color::Black;
