pub mod app;
pub mod dialog;
pub mod events;
pub mod frame_layout;
pub mod terminal_view;
pub mod theme;
pub mod ui;

pub use app::App;
pub use frame_layout::{FrameLayout, Hit};
pub use terminal_view::{FormField, TerminalView};
