pub mod auto_scroll;
pub mod coordinator;
pub mod drag;
pub mod form;
pub mod geometry;
pub mod layout;
pub mod memory_view;
pub mod renderer;
pub mod transfer;
pub mod view;

pub use auto_scroll::{AutoScroller, ScrollPlan};
pub use coordinator::{BoardCoordinator, BoardKey, ClickTarget};
pub use drag::{DragSession, DragState};
pub use form::TaskForm;
pub use geometry::{Point, Rect, ScrollOffset, Size};
pub use layout::{BoardLayout, ColumnHandles};
pub use memory_view::MemoryView;
pub use renderer::{BoardRenderer, BoardSync};
pub use transfer::{DataTransfer, TEXT_PLAIN};
pub use view::{classes, Accent, BoardView, CardMarkup, ElementId, Node, ScrollSurface};
