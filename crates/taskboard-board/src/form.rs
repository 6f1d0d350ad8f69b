use crate::layout::BoardLayout;
use crate::view::BoardView;

/// Values of the create-task form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
}

impl TaskForm {
    pub fn read<V: BoardView + ?Sized>(view: &V, layout: &BoardLayout) -> Self {
        Self {
            title: view.value(layout.title_input),
            description: view.value(layout.description_input),
        }
    }

    pub fn reset<V: BoardView + ?Sized>(view: &mut V, layout: &BoardLayout) {
        view.set_value(layout.title_input, "");
        view.set_value(layout.description_input, "");
    }

    /// Trimmed title and description, or `None` if either is blank.
    pub fn validated(&self) -> Option<(String, String)> {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() || description.is_empty() {
            return None;
        }
        Some((title.to_string(), description.to_string()))
    }
}
