use taskboard_domain::Status;

use crate::view::ElementId;

/// Elements that make up one status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnHandles {
    /// Drop target for the whole column.
    pub column: ElementId,
    /// Scrollable list the cards are rendered into.
    pub list: ElementId,
}

/// Lookup table from statuses to the elements of the board surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardLayout {
    columns: [ColumnHandles; 3],
    pub main: ElementId,
    pub modal: ElementId,
    pub title_input: ElementId,
    pub description_input: ElementId,
}

impl BoardLayout {
    pub const MAIN: ElementId = ElementId("board-main");
    pub const MODAL: ElementId = ElementId("task-modal");
    pub const TITLE_INPUT: ElementId = ElementId("task-title-input");
    pub const DESCRIPTION_INPUT: ElementId = ElementId("task-desc-input");

    pub fn column(&self, status: Status) -> ColumnHandles {
        self.columns[status.index()]
    }

    pub fn list(&self, status: Status) -> ElementId {
        self.column(status).list
    }

    /// Status whose drop column is `column`, if any.
    pub fn status_of_column(&self, column: ElementId) -> Option<Status> {
        Status::ALL
            .into_iter()
            .find(|status| self.column(*status).column == column)
    }

    pub fn lists(&self) -> impl Iterator<Item = (Status, ElementId)> + '_ {
        Status::ALL.into_iter().map(move |status| (status, self.list(status)))
    }

    /// Every element id the layout refers to.
    pub fn elements(&self) -> Vec<ElementId> {
        let mut elements = vec![
            self.main,
            self.modal,
            self.title_input,
            self.description_input,
        ];
        for handles in &self.columns {
            elements.push(handles.column);
            elements.push(handles.list);
        }
        elements
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self {
            columns: [
                ColumnHandles {
                    column: ElementId("col-todo"),
                    list: ElementId("todo-list"),
                },
                ColumnHandles {
                    column: ElementId("col-doing"),
                    list: ElementId("doing-list"),
                },
                ColumnHandles {
                    column: ElementId("col-done"),
                    list: ElementId("done-list"),
                },
            ],
            main: Self::MAIN,
            modal: Self::MODAL,
            title_input: Self::TITLE_INPUT,
            description_input: Self::DESCRIPTION_INPUT,
        }
    }
}
