//! Cell geometry of one frame and hit testing against it.
//!
//! The layout is computed from the document state (cards, scroll offsets,
//! modal visibility) and written back into the document as bounds, scroll
//! extents and viewport size, so the auto-scroller sees terminal cells.

use ratatui::layout::{Position, Rect};
use taskboard_board::{
    BoardLayout, ClickTarget, ElementId, Rect as BoardRect, ScrollOffset, ScrollSurface, Size,
};
use taskboard_domain::{Status, TaskId};

use crate::terminal_view::{FormField, TerminalView};

pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 3;
pub const MIN_COLUMN_WIDTH: u16 = 36;
pub const COLUMN_GAP: u16 = 1;
pub const CARD_HEIGHT: u16 = 5;
pub const MODAL_HEIGHT: u16 = 12;

pub const ADD_LABEL: &str = "[+ Add task]";
pub const CLEAR_LABEL: &str = "[Clear board]";
pub const DELETE_LABEL: &str = "[x]";
pub const CLOSE_LABEL: &str = "[x]";
pub const CREATE_LABEL: &str = "[ Create ]";
pub const CANCEL_LABEL: &str = "[ Cancel ]";

/// What a mouse press landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Click(ClickTarget),
    Submit,
    Field(FormField),
    Card(TaskId),
    Column(ElementId),
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardArea {
    pub id: TaskId,
    /// Visible part of the card.
    pub area: Rect,
    pub delete: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnArea {
    pub status: Status,
    pub column: ElementId,
    pub list: ElementId,
    /// Placement before clipping, in cells.
    pub bounds: BoardRect,
    pub list_bounds: BoardRect,
    /// Visible part of the column, if any.
    pub area: Option<Rect>,
    pub cards: Vec<CardArea>,
    pub content_height: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalArea {
    pub area: Rect,
    pub close: Rect,
    pub title_label: Rect,
    pub title: Rect,
    pub description_label: Rect,
    pub description: Rect,
    pub submit: Rect,
    pub cancel: Rect,
}

impl ModalArea {
    pub fn field(&self, field: FormField) -> Rect {
        match field {
            FormField::Title => self.title,
            FormField::Description => self.description,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameLayout {
    pub area: Rect,
    pub header: Rect,
    pub add_button: Option<Rect>,
    pub clear_button: Option<Rect>,
    pub main: Rect,
    pub footer: Rect,
    pub content_width: u16,
    pub columns: Vec<ColumnArea>,
    pub modal: Option<ModalArea>,
}

impl FrameLayout {
    pub fn compute(area: Rect, view: &TerminalView, layout: &BoardLayout) -> Self {
        let header_height = HEADER_HEIGHT.min(area.height);
        let footer_height = FOOTER_HEIGHT.min(area.height - header_height);
        let header = Rect::new(area.x, area.y, area.width, header_height);
        let main = Rect::new(
            area.x,
            area.y + header_height,
            area.width,
            area.height - header_height - footer_height,
        );
        let footer = Rect::new(area.x, main.bottom(), area.width, footer_height);

        let button_row = i32::from(header.y) + 1;
        let clear_x = i32::from(header.right()) - 2 - label_width(CLEAR_LABEL);
        let add_x = clear_x - 1 - label_width(ADD_LABEL);
        let clear_button = button(clear_x, button_row, CLEAR_LABEL, header);
        let add_button = button(add_x, button_row, ADD_LABEL, header);

        let doc = view.doc();
        let gaps = COLUMN_GAP * 2;
        let column_width = MIN_COLUMN_WIDTH.max(main.width.saturating_sub(gaps) / 3);
        let content_width = column_width * 3 + gaps;
        let scroll_left = doc.scroll_offset(layout.main).left.round() as i32;

        let columns = Status::ALL
            .into_iter()
            .enumerate()
            .map(|(i, status)| {
                let x = i32::from(main.x) + i as i32 * i32::from(column_width + COLUMN_GAP)
                    - scroll_left;
                column_area(status, x, column_width, main, view, layout)
            })
            .collect();

        let modal = doc
            .is_visible(layout.modal)
            .then(|| modal_area(area));

        Self {
            area,
            header,
            add_button,
            clear_button,
            main,
            footer,
            content_width,
            columns,
            modal,
        }
    }

    /// Writes viewport, bounds and scroll extents into the document.
    pub fn sync(&self, view: &mut TerminalView, layout: &BoardLayout) {
        let doc = view.doc_mut();
        doc.set_viewport(Size::new(
            f64::from(self.area.width),
            f64::from(self.area.height),
        ));
        doc.set_bounds(layout.main, to_board_rect(self.main));
        doc.set_scroll_extent(
            layout.main,
            ScrollOffset::new(
                f64::from(self.content_width.saturating_sub(self.main.width)),
                0.0,
            ),
        );
        for column in &self.columns {
            doc.set_bounds(column.column, column.bounds);
            doc.set_bounds(column.list, column.list_bounds);
            let visible = column.list_bounds.height.max(0.0);
            doc.set_scroll_extent(
                column.list,
                ScrollOffset::new(0.0, (f64::from(column.content_height) - visible).max(0.0)),
            );
        }
    }

    pub fn hit(&self, x: u16, y: u16) -> Hit {
        let pos = Position::new(x, y);

        if let Some(modal) = &self.modal {
            if modal.close.contains(pos) {
                return Hit::Click(ClickTarget::CloseModal);
            }
            if modal.submit.contains(pos) {
                return Hit::Submit;
            }
            if modal.cancel.contains(pos) {
                return Hit::Click(ClickTarget::Cancel);
            }
            if modal.title.contains(pos) {
                return Hit::Field(FormField::Title);
            }
            if modal.description.contains(pos) {
                return Hit::Field(FormField::Description);
            }
            if modal.area.contains(pos) {
                return Hit::Click(ClickTarget::ModalContent);
            }
            return Hit::Click(ClickTarget::ModalBackdrop);
        }

        if self.add_button.is_some_and(|r| r.contains(pos)) {
            return Hit::Click(ClickTarget::AddTask);
        }
        if self.clear_button.is_some_and(|r| r.contains(pos)) {
            return Hit::Click(ClickTarget::ClearBoard);
        }
        for column in &self.columns {
            for card in &column.cards {
                if card.delete.is_some_and(|r| r.contains(pos)) {
                    return Hit::Click(ClickTarget::DeleteCard(card.id));
                }
                if card.area.contains(pos) {
                    return Hit::Card(card.id);
                }
            }
        }
        match self.column_at(x, y) {
            Some(column) => Hit::Column(column),
            None => Hit::Nothing,
        }
    }

    /// Drop column under the cell, if any.
    pub fn column_at(&self, x: u16, y: u16) -> Option<ElementId> {
        let pos = Position::new(x, y);
        self.columns
            .iter()
            .find(|column| column.area.is_some_and(|r| r.contains(pos)))
            .map(|column| column.column)
    }

    pub fn column(&self, status: Status) -> Option<&ColumnArea> {
        self.columns.iter().find(|column| column.status == status)
    }

    pub fn card(&self, id: TaskId) -> Option<&CardArea> {
        self.columns
            .iter()
            .flat_map(|column| column.cards.iter())
            .find(|card| card.id == id)
    }
}

fn column_area(
    status: Status,
    x: i32,
    width: u16,
    main: Rect,
    view: &TerminalView,
    layout: &BoardLayout,
) -> ColumnArea {
    let doc = view.doc();
    let handles = layout.column(status);
    let y = i32::from(main.y);
    let area = clip(x, y, width, main.height, main);

    let list_x = x + 1;
    let list_y = y + 1;
    let list_width = width.saturating_sub(2);
    let list_height = main.height.saturating_sub(2);
    let list_area = clip(list_x, list_y, list_width, list_height, main);
    let list_scroll = doc.scroll_offset(handles.list).top.round() as i32;

    let markup = doc.cards(handles.list);
    let cards = match list_area {
        Some(visible) => markup
            .iter()
            .enumerate()
            .filter_map(|(n, card)| {
                let card_y = list_y + n as i32 * i32::from(CARD_HEIGHT) - list_scroll;
                let area = clip(list_x, card_y, list_width, CARD_HEIGHT, visible)?;
                let delete_x = list_x + i32::from(list_width) - 1 - label_width(DELETE_LABEL);
                let delete = button(delete_x, card_y, DELETE_LABEL, area);
                Some(CardArea {
                    id: card.id,
                    area,
                    delete,
                })
            })
            .collect(),
        None => Vec::new(),
    };

    ColumnArea {
        status,
        column: handles.column,
        list: handles.list,
        bounds: BoardRect::new(
            f64::from(x),
            f64::from(y),
            f64::from(width),
            f64::from(main.height),
        ),
        list_bounds: BoardRect::new(
            f64::from(list_x),
            f64::from(list_y),
            f64::from(list_width),
            f64::from(list_height),
        ),
        area,
        cards,
        content_height: stacked_height(markup.len()),
    }
}

fn modal_area(area: Rect) -> ModalArea {
    let width = (area.width * 3 / 5).max(40).min(area.width);
    let height = MODAL_HEIGHT.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    let modal = Rect::new(x, y, width, height);

    let inner_x = x.saturating_add(2);
    let inner_width = width.saturating_sub(4);
    let row = |offset: u16, h: u16| Rect::new(inner_x, y.saturating_add(offset), inner_width, h);
    let close_width = label_width(CLOSE_LABEL) as u16;
    let create_width = label_width(CREATE_LABEL) as u16;

    ModalArea {
        area: modal,
        close: Rect::new(
            modal.right().saturating_sub(close_width + 1),
            y,
            close_width,
            1,
        )
        .intersection(modal),
        title_label: row(1, 1).intersection(modal),
        title: row(2, 3).intersection(modal),
        description_label: row(5, 1).intersection(modal),
        description: row(6, 3).intersection(modal),
        submit: Rect::new(inner_x, y.saturating_add(10), create_width, 1).intersection(modal),
        cancel: Rect::new(
            inner_x.saturating_add(create_width + 1),
            y.saturating_add(10),
            label_width(CANCEL_LABEL) as u16,
            1,
        )
        .intersection(modal),
    }
}

/// Rows taken by `cards` stacked cards, saturating at `u16::MAX`.
fn stacked_height(cards: usize) -> u16 {
    CARD_HEIGHT.saturating_mul(u16::try_from(cards).unwrap_or(u16::MAX))
}

fn label_width(label: &str) -> i32 {
    label.chars().count() as i32
}

/// A one-row label placed at `x`, kept only when it fits inside `within`.
fn button(x: i32, y: i32, label: &str, within: Rect) -> Option<Rect> {
    let width = label_width(label) as u16;
    clip(x, y, width, 1, within).filter(|r| r.width == width)
}

/// Intersects a rect given in signed cells with `within`.
fn clip(x: i32, y: i32, width: u16, height: u16, within: Rect) -> Option<Rect> {
    let left = x.max(i32::from(within.x));
    let top = y.max(i32::from(within.y));
    let right = (x + i32::from(width)).min(i32::from(within.right()));
    let bottom = (y + i32::from(height)).min(i32::from(within.bottom()));
    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    ))
}

fn to_board_rect(rect: Rect) -> BoardRect {
    BoardRect::new(
        f64::from(rect.x),
        f64::from(rect.y),
        f64::from(rect.width),
        f64::from(rect.height),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_board::{BoardRenderer, BoardView};
    use taskboard_domain::Task;

    fn view_with(tasks: &[Task]) -> (TerminalView, BoardLayout) {
        let layout = BoardLayout::default();
        let mut view = TerminalView::new(&layout);
        BoardRenderer::new(layout.clone()).render_all(&mut view, tasks);
        (view, layout)
    }

    fn task(id: i64, status: Status) -> Task {
        Task::new(TaskId(id), format!("task {}", id), "details", status, 1_700_000_000_000)
    }

    #[test]
    fn test_wide_terminal_fits_all_columns() {
        let (view, layout) = view_with(&[]);
        let frame = FrameLayout::compute(Rect::new(0, 0, 120, 40), &view, &layout);

        assert_eq!(frame.main, Rect::new(0, 3, 120, 34));
        assert_eq!(frame.footer, Rect::new(0, 37, 120, 3));
        assert_eq!(frame.columns.len(), 3);
        assert!(frame.content_width <= 120);
        assert!(frame.columns.iter().all(|c| c.area.is_some()));
        assert!(frame.add_button.is_some());
        assert!(frame.clear_button.is_some());
    }

    #[test]
    fn test_cards_stack_in_their_list() {
        let (view, layout) = view_with(&[task(1, Status::Todo), task(2, Status::Todo)]);
        let frame = FrameLayout::compute(Rect::new(0, 0, 120, 40), &view, &layout);

        let todo = frame.column(Status::Todo).unwrap();
        assert_eq!(todo.cards.len(), 2);
        assert_eq!(todo.cards[0].area.y, 4);
        assert_eq!(todo.cards[1].area.y, 4 + CARD_HEIGHT);
        assert_eq!(todo.content_height, 2 * CARD_HEIGHT);
        assert!(frame.column(Status::Done).unwrap().cards.is_empty());
    }

    #[test]
    fn test_hit_testing_without_modal() {
        let (view, layout) = view_with(&[task(7, Status::Doing)]);
        let frame = FrameLayout::compute(Rect::new(0, 0, 120, 40), &view, &layout);

        let add = frame.add_button.unwrap();
        assert_eq!(frame.hit(add.x, add.y), Hit::Click(ClickTarget::AddTask));
        let clear = frame.clear_button.unwrap();
        assert_eq!(frame.hit(clear.x + 1, clear.y), Hit::Click(ClickTarget::ClearBoard));

        let card = frame.card(TaskId(7)).unwrap();
        assert_eq!(frame.hit(card.area.x + 2, card.area.y + 2), Hit::Card(TaskId(7)));
        let delete = card.delete.unwrap();
        assert_eq!(
            frame.hit(delete.x, delete.y),
            Hit::Click(ClickTarget::DeleteCard(TaskId(7)))
        );

        let done = frame.column(Status::Done).unwrap().area.unwrap();
        assert_eq!(
            frame.hit(done.x + 1, done.bottom() - 2),
            Hit::Column(layout.column(Status::Done).column)
        );
        assert_eq!(frame.hit(0, 38), Hit::Nothing);
    }

    #[test]
    fn test_hit_testing_with_modal() {
        let (mut view, layout) = view_with(&[task(7, Status::Doing)]);
        view.remove_class(taskboard_board::Node::Element(layout.modal), "hidden");
        let frame = FrameLayout::compute(Rect::new(0, 0, 120, 40), &view, &layout);
        let modal = frame.modal.clone().unwrap();

        assert_eq!(frame.hit(modal.close.x, modal.close.y), Hit::Click(ClickTarget::CloseModal));
        assert_eq!(frame.hit(modal.submit.x, modal.submit.y), Hit::Submit);
        assert_eq!(frame.hit(modal.cancel.x, modal.cancel.y), Hit::Click(ClickTarget::Cancel));
        assert_eq!(
            frame.hit(modal.description.x + 1, modal.description.y + 1),
            Hit::Field(FormField::Description)
        );
        assert_eq!(
            frame.hit(modal.area.x + 1, modal.area.bottom() - 1),
            Hit::Click(ClickTarget::ModalContent)
        );
        // Cards under the overlay are not reachable
        assert_eq!(frame.hit(0, 0), Hit::Click(ClickTarget::ModalBackdrop));
    }

    #[test]
    fn test_narrow_terminal_scrolls_columns() {
        let (mut view, layout) = view_with(&[task(1, Status::Done)]);
        let area = Rect::new(0, 0, 60, 30);
        let frame = FrameLayout::compute(area, &view, &layout);
        frame.sync(&mut view, &layout);

        let extent = view.scroll_extent(layout.main);
        assert_eq!(extent.left, f64::from(frame.content_width - 60));
        assert!(frame.column(Status::Done).unwrap().area.is_none());

        view.set_scroll_offset(layout.main, ScrollOffset::new(extent.left, 0.0));
        let scrolled = FrameLayout::compute(area, &view, &layout);
        assert!(scrolled.column(Status::Todo).unwrap().area.is_none());
        assert!(scrolled.card(TaskId(1)).is_some());
        assert_eq!(view.viewport(), Size::new(60.0, 30.0));
    }

    #[test]
    fn test_list_extent_follows_card_count() {
        let tasks: Vec<Task> = (1..=10).map(|id| task(id, Status::Todo)).collect();
        let (mut view, layout) = view_with(&tasks);
        let frame = FrameLayout::compute(Rect::new(0, 0, 120, 30), &view, &layout);
        frame.sync(&mut view, &layout);

        // 22 rows of list, 50 rows of cards
        let list = layout.list(Status::Todo);
        assert_eq!(view.scroll_extent(list).top, 28.0);
        let todo = frame.column(Status::Todo).unwrap();
        assert!(todo.cards.len() < 10);
    }

    #[test]
    fn test_stacked_height_saturates() {
        assert_eq!(stacked_height(0), 0);
        assert_eq!(stacked_height(3), 3 * CARD_HEIGHT);
        assert_eq!(stacked_height(13_107), u16::MAX);
        assert_eq!(stacked_height(70_000), u16::MAX);
        assert_eq!(stacked_height(usize::MAX), u16::MAX);
    }
}
