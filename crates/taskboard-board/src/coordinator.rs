use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use std::time::Duration;
use taskboard_core::{AutoScrollSettings, SharedObserver, Subject};
use taskboard_domain::{Status, Task, TaskId, TaskService, TaskStore};

use crate::auto_scroll::AutoScroller;
use crate::drag::{DragSession, DragState};
use crate::form::TaskForm;
use crate::geometry::Point;
use crate::layout::BoardLayout;
use crate::renderer::{BoardRenderer, BoardSync};
use crate::transfer::{DataTransfer, TEXT_PLAIN};
use crate::view::{classes, BoardView, ElementId, Node, ScrollSurface};

/// What a click landed on, resolved by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    AddTask,
    CloseModal,
    Cancel,
    /// The overlay around the modal dialog.
    ModalBackdrop,
    /// Anywhere inside the modal dialog.
    ModalContent,
    DeleteCard(TaskId),
    ClearBoard,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardKey {
    Escape,
    Other,
}

/// Routes surface events to the task service and owns the drag gesture.
///
/// Card events carry the task id, so nothing has to be re-bound after the
/// renderer rebuilds the lists.
pub struct BoardCoordinator<S, V>
where
    S: TaskStore,
    V: BoardView + ScrollSurface + 'static,
{
    service: TaskService<S>,
    view: Rc<RefCell<V>>,
    renderer: BoardRenderer,
    sync: SharedObserver<[Task]>,
    drag: DragState,
    scroller: AutoScroller,
}

impl<S, V> BoardCoordinator<S, V>
where
    S: TaskStore,
    V: BoardView + ScrollSurface + 'static,
{
    pub fn new(
        mut service: TaskService<S>,
        view: V,
        layout: BoardLayout,
        settings: AutoScrollSettings,
    ) -> Self {
        let view = Rc::new(RefCell::new(view));
        let renderer = BoardRenderer::new(layout);
        let sync: SharedObserver<[Task]> = Rc::new(RefCell::new(BoardSync::new(
            Rc::clone(&view),
            renderer.clone(),
        )));
        service.attach(Rc::clone(&sync));
        renderer.render_all(&mut *view.borrow_mut(), service.tasks());

        Self {
            service,
            view,
            renderer,
            sync,
            drag: DragState::Idle,
            scroller: AutoScroller::new(settings),
        }
    }

    pub fn service(&self) -> &TaskService<S> {
        &self.service
    }

    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }

    pub fn view_mut(&self) -> RefMut<'_, V> {
        self.view.borrow_mut()
    }

    pub fn layout(&self) -> &BoardLayout {
        self.renderer.layout()
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Touch moves only matter between drag-start and drag-end.
    pub fn accepts_touch_moves(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn auto_scroll_active(&self) -> bool {
        self.scroller.is_active()
    }

    pub fn tick_interval(&self) -> Duration {
        self.scroller.interval()
    }

    pub fn is_modal_open(&self) -> bool {
        !self
            .view
            .borrow()
            .has_class(Node::Element(self.layout().modal), classes::HIDDEN)
    }

    pub fn open_modal(&mut self) {
        self.renderer.show_modal(&mut *self.view.borrow_mut());
    }

    /// Hides the modal and clears both form fields.
    pub fn close_modal(&mut self) {
        let mut view = self.view.borrow_mut();
        self.renderer.hide_modal(&mut *view);
        TaskForm::reset(&mut *view, self.renderer.layout());
    }

    pub fn on_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::AddTask => self.open_modal(),
            ClickTarget::CloseModal | ClickTarget::Cancel | ClickTarget::ModalBackdrop => {
                self.close_modal()
            }
            ClickTarget::DeleteCard(id) => self.service.delete_task(id),
            ClickTarget::ClearBoard => self.service.clear_tasks(),
            ClickTarget::ModalContent | ClickTarget::Other => {}
        }
    }

    pub fn on_key_down(&mut self, key: BoardKey) {
        if key == BoardKey::Escape {
            self.close_modal();
        }
    }

    /// Creates a TODO task from the form. Blank input leaves the modal open.
    pub fn on_submit(&mut self) -> bool {
        let form = TaskForm::read(&*self.view.borrow(), self.renderer.layout());
        let Some((title, description)) = form.validated() else {
            tracing::debug!("Rejected task form with a blank field");
            return false;
        };
        self.service.add_task(title, description, Status::Todo);
        self.close_modal();
        true
    }

    pub fn on_drag_start(&mut self, id: TaskId, transfer: &mut DataTransfer) {
        if self.drag.is_dragging() {
            self.on_drag_end();
        }
        transfer.set_data(TEXT_PLAIN, id.to_string());
        self.drag = DragState::Dragging(DragSession::new(id));
        tracing::debug!("Drag started for task {}", id);
    }

    /// Pointer drag progress. `None` when the platform gave no coordinates.
    pub fn on_drag(&mut self, reported: Option<Point>) {
        let Some(session) = self.drag.session_mut() else {
            return;
        };
        let Some(pointer) = session.track(reported) else {
            return;
        };
        let view = self.view.borrow();
        self.scroller
            .evaluate(pointer, &*view, self.renderer.layout());
    }

    pub fn on_touch_move(&mut self, position: Point) {
        if self.accepts_touch_moves() {
            self.on_drag(Some(position));
        }
    }

    pub fn on_drag_over(&mut self, column: ElementId) {
        if self.layout().status_of_column(column).is_some() {
            self.view
                .borrow_mut()
                .add_class(Node::Element(column), classes::DROP_HIGHLIGHT);
        }
    }

    pub fn on_drag_leave(&mut self, column: ElementId) {
        self.view
            .borrow_mut()
            .remove_class(Node::Element(column), classes::DROP_HIGHLIGHT);
    }

    /// Moves the transferred task into the column's status. A missing or
    /// malformed payload aborts silently.
    pub fn on_drop(&mut self, column: ElementId, transfer: &DataTransfer) {
        self.on_drag_leave(column);

        let Some(status) = self.layout().status_of_column(column) else {
            tracing::debug!("Drop on {} ignored, not a column", column);
            return;
        };
        let Some(payload) = transfer.get_data(TEXT_PLAIN).filter(|p| !p.is_empty()) else {
            tracing::debug!("Drop on {} ignored, empty payload", column);
            return;
        };
        let id = match payload.parse::<TaskId>() {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!("Drop on {} ignored: {}", column, e);
                return;
            }
        };
        self.service.move_task(id, status);
    }

    /// Ends the gesture whether or not a drop happened.
    pub fn on_drag_end(&mut self) {
        self.scroller.stop();
        let Some(session) = self.drag.take() else {
            return;
        };
        let mut view = self.view.borrow_mut();
        view.remove_class(Node::Card(session.task_id), classes::DIMMED);
        for status in Status::ALL {
            let column = self.renderer.layout().column(status).column;
            view.remove_class(Node::Element(column), classes::DROP_HIGHLIGHT);
        }
        tracing::debug!("Drag ended for task {}", session.task_id);
    }

    /// Timer tick: applies the deferred dim and advances auto-scroll.
    pub fn on_tick(&mut self) {
        let mut view = self.view.borrow_mut();
        if let Some(session) = self.drag.session_mut() {
            if session.dim_pending {
                session.dim_pending = false;
                view.add_class(Node::Card(session.task_id), classes::DIMMED);
            }
        }
        self.scroller.tick(&mut *view);
    }

    /// Stops any gesture and unsubscribes from the service.
    pub fn shutdown(&mut self) {
        self.on_drag_end();
        self.service.detach(&self.sync);
    }
}
