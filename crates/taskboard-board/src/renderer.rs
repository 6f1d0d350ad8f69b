use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;
use taskboard_core::Observer;
use taskboard_domain::Task;

use crate::layout::BoardLayout;
use crate::view::{classes, Accent, BoardView, CardMarkup, Node};

/// Draws a task collection into the three status lists.
///
/// Every render clears the lists and rebuilds them, so within a status the
/// display order is the collection order.
#[derive(Debug, Clone, Default)]
pub struct BoardRenderer {
    layout: BoardLayout,
}

impl BoardRenderer {
    pub fn new(layout: BoardLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn render_all<V: BoardView + ?Sized>(&self, view: &mut V, tasks: &[Task]) {
        self.clear_all(view);
        for task in tasks {
            view.append_card(self.layout.list(task.status), Self::card_markup(task));
        }
        tracing::debug!("Rendered {} cards", tasks.len());
    }

    pub fn clear_all<V: BoardView + ?Sized>(&self, view: &mut V) {
        for (_, list) in self.layout.lists() {
            view.clear_children(list);
        }
    }

    pub fn show_modal<V: BoardView + ?Sized>(&self, view: &mut V) {
        view.remove_class(Node::Element(self.layout.modal), classes::HIDDEN);
    }

    pub fn hide_modal<V: BoardView + ?Sized>(&self, view: &mut V) {
        view.add_class(Node::Element(self.layout.modal), classes::HIDDEN);
    }

    pub fn card_markup(task: &Task) -> CardMarkup {
        let accent = Accent::for_status(task.status);
        let classes = BTreeSet::from([classes::CARD.to_string(), accent.class().to_string()]);
        CardMarkup {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            accent,
            created_label: task.created_date_label(),
            classes,
        }
    }
}

/// Subscriber that re-renders the board on every repository change.
pub struct BoardSync<V: BoardView> {
    view: Rc<RefCell<V>>,
    renderer: BoardRenderer,
}

impl<V: BoardView> BoardSync<V> {
    pub fn new(view: Rc<RefCell<V>>, renderer: BoardRenderer) -> Self {
        Self { view, renderer }
    }
}

impl<V: BoardView> Observer<[Task]> for BoardSync<V> {
    fn update(&mut self, data: &[Task]) {
        self.renderer.render_all(&mut *self.view.borrow_mut(), data);
    }
}
