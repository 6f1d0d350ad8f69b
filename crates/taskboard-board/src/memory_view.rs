use std::collections::{BTreeMap, BTreeSet};
use taskboard_domain::TaskId;

use crate::geometry::{Rect, ScrollOffset, Size};
use crate::layout::BoardLayout;
use crate::view::{classes, BoardView, CardMarkup, ElementId, Node, ScrollSurface};

#[derive(Debug, Clone, Default)]
struct ElementState {
    classes: BTreeSet<String>,
    cards: Vec<CardMarkup>,
    value: String,
    bounds: Rect,
    scroll: ScrollOffset,
    extent: ScrollOffset,
}

/// In-memory board document.
///
/// Serves as the headless surface in tests and as the document model a
/// terminal host draws from. Elements spring into existence on first write.
#[derive(Debug, Clone, Default)]
pub struct MemoryView {
    elements: BTreeMap<ElementId, ElementState>,
    viewport: Size,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view holding every element of `layout`, with the modal hidden.
    pub fn for_layout(layout: &BoardLayout) -> Self {
        let mut view = Self::new();
        for element in layout.elements() {
            view.elements.entry(element).or_default();
        }
        view.add_class(Node::Element(layout.modal), classes::HIDDEN);
        view
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn set_bounds(&mut self, element: ElementId, bounds: Rect) {
        self.element_mut(element).bounds = bounds;
    }

    /// Sets the scrollable extent and re-clamps the current offset into it.
    pub fn set_scroll_extent(&mut self, element: ElementId, extent: ScrollOffset) {
        let state = self.element_mut(element);
        state.extent = extent;
        state.scroll = state.scroll.clamp_to(extent);
    }

    pub fn cards(&self, list: ElementId) -> &[CardMarkup] {
        self.elements
            .get(&list)
            .map(|state| state.cards.as_slice())
            .unwrap_or(&[])
    }

    pub fn card(&self, id: TaskId) -> Option<&CardMarkup> {
        self.elements
            .values()
            .flat_map(|state| state.cards.iter())
            .find(|card| card.id == id)
    }

    /// List element currently holding card `id`.
    pub fn list_of(&self, id: TaskId) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, state)| state.cards.iter().any(|card| card.id == id))
            .map(|(element, _)| *element)
    }

    pub fn is_visible(&self, element: ElementId) -> bool {
        !self.has_class(Node::Element(element), classes::HIDDEN)
    }

    fn element_mut(&mut self, element: ElementId) -> &mut ElementState {
        self.elements.entry(element).or_default()
    }

    fn card_mut(&mut self, id: TaskId) -> Option<&mut CardMarkup> {
        self.elements
            .values_mut()
            .flat_map(|state| state.cards.iter_mut())
            .find(|card| card.id == id)
    }
}

impl BoardView for MemoryView {
    fn clear_children(&mut self, list: ElementId) {
        self.element_mut(list).cards.clear();
    }

    fn append_card(&mut self, list: ElementId, card: CardMarkup) {
        self.element_mut(list).cards.push(card);
    }

    fn add_class(&mut self, node: Node, class: &str) {
        match node {
            Node::Element(element) => {
                self.element_mut(element).classes.insert(class.to_string());
            }
            Node::Card(id) => {
                if let Some(card) = self.card_mut(id) {
                    card.classes.insert(class.to_string());
                }
            }
        }
    }

    fn remove_class(&mut self, node: Node, class: &str) {
        match node {
            Node::Element(element) => {
                if let Some(state) = self.elements.get_mut(&element) {
                    state.classes.remove(class);
                }
            }
            Node::Card(id) => {
                if let Some(card) = self.card_mut(id) {
                    card.classes.remove(class);
                }
            }
        }
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        match node {
            Node::Element(element) => self
                .elements
                .get(&element)
                .is_some_and(|state| state.classes.contains(class)),
            Node::Card(id) => self.card(id).is_some_and(|card| card.has_class(class)),
        }
    }

    fn value(&self, field: ElementId) -> String {
        self.elements
            .get(&field)
            .map(|state| state.value.clone())
            .unwrap_or_default()
    }

    fn set_value(&mut self, field: ElementId, value: &str) {
        self.element_mut(field).value = value.to_string();
    }
}

impl ScrollSurface for MemoryView {
    fn viewport(&self) -> Size {
        self.viewport
    }

    fn bounds(&self, element: ElementId) -> Rect {
        self.elements
            .get(&element)
            .map(|state| state.bounds)
            .unwrap_or_default()
    }

    fn scroll_offset(&self, element: ElementId) -> ScrollOffset {
        self.elements
            .get(&element)
            .map(|state| state.scroll)
            .unwrap_or_default()
    }

    fn scroll_extent(&self, element: ElementId) -> ScrollOffset {
        self.elements
            .get(&element)
            .map(|state| state.extent)
            .unwrap_or_default()
    }

    fn set_scroll_offset(&mut self, element: ElementId, offset: ScrollOffset) {
        let state = self.element_mut(element);
        state.scroll = offset.clamp_to(state.extent);
    }
}
