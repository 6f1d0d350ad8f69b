use taskboard_board::{
    BoardLayout, BoardView, CardMarkup, ElementId, MemoryView, Node, Rect, ScrollOffset,
    ScrollSurface, Size,
};
use taskboard_core::InputState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Title,
        }
    }
}

/// Board surface for the terminal.
///
/// Document state lives in a [`MemoryView`]; the two form fields are
/// editable [`InputState`] buffers with a cursor.
#[derive(Debug, Clone)]
pub struct TerminalView {
    doc: MemoryView,
    layout: BoardLayout,
    title: InputState,
    description: InputState,
    focus: FormField,
}

impl TerminalView {
    pub fn new(layout: &BoardLayout) -> Self {
        Self {
            doc: MemoryView::for_layout(layout),
            layout: layout.clone(),
            title: InputState::new(),
            description: InputState::new(),
            focus: FormField::Title,
        }
    }

    pub fn doc(&self) -> &MemoryView {
        &self.doc
    }

    pub fn doc_mut(&mut self) -> &mut MemoryView {
        &mut self.doc
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
    }

    pub fn cycle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn input(&self, field: FormField) -> &InputState {
        match field {
            FormField::Title => &self.title,
            FormField::Description => &self.description,
        }
    }

    pub fn input_mut(&mut self, field: FormField) -> &mut InputState {
        match field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
        }
    }

    fn field_for(&self, element: ElementId) -> Option<FormField> {
        if element == self.layout.title_input {
            Some(FormField::Title)
        } else if element == self.layout.description_input {
            Some(FormField::Description)
        } else {
            None
        }
    }
}

impl BoardView for TerminalView {
    fn clear_children(&mut self, list: ElementId) {
        self.doc.clear_children(list);
    }

    fn append_card(&mut self, list: ElementId, card: CardMarkup) {
        self.doc.append_card(list, card);
    }

    fn add_class(&mut self, node: Node, class: &str) {
        self.doc.add_class(node, class);
    }

    fn remove_class(&mut self, node: Node, class: &str) {
        self.doc.remove_class(node, class);
    }

    fn has_class(&self, node: Node, class: &str) -> bool {
        self.doc.has_class(node, class)
    }

    fn value(&self, field: ElementId) -> String {
        match self.field_for(field) {
            Some(input) => self.input(input).as_str().to_string(),
            None => self.doc.value(field),
        }
    }

    fn set_value(&mut self, field: ElementId, value: &str) {
        match self.field_for(field) {
            Some(input) => self.input_mut(input).set(value),
            None => self.doc.set_value(field, value),
        }
    }
}

impl ScrollSurface for TerminalView {
    fn viewport(&self) -> Size {
        self.doc.viewport()
    }

    fn bounds(&self, element: ElementId) -> Rect {
        self.doc.bounds(element)
    }

    fn scroll_offset(&self, element: ElementId) -> ScrollOffset {
        self.doc.scroll_offset(element)
    }

    fn scroll_extent(&self, element: ElementId) -> ScrollOffset {
        self.doc.scroll_extent(element)
    }

    fn set_scroll_offset(&mut self, element: ElementId, offset: ScrollOffset) {
        self.doc.set_scroll_offset(element, offset);
    }
}
