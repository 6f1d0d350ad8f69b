//! View-binding capability interface.
//!
//! The board never reaches for global elements. Everything it touches is a
//! named handle ([`ElementId`]) or a card keyed by its task id, resolved by
//! whatever surface implements [`BoardView`] and [`ScrollSurface`].

use std::collections::BTreeSet;
use std::fmt;
use taskboard_domain::{Status, TaskId};

use crate::geometry::{Rect, ScrollOffset, Size};

/// Class names shared by the renderer, the coordinator and the surfaces.
pub mod classes {
    pub const HIDDEN: &str = "hidden";
    pub const CARD: &str = "task";
    pub const DIMMED: &str = "opacity-50";
    pub const DROP_HIGHLIGHT: &str = "bg-gray-700";
}

/// Named handle to a static element of the board surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub &'static str);

impl ElementId {
    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Anything that can carry classes: a static element or a rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Element(ElementId),
    Card(TaskId),
}

/// Status-dependent left-border accent of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Yellow,
    Green,
}

impl Accent {
    pub fn for_status(status: Status) -> Self {
        match status {
            Status::Todo => Self::Blue,
            Status::Doing => Self::Yellow,
            Status::Done => Self::Green,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "border-blue-500",
            Self::Yellow => "border-yellow-500",
            Self::Green => "border-green-500",
        }
    }
}

/// One rendered card. The task id is the lookup key used by drag events.
#[derive(Debug, Clone, PartialEq)]
pub struct CardMarkup {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub accent: Accent,
    pub created_label: String,
    pub classes: BTreeSet<String>,
}

impl CardMarkup {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Document side of the surface: children, classes and form values.
pub trait BoardView {
    fn clear_children(&mut self, list: ElementId);

    fn append_card(&mut self, list: ElementId, card: CardMarkup);

    /// Unknown nodes are ignored, as with a stale card after a re-render.
    fn add_class(&mut self, node: Node, class: &str);

    fn remove_class(&mut self, node: Node, class: &str);

    fn has_class(&self, node: Node, class: &str) -> bool;

    fn value(&self, field: ElementId) -> String;

    fn set_value(&mut self, field: ElementId, value: &str);
}

/// Geometry side of the surface: viewport, bounds and scroll offsets.
pub trait ScrollSurface {
    fn viewport(&self) -> Size;

    fn bounds(&self, element: ElementId) -> Rect;

    fn scroll_offset(&self, element: ElementId) -> ScrollOffset;

    /// Largest offset reachable on each axis (content size minus client size).
    fn scroll_extent(&self, element: ElementId) -> ScrollOffset;

    fn set_scroll_offset(&mut self, element: ElementId, offset: ScrollOffset);
}
