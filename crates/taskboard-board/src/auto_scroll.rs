use std::time::Duration;
use taskboard_core::AutoScrollSettings;

use crate::geometry::{Point, ScrollOffset};
use crate::layout::BoardLayout;
use crate::view::{ElementId, ScrollSurface};

/// Per-tick offset change for one scrollable element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMove {
    pub element: ElementId,
    pub delta: ScrollOffset,
}

/// What one auto-scroll run does on every tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScrollPlan {
    pub moves: Vec<ScrollMove>,
}

impl ScrollPlan {
    /// Plans scrolling for a pointer at `pointer`, or `None` when the
    /// pointer is clear of every viewport edge.
    ///
    /// Near the left/right edge the main container scrolls horizontally.
    /// Near the top/bottom edge every list under the pointer's x, and the
    /// main container, scroll vertically.
    pub fn for_pointer<S: ScrollSurface + ?Sized>(
        settings: &AutoScrollSettings,
        pointer: Point,
        surface: &S,
        layout: &BoardLayout,
    ) -> Option<Self> {
        let viewport = surface.viewport();
        let threshold = settings.edge_threshold;
        let step = settings.step;

        // Both zones per axis are `threshold` wide: [0, t) and [size - t, size)
        let dx = if pointer.x < threshold {
            -step
        } else if pointer.x >= viewport.width - threshold {
            step
        } else {
            0.0
        };
        let dy = if pointer.y < threshold {
            -step
        } else if pointer.y >= viewport.height - threshold {
            step
        } else {
            0.0
        };

        if dx == 0.0 && dy == 0.0 {
            return None;
        }

        let mut moves = vec![ScrollMove {
            element: layout.main,
            delta: ScrollOffset::new(dx, dy),
        }];
        if dy != 0.0 {
            moves.extend(
                layout
                    .lists()
                    .filter(|(_, list)| surface.bounds(*list).spans_x(pointer.x))
                    .map(|(_, list)| ScrollMove {
                        element: list,
                        delta: ScrollOffset::new(0.0, dy),
                    }),
            );
        }
        Some(Self { moves })
    }

    pub fn apply<S: ScrollSurface + ?Sized>(&self, surface: &mut S) {
        for scroll in &self.moves {
            let current = surface.scroll_offset(scroll.element);
            let next = ScrollOffset::new(
                current.left + scroll.delta.left,
                current.top + scroll.delta.top,
            )
            .clamp_to(surface.scroll_extent(scroll.element));
            if next != current {
                surface.set_scroll_offset(scroll.element, next);
            }
        }
    }
}

/// Repeating auto-scroll task with at most one live instance.
///
/// The host calls [`AutoScroller::tick`] every [`AutoScroller::interval`]
/// while [`AutoScroller::is_active`] holds. Starting replaces whatever was
/// running; stopping an idle scroller does nothing.
#[derive(Debug, Clone)]
pub struct AutoScroller {
    settings: AutoScrollSettings,
    active: Option<ScrollPlan>,
}

impl AutoScroller {
    pub fn new(settings: AutoScrollSettings) -> Self {
        Self {
            settings,
            active: None,
        }
    }

    pub fn settings(&self) -> &AutoScrollSettings {
        &self.settings
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.settings.interval_ms)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn plan(&self) -> Option<&ScrollPlan> {
        self.active.as_ref()
    }

    pub fn start(&mut self, plan: ScrollPlan) {
        self.active = Some(plan);
    }

    pub fn stop(&mut self) {
        if self.active.take().is_some() {
            tracing::debug!("Auto-scroll stopped");
        }
    }

    /// Re-plans for the latest pointer position. Safe to call on every move.
    pub fn evaluate<S: ScrollSurface + ?Sized>(
        &mut self,
        pointer: Point,
        surface: &S,
        layout: &BoardLayout,
    ) {
        self.stop();
        if let Some(plan) = ScrollPlan::for_pointer(&self.settings, pointer, surface, layout) {
            tracing::debug!("Auto-scroll started with {} targets", plan.moves.len());
            self.start(plan);
        }
    }

    /// Advances the running scroll by one step. Returns whether one ran.
    pub fn tick<S: ScrollSurface + ?Sized>(&self, surface: &mut S) -> bool {
        match &self.active {
            Some(plan) => {
                plan.apply(surface);
                true
            }
            None => false,
        }
    }
}

impl Default for AutoScroller {
    fn default() -> Self {
        Self::new(AutoScrollSettings::pixels())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, Size};
    use crate::memory_view::MemoryView;
    use taskboard_domain::Status;

    /// 1000x800 viewport, three 300px columns, everything scrollable.
    fn surface(layout: &BoardLayout) -> MemoryView {
        let mut view = MemoryView::for_layout(layout);
        view.set_viewport(Size::new(1000.0, 800.0));
        view.set_scroll_extent(layout.main, ScrollOffset::new(600.0, 100.0));
        for (i, status) in Status::ALL.into_iter().enumerate() {
            let list = layout.list(status);
            view.set_bounds(list, Rect::new(i as f64 * 320.0, 100.0, 300.0, 700.0));
            view.set_scroll_extent(list, ScrollOffset::new(0.0, 500.0));
        }
        view
    }

    #[test]
    fn test_left_edge_scrolls_main_left_until_zero() {
        let layout = BoardLayout::default();
        let mut view = surface(&layout);
        view.set_scroll_offset(layout.main, ScrollOffset::new(35.0, 0.0));

        let mut scroller = AutoScroller::default();
        scroller.evaluate(Point::new(40.0, 400.0), &view, &layout);
        assert!(scroller.is_active());

        let mut lefts = Vec::new();
        for _ in 0..5 {
            scroller.tick(&mut view);
            lefts.push(view.scroll_offset(layout.main).left);
        }
        assert_eq!(lefts, vec![25.0, 15.0, 5.0, 0.0, 0.0]);
    }

    #[test]
    fn test_right_edge_clamps_at_extent() {
        let layout = BoardLayout::default();
        let mut view = surface(&layout);
        view.set_scroll_offset(layout.main, ScrollOffset::new(595.0, 0.0));

        let mut scroller = AutoScroller::default();
        scroller.evaluate(Point::new(990.0, 400.0), &view, &layout);
        scroller.tick(&mut view);
        scroller.tick(&mut view);

        assert_eq!(view.scroll_offset(layout.main).left, 600.0);
    }

    #[test]
    fn test_edge_zones_are_equally_wide() {
        let layout = BoardLayout::default();
        let mut view = MemoryView::for_layout(&layout);
        view.set_viewport(Size::new(60.0, 30.0));
        let cells = AutoScrollSettings::cells();
        let plan = |x: f64, y: f64| ScrollPlan::for_pointer(&cells, Point::new(x, y), &view, &layout);

        let main_delta = |p: Option<ScrollPlan>| p.map(|p| p.moves[0].delta);
        assert_eq!(main_delta(plan(0.0, 15.0)), Some(ScrollOffset::new(-1.0, 0.0)));
        assert_eq!(main_delta(plan(1.0, 15.0)), Some(ScrollOffset::new(-1.0, 0.0)));
        assert_eq!(plan(2.0, 15.0), None);
        assert_eq!(plan(57.0, 15.0), None);
        assert_eq!(main_delta(plan(58.0, 15.0)), Some(ScrollOffset::new(1.0, 0.0)));
        assert_eq!(main_delta(plan(59.0, 15.0)), Some(ScrollOffset::new(1.0, 0.0)));

        assert_eq!(main_delta(plan(30.0, 1.0)), Some(ScrollOffset::new(0.0, -1.0)));
        assert_eq!(plan(30.0, 27.0), None);
        assert_eq!(main_delta(plan(30.0, 28.0)), Some(ScrollOffset::new(0.0, 1.0)));
    }

    #[test]
    fn test_bottom_edge_scrolls_list_under_pointer_and_main() {
        let layout = BoardLayout::default();
        let mut view = surface(&layout);

        let mut scroller = AutoScroller::default();
        // x = 400 is inside the doing list only
        scroller.evaluate(Point::new(400.0, 790.0), &view, &layout);
        scroller.tick(&mut view);
        scroller.tick(&mut view);

        assert_eq!(view.scroll_offset(layout.list(Status::Doing)).top, 20.0);
        assert_eq!(view.scroll_offset(layout.list(Status::Todo)).top, 0.0);
        assert_eq!(view.scroll_offset(layout.list(Status::Done)).top, 0.0);
        assert_eq!(view.scroll_offset(layout.main).top, 20.0);
        assert_eq!(view.scroll_offset(layout.main).left, 0.0);
    }

    #[test]
    fn test_corner_scrolls_both_axes() {
        let layout = BoardLayout::default();
        let mut view = surface(&layout);
        view.set_scroll_offset(layout.main, ScrollOffset::new(100.0, 50.0));
        view.set_scroll_offset(layout.list(Status::Todo), ScrollOffset::new(0.0, 50.0));

        let mut scroller = AutoScroller::default();
        scroller.evaluate(Point::new(10.0, 10.0), &view, &layout);
        scroller.tick(&mut view);

        assert_eq!(view.scroll_offset(layout.main), ScrollOffset::new(90.0, 40.0));
        assert_eq!(view.scroll_offset(layout.list(Status::Todo)).top, 40.0);
    }

    #[test]
    fn test_center_schedules_nothing_and_cancels_previous() {
        let layout = BoardLayout::default();
        let view = surface(&layout);

        let mut scroller = AutoScroller::default();
        scroller.evaluate(Point::new(10.0, 400.0), &view, &layout);
        assert!(scroller.is_active());

        scroller.evaluate(Point::new(500.0, 400.0), &view, &layout);
        assert!(!scroller.is_active());
    }

    #[test]
    fn test_repeated_evaluation_keeps_one_instance() {
        let layout = BoardLayout::default();
        let mut view = surface(&layout);
        view.set_scroll_offset(layout.main, ScrollOffset::new(300.0, 0.0));

        let mut scroller = AutoScroller::default();
        for _ in 0..10 {
            scroller.evaluate(Point::new(20.0, 400.0), &view, &layout);
        }
        scroller.tick(&mut view);

        // One step, not ten
        assert_eq!(view.scroll_offset(layout.main).left, 290.0);
        assert_eq!(scroller.plan().unwrap().moves.len(), 1);
    }

    #[test]
    fn test_stop_is_idempotent_and_tick_is_inert_when_idle() {
        let layout = BoardLayout::default();
        let mut view = surface(&layout);
        view.set_scroll_offset(layout.main, ScrollOffset::new(300.0, 0.0));

        let mut scroller = AutoScroller::default();
        scroller.stop();
        scroller.stop();
        assert!(!scroller.tick(&mut view));
        assert_eq!(view.scroll_offset(layout.main).left, 300.0);
        assert_eq!(scroller.interval(), Duration::from_millis(16));
    }
}
