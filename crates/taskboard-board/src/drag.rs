use taskboard_domain::TaskId;

use crate::geometry::Point;

/// Drag gesture lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DragSession> {
        match self {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }

    /// Ends the current gesture, returning it.
    pub fn take(&mut self) -> Option<DragSession> {
        match std::mem::take(self) {
            Self::Dragging(session) => Some(session),
            Self::Idle => None,
        }
    }
}

/// State of one in-progress drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub task_id: TaskId,
    /// Last usable pointer position seen during this drag.
    pub position: Option<Point>,
    /// The source card is dimmed on the tick after drag-start, so the drag
    /// image is captured undimmed.
    pub dim_pending: bool,
}

impl DragSession {
    pub fn new(task_id: TaskId) -> Self {
        Self {
            task_id,
            position: None,
            dim_pending: true,
        }
    }

    /// Folds a reported pointer position into the cached one.
    ///
    /// Reported coordinates win when usable. A missing report, or a zero or
    /// non-finite axis (some platforms report 0,0 right before a drop),
    /// falls back to the cached axis. Returns `None` until some position is
    /// known on both axes.
    pub fn track(&mut self, reported: Option<Point>) -> Option<Point> {
        let cached = self.position;
        let x = reported
            .map(|p| p.x)
            .filter(|v| usable(*v))
            .or(cached.map(|p| p.x));
        let y = reported
            .map(|p| p.y)
            .filter(|v| usable(*v))
            .or(cached.map(|p| p.y));

        let resolved = match (x, y) {
            (Some(x), Some(y)) => Some(Point::new(x, y)),
            _ => None,
        };
        if resolved.is_some() {
            self.position = resolved;
        }
        resolved
    }
}

fn usable(v: f64) -> bool {
    v.is_finite() && v != 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reported_position_wins() {
        let mut session = DragSession::new(TaskId(1));
        assert_eq!(
            session.track(Some(Point::new(40.0, 60.0))),
            Some(Point::new(40.0, 60.0))
        );
        assert_eq!(
            session.track(Some(Point::new(45.0, 70.0))),
            Some(Point::new(45.0, 70.0))
        );
        assert_eq!(session.position, Some(Point::new(45.0, 70.0)));
    }

    #[test]
    fn test_zero_coordinates_fall_back_per_axis() {
        let mut session = DragSession::new(TaskId(1));
        session.track(Some(Point::new(900.0, 300.0)));

        assert_eq!(
            session.track(Some(Point::new(0.0, 0.0))),
            Some(Point::new(900.0, 300.0))
        );
        assert_eq!(
            session.track(Some(Point::new(950.0, 0.0))),
            Some(Point::new(950.0, 300.0))
        );
        assert_eq!(
            session.track(Some(Point::new(f64::NAN, 20.0))),
            Some(Point::new(950.0, 20.0))
        );
        assert_eq!(session.track(None), Some(Point::new(950.0, 20.0)));
    }

    #[test]
    fn test_nothing_known_yet() {
        let mut session = DragSession::new(TaskId(1));
        assert_eq!(session.track(Some(Point::new(0.0, 0.0))), None);
        assert_eq!(session.track(Some(Point::new(10.0, 0.0))), None);
        assert_eq!(session.position, None);
    }

    #[test]
    fn test_take_returns_to_idle() {
        let mut state = DragState::Dragging(DragSession::new(TaskId(5)));
        assert!(state.is_dragging());
        let session = state.take().unwrap();
        assert_eq!(session.task_id, TaskId(5));
        assert_eq!(state, DragState::Idle);
        assert!(state.take().is_none());
    }
}
