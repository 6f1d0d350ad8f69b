use std::collections::HashSet;

use crate::task::{Task, TaskId};

/// Issues clock-derived ids that never repeat: `max(now_ms, last + 1)`.
///
/// Two tasks created in the same millisecond, or across a clock that steps
/// backwards, still get distinct and increasing ids.
#[derive(Debug, Clone, Default)]
pub struct TaskIdGenerator {
    last: Option<i64>,
}

impl TaskIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the generator past every id already present in `tasks`.
    pub fn seeded_from(tasks: &[Task]) -> Self {
        Self {
            last: tasks.iter().map(|task| task.id.value()).max(),
        }
    }

    /// Next id for a collection currently holding `existing`.
    ///
    /// Once `last + 1` would overflow, ids come from the first gap in
    /// `existing` at or after `now_ms` (or after zero).
    pub fn next(&mut self, now_ms: i64, existing: &[Task]) -> TaskId {
        let id = match self.last {
            Some(last) if now_ms <= last => match last.checked_add(1) {
                Some(id) => id,
                None => {
                    let id = unused_id(now_ms, existing);
                    tracing::warn!("Task ids exhausted past {}, reusing gap {}", last, id);
                    return TaskId(id);
                }
            },
            _ => now_ms,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

fn unused_id(from: i64, existing: &[Task]) -> i64 {
    let taken: HashSet<i64> = existing.iter().map(|task| task.id.value()).collect();
    let first_gap = |start: i64| (start..=i64::MAX).find(|id| !taken.contains(id));
    first_gap(from.max(0))
        .or_else(|| first_gap(0))
        .unwrap_or(i64::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    #[test]
    fn test_uses_clock_when_ahead() {
        let mut ids = TaskIdGenerator::new();
        assert_eq!(ids.next(1_000, &[]), TaskId(1_000));
        assert_eq!(ids.next(2_000, &[]), TaskId(2_000));
    }

    #[test]
    fn test_same_millisecond_is_bumped() {
        let mut ids = TaskIdGenerator::new();
        let a = ids.next(5_000, &[]);
        let b = ids.next(5_000, &[]);
        let c = ids.next(5_000, &[]);
        assert_eq!((a, b, c), (TaskId(5_000), TaskId(5_001), TaskId(5_002)));
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut ids = TaskIdGenerator::new();
        ids.next(9_000, &[]);
        assert_eq!(ids.next(3_000, &[]), TaskId(9_001));
    }

    #[test]
    fn test_seeded_from_existing_tasks() {
        let tasks = vec![
            Task::new(TaskId(40), "a", "a", Status::Todo, 40),
            Task::new(TaskId(75), "b", "b", Status::Done, 75),
        ];
        let mut ids = TaskIdGenerator::seeded_from(&tasks);
        assert_eq!(ids.next(10, &tasks), TaskId(76));
    }

    #[test]
    fn test_max_id_falls_back_to_an_unused_id() {
        let tasks = vec![
            Task::new(TaskId(i64::MAX), "max", "m", Status::Todo, 1),
            Task::new(TaskId(500), "a", "a", Status::Todo, 1),
        ];
        let mut ids = TaskIdGenerator::seeded_from(&tasks);

        let first = ids.next(500, &tasks);
        assert_eq!(first, TaskId(501));

        let mut grown = tasks.clone();
        grown.push(Task::new(first, "b", "b", Status::Todo, 500));
        let second = ids.next(500, &grown);
        assert_eq!(second, TaskId(502));
        assert!(grown.iter().all(|task| task.id != second));
    }
}
