use crate::task::Task;

/// Where the task service keeps its collection between sessions.
///
/// Implementations are fail-soft: a failed load yields an empty collection and
/// a failed save is logged and dropped, so the service never sees an error.
#[cfg_attr(test, mockall::automock)]
pub trait TaskStore {
    fn load_tasks(&self) -> Vec<Task>;
    fn save_tasks(&self, tasks: &[Task]);
}

impl<S: TaskStore + ?Sized> TaskStore for Box<S> {
    fn load_tasks(&self) -> Vec<Task> {
        (**self).load_tasks()
    }

    fn save_tasks(&self, tasks: &[Task]) {
        (**self).save_tasks(tasks)
    }
}
