use chrono::Utc;
use taskboard_core::{ObserverList, SharedObserver, Subject};

use crate::id::TaskIdGenerator;
use crate::status::Status;
use crate::store::TaskStore;
use crate::task::{Task, TaskId};

type Clock = Box<dyn Fn() -> i64>;

/// Owns the ordered task collection.
///
/// Every mutation persists the whole collection and then notifies
/// observers, synchronously and in that order. Observers receive a borrowed
/// `&[Task]`, never the mutable collection.
pub struct TaskService<S: TaskStore> {
    tasks: Vec<Task>,
    store: S,
    ids: TaskIdGenerator,
    observers: ObserverList<[Task]>,
    clock: Clock,
}

impl<S: TaskStore> TaskService<S> {
    pub fn new(store: S) -> Self {
        Self::with_clock(store, || Utc::now().timestamp_millis())
    }

    pub fn with_clock(store: S, clock: impl Fn() -> i64 + 'static) -> Self {
        let tasks = store.load_tasks();
        tracing::info!("Loaded {} tasks", tasks.len());
        Self {
            ids: TaskIdGenerator::seeded_from(&tasks),
            tasks,
            store,
            observers: ObserverList::new(),
            clock: Box::new(clock),
        }
    }

    /// Appends a new task. Input is not validated here.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        status: Status,
    ) -> TaskId {
        let now = (self.clock)();
        let id = self.ids.next(now, &self.tasks);
        self.tasks.push(Task::new(id, title, description, status, now));
        tracing::debug!("Added task {} ({})", id, status);
        self.commit();
        id
    }

    pub fn delete_task(&mut self, id: TaskId) {
        let Some(index) = self.position(id) else {
            tracing::debug!("Delete ignored, no task {}", id);
            return;
        };
        self.tasks.remove(index);
        tracing::debug!("Deleted task {}", id);
        self.commit();
    }

    /// Sets the status of task `id`. Moving to the current status still
    /// persists and notifies.
    pub fn move_task(&mut self, id: TaskId, new_status: Status) {
        let Some(index) = self.position(id) else {
            tracing::debug!("Move ignored, no task {}", id);
            return;
        };
        self.tasks[index].update_status(new_status);
        tracing::debug!("Moved task {} to {}", id, new_status);
        self.commit();
    }

    pub fn clear_tasks(&mut self) {
        self.tasks.clear();
        tracing::debug!("Cleared all tasks");
        self.commit();
    }

    pub fn get_all_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn commit(&self) {
        self.store.save_tasks(&self.tasks);
        self.notify();
    }
}

impl<S: TaskStore> Subject<[Task]> for TaskService<S> {
    fn attach(&mut self, observer: SharedObserver<[Task]>) {
        if !self.observers.attach(observer) {
            tracing::debug!("Observer already attached");
        }
    }

    fn detach(&mut self, observer: &SharedObserver<[Task]>) {
        self.observers.detach(observer);
    }

    fn notify(&self) {
        self.observers.publish(&self.tasks);
    }
}
