use taskboard_core::config::DEFAULT_STORAGE_KEY;
use taskboard_domain::{Task, TaskStore};

use crate::gateway::StorageGateway;
use crate::traits::KeyValueStore;

/// The task collection stored as one JSON array under a single key.
#[derive(Debug, Clone)]
pub struct TaskStorage<S: KeyValueStore> {
    gateway: StorageGateway<S>,
    key: String,
}

impl<S: KeyValueStore> TaskStorage<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            gateway: StorageGateway::new(store),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn gateway(&self) -> &StorageGateway<S> {
        &self.gateway
    }
}

impl<S: KeyValueStore> TaskStore for TaskStorage<S> {
    fn load_tasks(&self) -> Vec<Task> {
        self.gateway.load(&self.key).unwrap_or_default()
    }

    fn save_tasks(&self, tasks: &[Task]) {
        self.gateway.save(&self.key, tasks);
    }
}
