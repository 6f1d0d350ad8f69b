use serde::{de::DeserializeOwned, Serialize};

use crate::serialization::JsonCodec;
use crate::traits::KeyValueStore;

/// Typed, fail-soft access to a [`KeyValueStore`].
///
/// Nothing here returns an error: failed writes are logged and dropped, and
/// failed reads are logged and reported as absent.
#[derive(Debug, Clone)]
pub struct StorageGateway<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> StorageGateway<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let text = match JsonCodec::encode(value) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Error serializing value for '{}': {}", key, e);
                return;
            }
        };
        if let Err(e) = self.store.set_item(key, &text) {
            tracing::error!("Error saving '{}': {}", key, e);
        }
    }

    /// `None` when the key is absent or its value cannot be read back as `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = match self.store.get_item(key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                tracing::error!("Error loading '{}': {}", key, e);
                return None;
            }
        };
        match JsonCodec::decode(&text) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Error decoding '{}': {}", key, e);
                None
            }
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.store.remove_item(key) {
            tracing::error!("Error removing '{}': {}", key, e);
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.clear() {
            tracing::error!("Error clearing storage: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::traits::MockKeyValueStore;
    use std::collections::BTreeMap;
    use taskboard_core::BoardError;

    #[test]
    fn test_save_then_load() {
        let gateway = StorageGateway::new(MemoryStore::new());
        gateway.save("numbers", &vec![1, 2, 3]);
        assert_eq!(gateway.load::<Vec<i32>>("numbers"), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_absent_key_is_none() {
        let gateway = StorageGateway::new(MemoryStore::new());
        assert_eq!(gateway.load::<Vec<i32>>("missing"), None);
    }

    #[test]
    fn test_undecodable_value_is_none() {
        let store = MemoryStore::new();
        store.set_item("numbers", "{oops").unwrap();
        let gateway = StorageGateway::new(store);
        assert_eq!(gateway.load::<Vec<i32>>("numbers"), None);
    }

    #[test]
    fn test_unserializable_value_is_dropped() {
        let store = MemoryStore::new();
        let gateway = StorageGateway::new(store.clone());

        // JSON object keys must be strings
        let mut value = BTreeMap::new();
        value.insert(vec![1u8], 1u8);
        gateway.save("bad", &value);

        assert!(store.is_empty());
    }

    #[test]
    fn test_quota_failure_is_swallowed() {
        let store = MemoryStore::with_quota(8);
        let gateway = StorageGateway::new(store.clone());
        gateway.save("k", "fits");
        gateway.save("k", "this one is far too long");

        assert_eq!(gateway.load::<String>("k").as_deref(), Some("fits"));
    }

    #[test]
    fn test_backend_errors_are_logged_not_raised() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_get_item()
            .returning(|_| Err(BoardError::Internal("storage unavailable".to_string())));
        store
            .expect_set_item()
            .times(1)
            .returning(|_, _| Err(BoardError::Internal("storage unavailable".to_string())));
        store
            .expect_remove_item()
            .times(1)
            .returning(|_| Err(BoardError::Internal("storage unavailable".to_string())));
        store
            .expect_clear()
            .times(1)
            .returning(|| Err(BoardError::Internal("storage unavailable".to_string())));

        let gateway = StorageGateway::new(store);
        gateway.save("k", &1);
        assert_eq!(gateway.load::<i32>("k"), None);
        gateway.remove("k");
        gateway.clear();
    }

    #[test]
    fn test_remove_and_clear() {
        let store = MemoryStore::new();
        let gateway = StorageGateway::new(store.clone());
        gateway.save("a", &1);
        gateway.save("b", &2);

        gateway.remove("a");
        assert_eq!(gateway.load::<i32>("a"), None);
        assert_eq!(gateway.load::<i32>("b"), Some(2));

        gateway.clear();
        assert!(store.is_empty());
    }
}
