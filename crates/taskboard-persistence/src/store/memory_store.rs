use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use taskboard_core::{BoardError, BoardResult};

use crate::traits::KeyValueStore;

/// In-process key-value store.
///
/// Clones share one map, the way every script on a page shares one local
/// storage. An optional quota bounds the total size of keys plus values.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<BTreeMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            items: Rc::default(),
            quota: Some(quota),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn used_bytes(&self) -> usize {
        self.items
            .borrow()
            .iter()
            .map(|(key, value)| key.len() + value.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> BoardResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> BoardResult<()> {
        if let Some(quota) = self.quota {
            let replaced = self
                .items
                .borrow()
                .get(key)
                .map_or(0, |old| key.len() + old.len());
            let needed = self.used_bytes() - replaced + key.len() + value.len();
            if needed > quota {
                return Err(BoardError::QuotaExceeded { needed, quota });
            }
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> BoardResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> BoardResult<()> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_contents() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set_item("k", "v").unwrap();
        assert_eq!(other.get_item("k").unwrap().as_deref(), Some("v"));

        other.remove_item("k").unwrap();
        assert!(store.get_item("k").unwrap().is_none());
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let store = MemoryStore::with_quota(10);
        store.set_item("key", "1234").unwrap();

        let err = store.set_item("other", "123456").unwrap_err();
        assert!(matches!(err, BoardError::QuotaExceeded { needed: 18, quota: 10 }));
        assert!(store.get_item("other").unwrap().is_none());
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let store = MemoryStore::with_quota(10);
        store.set_item("key", "1234567").unwrap();
        store.set_item("key", "7654321").unwrap();
        assert_eq!(store.used_bytes(), 10);
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = MemoryStore::new();
        store.set_item("a", "1").unwrap();
        store.set_item("b", "2").unwrap();
        store.clear().unwrap();
        assert!(store.is_empty());
    }
}
