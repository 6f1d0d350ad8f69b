use taskboard_core::BoardResult;

/// String-valued key-value storage, the shape of a browser's local storage.
///
/// Methods take `&self`: backends are handles onto storage that lives
/// elsewhere (a shared map, a directory), not the storage itself.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Returns `None` when the key is absent.
    fn get_item(&self, key: &str) -> BoardResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> BoardResult<()>;

    /// Removing an absent key succeeds.
    fn remove_item(&self, key: &str) -> BoardResult<()>;

    fn clear(&self) -> BoardResult<()>;
}
