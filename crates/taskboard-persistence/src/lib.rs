pub mod gateway;
pub mod serialization;
pub mod store;
pub mod task_storage;
pub mod traits;

pub use gateway::StorageGateway;
pub use serialization::JsonCodec;
pub use store::{AtomicWriter, JsonDirStore, MemoryStore};
pub use task_storage::TaskStorage;
pub use traits::KeyValueStore;
