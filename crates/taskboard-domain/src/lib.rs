pub mod id;
pub mod service;
pub mod status;
pub mod store;
pub mod task;

pub use id::TaskIdGenerator;
pub use service::TaskService;
pub use status::Status;
pub use store::TaskStore;
pub use task::{Task, TaskId};
