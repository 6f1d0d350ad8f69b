pub mod config;
pub mod error;
pub mod input;
pub mod result;
pub mod traits;

pub use config::{AppConfig, AutoScrollSettings};
pub use error::BoardError;
pub use input::InputState;
pub use result::BoardResult;
pub use traits::{Observer, ObserverList, SharedObserver, Subject};
