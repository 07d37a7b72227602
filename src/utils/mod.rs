// Utils compartidos

pub mod constants;
pub mod scheduler;
pub mod storage;

pub use constants::*;
pub use scheduler::{BrowserScheduler, Scheduler};
pub use storage::{load_json, KeyValueStore, LocalStorage, MemoryStore};
