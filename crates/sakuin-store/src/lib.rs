//! Search facade: document store, index sync and index cache

mod config;
mod error;
mod io;
mod manager;
mod paths;
mod store;

pub use config::ManagerConfig;
pub use error::{Result, StoreError};
pub use io::{atomic_write, read_json, read_jsonl, write_json_atomic};
pub use manager::{SearchManager, SearchStrategy, hit_id_set, hit_ids};
pub use paths::Paths;
pub use store::{DocumentStore, MemoryStore};
