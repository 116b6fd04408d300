//! Recent checks: the bounded, deduplicated history of successfully checked
//! flower names, persisted through a key/value store.

mod cache;
pub mod recent_render;
pub mod storage;

pub use cache::{MAX_RECENT, RECENT_KEY, RecentChecksCache, next_recent};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
