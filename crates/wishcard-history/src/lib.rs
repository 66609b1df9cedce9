//! Local history of composed wishes.
//!
//! The history is persisted through an injected [`KeyValueStorage`] so the
//! same logic runs over browser `localStorage` and an in-memory map.

mod error;
mod history;
mod storage;

pub use error::{HistoryError, StorageError};
pub use history::{
    HistoryConfig, StoredWish, WishHistory, DEFAULT_HISTORY_LIMIT, DEFAULT_STORAGE_KEY,
};
pub use storage::{KeyValueStorage, MemoryStorage};
