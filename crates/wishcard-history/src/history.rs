//! WishHistory — the composer's local gallery of created wishes.
//!
//! Entries are kept newest first as a JSON array under a single storage key
//! and truncated to a fixed limit on every append. Records are stored
//! structurally, not as share tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use wishcard_codec::WishRecord;

use crate::error::HistoryError;
use crate::storage::KeyValueStorage;

/// Storage key the history lives under.
pub const DEFAULT_STORAGE_KEY: &str = "core_memory_wishes";

/// Maximum number of entries kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    pub storage_key: String,
    pub limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

/// One history entry: the wish plus when it was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredWish {
    #[serde(flatten)]
    pub record: WishRecord,
    /// Creation time in milliseconds since the Unix epoch.
    pub id: String,
    /// Human-readable creation date, e.g. `Oct 19, 2026`.
    pub date: String,
}

impl StoredWish {
    pub fn new(record: WishRecord, created_at: DateTime<Utc>) -> Self {
        Self {
            record,
            id: created_at.timestamp_millis().to_string(),
            date: created_at.format("%b %-d, %Y").to_string(),
        }
    }
}

/// Bounded, newest-first wish history over an injected store.
pub struct WishHistory<S: KeyValueStorage> {
    storage: S,
    config: HistoryConfig,
}

impl<S: KeyValueStorage> WishHistory<S> {
    pub fn new(storage: S) -> Self {
        Self::with_config(storage, HistoryConfig::default())
    }

    pub fn with_config(storage: S, config: HistoryConfig) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Record a wish created now.
    pub fn append(&mut self, record: WishRecord) -> Result<StoredWish, HistoryError> {
        self.append_at(record, Utc::now())
    }

    /// Record a wish created at `created_at`.
    ///
    /// The new entry goes first; the oldest entries past the limit are dropped.
    /// If the persisted history cannot be read, nothing is written.
    pub fn append_at(
        &mut self,
        record: WishRecord,
        created_at: DateTime<Utc>,
    ) -> Result<StoredWish, HistoryError> {
        let entry = StoredWish::new(record, created_at);
        let mut entries = self.load()?;
        entries.insert(0, entry.clone());
        entries.truncate(self.config.limit);

        let json = serde_json::to_string(&entries)?;
        self.storage.set(&self.config.storage_key, &json)?;
        Ok(entry)
    }

    /// All entries, newest first.
    ///
    /// Missing, unreadable or corrupt data reads as an empty history.
    pub fn list(&self) -> Vec<StoredWish> {
        self.load().unwrap_or_else(|e| {
            warn!(error = %e, key = %self.config.storage_key, "wish history unreadable");
            Vec::new()
        })
    }

    fn load(&self) -> Result<Vec<StoredWish>, HistoryError> {
        match self.storage.get(&self.config.storage_key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    /// Remove every entry.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.storage.remove(&self.config.storage_key)?;
        Ok(())
    }

    pub fn into_inner(self) -> S {
        self.storage
    }
}
