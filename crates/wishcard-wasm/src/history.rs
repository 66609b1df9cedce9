//! WishHistoryStore — the history exposed to JavaScript, persisted in
//! `window.localStorage`.

use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;
use wishcard_codec::WishRecord;
use wishcard_history::{KeyValueStorage, StorageError, WishHistory};

use crate::error::{from_js_value, to_js_error, to_js_value};

/// `window.localStorage` as a [`KeyValueStorage`].
pub struct LocalStorage {
    inner: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, StorageError> {
        let window =
            web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStorage for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner
            .get_item(key)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed(format!("{e:?}")))
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.inner
            .remove_item(key)
            .map_err(|e| StorageError::WriteFailed(format!("{e:?}")))
    }
}

/// Convert `Date.now()` output into a UTC timestamp.
fn timestamp_from_js_millis(ms: f64) -> Result<DateTime<Utc>, String> {
    if !ms.is_finite() {
        return Err(format!("invalid timestamp: {ms}"));
    }
    DateTime::from_timestamp_millis(ms as i64).ok_or_else(|| format!("timestamp out of range: {ms}"))
}

/// Main history class exposed to JavaScript.
#[wasm_bindgen]
pub struct WishHistoryStore {
    history: WishHistory<LocalStorage>,
}

#[wasm_bindgen]
impl WishHistoryStore {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WishHistoryStore, JsValue> {
        let storage = LocalStorage::open().map_err(to_js_error)?;
        Ok(Self {
            history: WishHistory::new(storage),
        })
    }

    /// Record a wish and return the stored entry.
    pub fn append(&mut self, record: JsValue) -> Result<JsValue, JsValue> {
        let record: WishRecord = from_js_value(record)?;
        let now = timestamp_from_js_millis(js_sys::Date::now()).map_err(to_js_error)?;
        let entry = self.history.append_at(record, now).map_err(to_js_error)?;
        to_js_value(&entry)
    }

    /// All entries, newest first.
    pub fn list(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.history.list())
    }

    pub fn clear(&mut self) -> Result<(), JsValue> {
        self.history.clear().map_err(to_js_error)
    }
}
