//! `window.localStorage` as a [`KeyValueStore`].

use logo_scene::{KeyValueStore, StoreError};
use web_sys::Storage;

/// Persistence slot backed by the browser's local storage.
pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Opens the current window's local storage.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] outside a browser window or when
    /// storage is disabled.
    pub fn from_window() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|err| StoreError::Unavailable(format!("{err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StoreError::Write {
                key: key.to_string(),
                message: format!("{err:?}"),
            })
    }
}
