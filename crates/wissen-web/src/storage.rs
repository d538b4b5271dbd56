//! Local storage backed sidebar preference.

use web_sys::Storage;

use wissen_core::storage::{decode_flag, encode_flag};
use wissen_core::{PreferenceStore, UiError, UiResult};

use crate::dom::{js_error, window};

/// Sidebar preference kept under one `localStorage` key.
pub struct LocalStore {
    key: String,
    storage: Option<Storage>,
}

impl LocalStore {
    /// Opens local storage. Browsers that block it yield a store whose
    /// every access fails.
    pub fn open(key: impl Into<String>) -> Self {
        let storage = match window().map(|w| w.local_storage()) {
            Some(Ok(storage)) => storage,
            Some(Err(e)) => {
                tracing::debug!(error = %js_error(&e), "localStorage blocked");
                None
            }
            None => None,
        };
        Self {
            key: key.into(),
            storage,
        }
    }

    fn storage(&self) -> UiResult<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| UiError::StorageUnavailable("localStorage unavailable".into()))
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self) -> UiResult<Option<bool>> {
        let raw = self
            .storage()?
            .get_item(&self.key)
            .map_err(|e| UiError::StorageUnavailable(js_error(&e)))?;
        Ok(raw.as_deref().map(decode_flag))
    }

    fn save(&mut self, open: bool) -> UiResult<()> {
        self.storage()?
            .set_item(&self.key, encode_flag(open))
            .map_err(|e| UiError::StorageUnavailable(js_error(&e)))
    }
}
