//! Sidebar preference storage helpers.

use crate::error::{UiError, UiResult};
use crate::traits::PreferenceStore;

/// Encodes the flag the way it is stored: `"true"` or `"false"`.
#[must_use]
pub fn encode_flag(open: bool) -> &'static str {
    if open {
        "true"
    } else {
        "false"
    }
}

/// Decodes a stored flag. Anything other than `"true"` reads as closed.
#[must_use]
pub fn decode_flag(raw: &str) -> bool {
    raw == "true"
}

/// In-memory preference store.
///
/// Backs the session-only mode and doubles as a test fake. `blocked` makes
/// every access fail the way a privacy-mode browser does.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    blocked: bool,
    writes: usize,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a raw stored string.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            value: Some(raw.into()),
            ..Self::default()
        }
    }

    /// Creates a store whose every access fails.
    #[must_use]
    pub fn blocked() -> Self {
        Self {
            blocked: true,
            ..Self::default()
        }
    }

    /// Raw stored string, if any.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Number of successful writes.
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> UiResult<Option<bool>> {
        if self.blocked {
            return Err(UiError::StorageUnavailable("storage is blocked".into()));
        }
        Ok(self.value.as_deref().map(decode_flag))
    }

    fn save(&mut self, open: bool) -> UiResult<()> {
        if self.blocked {
            return Err(UiError::StorageUnavailable("storage is blocked".into()));
        }
        self.value = Some(encode_flag(open).to_string());
        self.writes += 1;
        Ok(())
    }
}
