//! Error types for UI state and its browser ports.

use thiserror::Error;

/// Errors raised by the ports the controllers talk to.
///
/// None of these reach the user. Controllers log them and carry on with
/// whatever state they already hold.
#[derive(Debug, Error)]
pub enum UiError {
    /// Local storage is missing or blocked (privacy mode, quota).
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The browser rejected a DOM mutation such as `createElement` or
    /// `appendChild`.
    #[error("DOM operation failed: {0}")]
    DomOperation(String),

    /// The icon library is not loaded or lacks the named glyph.
    #[error("icon not available: {0}")]
    MissingIcon(String),

    /// The browser refused a history update.
    #[error("history update blocked: {0}")]
    HistoryBlocked(String),

    /// The page carried a configuration blob that does not parse.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

/// Result type for UI port operations.
pub type UiResult<T> = Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = UiError::DomOperation("appendChild: HierarchyRequestError".into());
        assert_eq!(
            err.to_string(),
            "DOM operation failed: appendChild: HierarchyRequestError"
        );
        assert_eq!(
            UiError::StorageUnavailable("blocked".into()).to_string(),
            "storage unavailable: blocked"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: UiError = serde_json::from_str::<bool>("nope").unwrap_err().into();
        assert!(matches!(err, UiError::InvalidConfig(_)));
    }
}
