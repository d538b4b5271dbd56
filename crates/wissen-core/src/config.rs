//! # UI Configuration
//!
//! Startup settings read from the page. Every field has a default so an
//! empty or partial JSON object is valid.

use serde::{Deserialize, Serialize};

use crate::error::UiResult;

/// Width in CSS pixels at or below which the layout is considered narrow.
pub const DEFAULT_BREAKPOINT_PX: u32 = 960;

/// Local storage key holding the sidebar preference.
pub const DEFAULT_STORAGE_KEY: &str = "wissen-dashboard-sidebar-open";

/// Prefix for the document title.
pub const DEFAULT_TITLE_PREFIX: &str = "Wissen Ecom";

/// Scroll offset past which the navbar switches to its scrolled style.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 24.0;

/// Top-level UI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Breakpoint separating narrow from wide layouts.
    pub breakpoint_px: u32,

    /// Key used for the persisted sidebar flag.
    pub storage_key: String,

    /// Sidebar state on wide viewports when nothing is stored.
    pub default_open: bool,

    /// Prefix used when composing `document.title`.
    pub title_prefix: String,

    /// Navbar scroll threshold in pixels.
    pub scroll_threshold: f64,

    /// Fade-in reveal settings.
    pub reveal: RevealConfig,

    /// Optional behaviors.
    pub features: Features,

    /// Maximum log level (`trace`, `debug`, `info`, `warn`, `error`).
    pub log_level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            default_open: true,
            title_prefix: DEFAULT_TITLE_PREFIX.to_string(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            reveal: RevealConfig::default(),
            features: Features::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Which optional parts of the dashboard shell are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Persist the sidebar preference to local storage.
    pub persistence: bool,
    /// Show a modal overlay behind the open sidebar on narrow viewports.
    pub overlay: bool,
    /// Intercept navigation links and swap page panels in place.
    pub page_router: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            persistence: true,
            overlay: true,
            page_router: true,
        }
    }
}

/// Intersection settings for fade-in elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Visible ratio that counts as intersecting.
    pub threshold: f64,
    /// Observer root margin, CSS syntax.
    pub root_margin: String,
    /// Per-element animation delay step in milliseconds.
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.2,
            root_margin: "0px 0px -60px 0px".to_string(),
            stagger_ms: 60,
        }
    }
}

impl UiConfig {
    /// Parses a configuration blob.
    ///
    /// # Errors
    ///
    /// Returns [`crate::UiError::InvalidConfig`] when the JSON is malformed
    /// or a field has the wrong type.
    pub fn from_json(raw: &str) -> UiResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parses an optional page attribute. A missing or blank attribute
    /// yields defaults.
    ///
    /// # Errors
    ///
    /// Same as [`UiConfig::from_json`].
    pub fn from_attribute(raw: Option<&str>) -> UiResult<Self> {
        match raw.filter(|r| !r.trim().is_empty()) {
            Some(raw) => Self::from_json(raw),
            None => Ok(Self::default()),
        }
    }

    /// Media query string matching narrow viewports.
    #[must_use]
    pub fn narrow_media_query(&self) -> String {
        format!("(max-width: {}px)", self.breakpoint_px)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.breakpoint_px, 960);
        assert_eq!(config.storage_key, "wissen-dashboard-sidebar-open");
        assert!(config.default_open);
        assert!(config.features.persistence);
        assert_eq!(config.narrow_media_query(), "(max-width: 960px)");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            UiConfig::from_json(r#"{"breakpoint_px": 768, "features": {"page_router": false}}"#)
                .unwrap();
        assert_eq!(config.breakpoint_px, 768);
        assert!(!config.features.page_router);
        assert!(config.features.overlay);
        assert_eq!(config.title_prefix, "Wissen Ecom");
        assert_eq!(config.reveal.stagger_ms, 60);
    }

    #[test]
    fn test_from_attribute() {
        assert!(UiConfig::from_attribute(Some("{not json")).is_err());
        assert_eq!(UiConfig::from_attribute(Some("   ")).unwrap(), UiConfig::default());
        assert_eq!(UiConfig::from_attribute(None).unwrap(), UiConfig::default());
        assert_eq!(
            UiConfig::from_attribute(Some(r#"{"log_level": "debug"}"#))
                .unwrap()
                .log_level,
            "debug"
        );
    }

    #[test]
    fn test_from_json_rejects_wrong_types() {
        let err = UiConfig::from_json(r#"{"breakpoint_px": "wide"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
