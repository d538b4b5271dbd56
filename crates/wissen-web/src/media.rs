//! Breakpoint predicate over `matchMedia`.

use web_sys::MediaQueryList;

use wissen_core::{Breakpoint, UiConfig, ViewportQuery};

use crate::dom::window;

/// Live narrow-viewport query.
///
/// Falls back to comparing `innerWidth` when `matchMedia` is unavailable.
#[derive(Clone)]
pub struct MediaViewport {
    list: Option<MediaQueryList>,
    breakpoint: Breakpoint,
}

impl MediaViewport {
    /// Creates the query for widths at or below the configured breakpoint.
    pub fn new(config: &UiConfig) -> Self {
        let breakpoint = Breakpoint::new(config.breakpoint_px);
        let query = config.narrow_media_query();
        let list = window().and_then(|w| w.match_media(&query).ok().flatten());
        if list.is_none() {
            tracing::debug!(%query, "matchMedia unavailable, using innerWidth");
        }
        Self { list, breakpoint }
    }

    /// The underlying media query list, for change subscriptions.
    pub fn list(&self) -> Option<&MediaQueryList> {
        self.list.as_ref()
    }
}

impl ViewportQuery for MediaViewport {
    fn is_narrow(&self) -> bool {
        if let Some(list) = &self.list {
            return list.matches();
        }
        window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map(|width| self.breakpoint.classify(width).is_narrow())
            .unwrap_or(false)
    }
}
