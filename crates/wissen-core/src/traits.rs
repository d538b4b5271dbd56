//! Port traits between the state machines and the browser.
//!
//! The web crate implements these over `web-sys`. Tests implement them with
//! plain structs so the state machines run without a document.

use crate::error::UiResult;
use crate::router::{HistoryState, PagePanel};
use crate::sidebar::SidebarFrame;

/// Live breakpoint predicate.
pub trait ViewportQuery {
    /// Returns true while the viewport is at or below the breakpoint.
    fn is_narrow(&self) -> bool;
}

/// Persisted sidebar preference.
pub trait PreferenceStore {
    /// Reads the stored flag. `Ok(None)` means nothing has been stored.
    fn load(&self) -> UiResult<Option<bool>>;

    /// Writes the flag.
    fn save(&mut self, open: bool) -> UiResult<()>;
}

/// Renders sidebar state into the document.
pub trait SidebarView {
    /// Applies one computed frame: classes, icons, ARIA, overlay, scroll lock.
    fn apply_open_state(&mut self, frame: &SidebarFrame);
}

/// Renders routed pages into the document.
pub trait PageView {
    /// Records `page` as the document's current page.
    fn set_current_page(&mut self, page: &str);

    /// Replaces the header title and subtitle.
    fn set_header(&mut self, title: &str, subtitle: &str);

    /// Replaces the main content with `panel` and focuses it.
    fn mount_panel(&mut self, panel: &PagePanel);

    /// Marks the link for `page` as current and clears the others.
    fn highlight_link(&mut self, page: &str);

    /// Sets `document.title`.
    fn set_document_title(&mut self, title: &str);

    /// Writes `message` to the live region on the next paint frame.
    fn announce(&mut self, message: &str);

    /// The `href` of the navigation link for `page`, if one is on the page.
    fn link_href(&self, page: &str) -> Option<String>;

    /// Pushes a history entry.
    fn push_history(&mut self, state: &HistoryState, title: &str, href: &str) -> UiResult<()>;
}

impl<T: ViewportQuery + ?Sized> ViewportQuery for Box<T> {
    fn is_narrow(&self) -> bool {
        (**self).is_narrow()
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn load(&self) -> UiResult<Option<bool>> {
        (**self).load()
    }

    fn save(&mut self, open: bool) -> UiResult<()> {
        (**self).save(open)
    }
}
