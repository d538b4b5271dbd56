//! # Page Router
//!
//! In-place page switching for the dashboard. A recognized navigation link
//! swaps the content panel, header, title and active link instead of
//! loading a new document, and records the switch in browser history.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::pages::{PageCatalog, PageConfig, DEFAULT_PAGE};
use crate::traits::PageView;

/// Matches the page key in a `/path/<key>.html` URL.
static PAGE_FILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\w-]+)\.html$").expect("Invalid regex"));

/// State object stored with each history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    /// Page key.
    pub page: String,
}

/// Analytics embed placeholder inside a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSurface {
    /// `aria-label` for the group.
    pub label: String,
    /// `data-embed-target` value.
    pub target: String,
    /// Hint paragraph text.
    pub hint: String,
}

/// Content panel for one page, independent of any DOM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePanel {
    /// Page key.
    pub page: String,
    /// Id of the heading, referenced by `aria-labelledby`.
    pub heading_id: String,
    /// Heading text.
    pub heading: String,
    /// Supporting copy.
    pub description: String,
    /// Placeholder line.
    pub placeholder: String,
    /// Embed surface, when the page allows one.
    pub embed: Option<EmbedSurface>,
}

impl PagePanel {
    /// Builds the panel model for `key`.
    #[must_use]
    pub fn build(key: &str, config: &PageConfig) -> Self {
        Self {
            page: key.to_string(),
            heading_id: format!("page-panel-heading-{key}"),
            heading: format!("{} workspace", config.title),
            description: config.description.clone(),
            placeholder: config.placeholder.clone(),
            embed: config.embed.as_ref().map(|slot| EmbedSurface {
                label: format!("{} analytics embed holder", config.title),
                target: key.to_string(),
                hint: slot.hint().to_string(),
            }),
        }
    }
}

/// Pointer state of a link click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickIntent {
    /// Mouse button, 0 for primary.
    pub button: i16,
    /// Meta key held.
    pub meta: bool,
    /// Control key held.
    pub ctrl: bool,
    /// Shift key held.
    pub shift: bool,
    /// Alt key held.
    pub alt: bool,
    /// Another handler already called `preventDefault`.
    pub default_prevented: bool,
}

impl ClickIntent {
    /// A plain primary-button click.
    #[must_use]
    pub fn primary() -> Self {
        Self::default()
    }

    /// Whether the click should become an in-page swap.
    ///
    /// Modified clicks and non-primary buttons keep the browser's own
    /// behavior (new tab, new window, download).
    #[must_use]
    pub fn should_intercept(&self) -> bool {
        !self.default_prevented
            && self.button == 0
            && !(self.meta || self.ctrl || self.shift || self.alt)
    }
}

/// How [`PageRouter::render_page`] should treat history and announcements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions<'a> {
    /// Push a history entry.
    pub push_state: bool,
    /// Href for the entry; derived from the page when absent.
    pub href: Option<&'a str>,
    /// Announce the page in the live region.
    pub announce: bool,
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        Self {
            push_state: false,
            href: None,
            announce: true,
        }
    }
}

/// Outcome of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    /// Page key as requested.
    pub page: String,
    /// Title of the page actually shown.
    pub title: String,
    /// Whether a history entry was pushed.
    pub pushed: bool,
}

/// Returns the link href when it is non-blank, else `<key>.html`.
#[must_use]
pub fn derive_href(key: &str, link_href: Option<&str>) -> String {
    match link_href {
        Some(href) if !href.trim().is_empty() => href.to_string(),
        _ => format!("{key}.html"),
    }
}

/// Client-side page switcher.
pub struct PageRouter<V> {
    catalog: PageCatalog,
    title_prefix: String,
    current: Option<String>,
    view: V,
}

impl<V: PageView> PageRouter<V> {
    /// Creates a router over a catalog.
    pub fn new(catalog: PageCatalog, title_prefix: impl Into<String>, view: V) -> Self {
        Self {
            catalog,
            title_prefix: title_prefix.into(),
            current: None,
            view,
        }
    }

    /// The page catalog.
    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    /// Key of the page last rendered.
    #[must_use]
    pub fn current_page(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Document title for a page config.
    #[must_use]
    pub fn document_title(&self, config: &PageConfig) -> String {
        format!("{} | {}", self.title_prefix, config.title)
    }

    /// Page to show on load: the `<key>.html` path segment, then the body's
    /// `data-page`, then the default page. Only known keys are accepted.
    #[must_use]
    pub fn initial_page(&self, path: &str, body_page: Option<&str>) -> String {
        if let Some(key) = PAGE_FILE_REGEX
            .captures(path)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .filter(|key| self.catalog.contains(key))
        {
            return key.to_string();
        }

        if let Some(key) = body_page.filter(|key| self.catalog.contains(key)) {
            return key.to_string();
        }

        DEFAULT_PAGE.to_string()
    }

    /// Renders a page into the view.
    ///
    /// Unknown keys render the default page's content while keeping the
    /// requested key as the current page. Returns `None` only when the
    /// catalog is empty.
    pub fn render_page(&mut self, key: &str, options: RenderOptions<'_>) -> Option<Navigation> {
        let Some(config) = self.catalog.resolve(key).cloned() else {
            tracing::warn!(page = %key, "No pages configured, nothing to render");
            return None;
        };

        self.current = Some(key.to_string());

        self.view.set_current_page(key);
        self.view.set_header(&config.title, &config.subtitle);
        self.view.mount_panel(&PagePanel::build(key, &config));
        self.view.highlight_link(key);

        let title = self.document_title(&config);
        self.view.set_document_title(&title);

        if options.announce {
            self.view.announce(&format!("{} loaded", config.title));
        }

        let mut pushed = false;
        if options.push_state {
            let href = match options.href {
                Some(href) => derive_href(key, Some(href)),
                None => derive_href(key, self.view.link_href(key).as_deref()),
            };
            let state = HistoryState {
                page: key.to_string(),
            };
            match self.view.push_history(&state, &title, &href) {
                Ok(()) => pushed = true,
                Err(e) => tracing::debug!(error = %e, page = %key, "History entry not pushed"),
            }
        }

        tracing::debug!(page = %key, pushed, "Rendered page");

        Some(Navigation {
            page: key.to_string(),
            title: config.title,
            pushed,
        })
    }

    /// Handles a click on a `[data-page-target]` link.
    ///
    /// Returns `None` when the click is left to the browser: the target is
    /// missing or unknown, or the click is modified. Otherwise the caller
    /// must prevent the default navigation.
    pub fn handle_link_click(
        &mut self,
        target: Option<&str>,
        href: Option<&str>,
        intent: ClickIntent,
    ) -> Option<Navigation> {
        let target = target.filter(|t| self.catalog.contains(t))?;
        if !intent.should_intercept() {
            return None;
        }

        let target = target.to_string();
        self.render_page(
            &target,
            RenderOptions {
                push_state: true,
                href,
                announce: true,
            },
        )
    }

    /// Restores the page for a history entry after back or forward.
    pub fn on_popstate(
        &mut self,
        state: Option<&HistoryState>,
        path: &str,
        body_page: Option<&str>,
    ) -> Option<Navigation> {
        let page = state
            .map(|s| s.page.as_str())
            .filter(|page| self.catalog.contains(page))
            .map(str::to_string)
            .unwrap_or_else(|| self.initial_page(path, body_page));

        self.render_page(
            &page,
            RenderOptions {
                push_state: false,
                href: None,
                announce: false,
            },
        )
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{UiError, UiResult};

    /// Page view that records what it was asked to do.
    #[derive(Debug, Default)]
    pub struct RecordingPageView {
        pub current: Vec<String>,
        pub header: Option<(String, String)>,
        pub panels: Vec<PagePanel>,
        pub highlighted: Option<String>,
        pub title: Option<String>,
        pub announcements: Vec<String>,
        pub history: Vec<(HistoryState, String)>,
        pub links: Vec<(String, String)>,
        pub block_history: bool,
    }

    impl PageView for RecordingPageView {
        fn set_current_page(&mut self, page: &str) {
            self.current.push(page.to_string());
        }

        fn set_header(&mut self, title: &str, subtitle: &str) {
            self.header = Some((title.to_string(), subtitle.to_string()));
        }

        fn mount_panel(&mut self, panel: &PagePanel) {
            self.panels.push(panel.clone());
        }

        fn highlight_link(&mut self, page: &str) {
            self.highlighted = Some(page.to_string());
        }

        fn set_document_title(&mut self, title: &str) {
            self.title = Some(title.to_string());
        }

        fn announce(&mut self, message: &str) {
            self.announcements.push(message.to_string());
        }

        fn link_href(&self, page: &str) -> Option<String> {
            self.links
                .iter()
                .find(|(p, _)| p == page)
                .map(|(_, href)| href.clone())
        }

        fn push_history(&mut self, state: &HistoryState, _title: &str, href: &str) -> UiResult<()> {
            if self.block_history {
                return Err(UiError::HistoryBlocked("SecurityError".into()));
            }
            self.history.push((state.clone(), href.to_string()));
            Ok(())
        }
    }

    fn router() -> PageRouter<RecordingPageView> {
        PageRouter::new(
            PageCatalog::dashboard(),
            "Wissen Ecom",
            RecordingPageView::default(),
        )
    }

    #[test]
    fn test_panel_with_embed() {
        let catalog = PageCatalog::dashboard();
        let panel = PagePanel::build("inventory", catalog.get("inventory").unwrap());
        assert_eq!(panel.heading_id, "page-panel-heading-inventory");
        assert_eq!(panel.heading, "Inventory workspace");

        let embed = panel.embed.unwrap();
        assert_eq!(embed.label, "Inventory analytics embed holder");
        assert_eq!(embed.target, "inventory");
        assert!(embed.hint.contains("aged stock"));
    }

    #[test]
    fn test_panel_without_embed() {
        let catalog = PageCatalog::dashboard();
        let panel = PagePanel::build("profile", catalog.get("profile").unwrap());
        assert!(panel.embed.is_none());
        assert_eq!(panel.placeholder, "Welcome to Profile");
    }

    #[test]
    fn test_click_intent() {
        assert!(ClickIntent::primary().should_intercept());
        assert!(!ClickIntent {
            button: 1,
            ..ClickIntent::default()
        }
        .should_intercept());
        assert!(!ClickIntent {
            ctrl: true,
            ..ClickIntent::default()
        }
        .should_intercept());
        assert!(!ClickIntent {
            default_prevented: true,
            ..ClickIntent::default()
        }
        .should_intercept());
    }

    #[test]
    fn test_derive_href() {
        assert_eq!(derive_href("inventory", Some("/app/inventory")), "/app/inventory");
        assert_eq!(derive_href("inventory", Some("  ")), "inventory.html");
        assert_eq!(derive_href("inventory", None), "inventory.html");
    }

    #[test]
    fn test_initial_page() {
        let router = router();
        assert_eq!(router.initial_page("/pages/ad-spend.html", None), "ad-spend");
        assert_eq!(router.initial_page("/pages/unknown.html", Some("profile")), "profile");
        assert_eq!(router.initial_page("/", Some("nope")), "dashboard");
        assert_eq!(router.initial_page("", None), "dashboard");
    }

    #[test]
    fn test_render_page_updates_view() {
        let mut router = router();
        let nav = router
            .render_page("action-list", RenderOptions::default())
            .unwrap();

        assert_eq!(nav.title, "Action List");
        assert!(!nav.pushed);
        assert_eq!(router.current_page(), Some("action-list"));

        let view = router.view();
        assert_eq!(
            view.header,
            Some(("Action List".to_string(), "Execution queue".to_string()))
        );
        assert_eq!(view.title.as_deref(), Some("Wissen Ecom | Action List"));
        assert_eq!(view.announcements, vec!["Action List loaded".to_string()]);
        assert_eq!(view.highlighted.as_deref(), Some("action-list"));
        assert!(view.history.is_empty());
    }

    #[test]
    fn test_unknown_page_renders_dashboard_content() {
        let mut router = router();
        let nav = router.render_page("missing", RenderOptions::default()).unwrap();
        assert_eq!(nav.page, "missing");
        assert_eq!(nav.title, "Dashboard");
        assert_eq!(router.view().panels[0].heading_id, "page-panel-heading-missing");
    }

    #[test]
    fn test_every_render_records_current_page() {
        let mut router = router();
        router
            .handle_link_click(Some("inventory"), None, ClickIntent::primary())
            .unwrap();
        router.render_page("missing", RenderOptions::default()).unwrap();
        let state = HistoryState {
            page: "profile".into(),
        };
        router.on_popstate(Some(&state), "/", None).unwrap();

        assert_eq!(router.view().current, vec!["inventory", "missing", "profile"]);
        assert_eq!(router.current_page(), Some("profile"));
    }

    #[test]
    fn test_link_click_pushes_history() {
        let mut router = router();
        let nav = router
            .handle_link_click(Some("inventory"), Some("/inventory.html"), ClickIntent::primary())
            .unwrap();
        assert!(nav.pushed);
        assert_eq!(
            router.view().history,
            vec![(
                HistoryState {
                    page: "inventory".into()
                },
                "/inventory.html".to_string()
            )]
        );
    }

    #[test]
    fn test_link_click_derives_href_from_link() {
        let mut router = router();
        router.view.links.push(("campaigns".into(), "/c/campaigns".into()));
        router.render_page(
            "campaigns",
            RenderOptions {
                push_state: true,
                ..RenderOptions::default()
            },
        );
        assert_eq!(router.view().history[0].1, "/c/campaigns");
    }

    #[test]
    fn test_link_click_ignored_cases() {
        let mut router = router();
        assert!(router
            .handle_link_click(Some("nope"), None, ClickIntent::primary())
            .is_none());
        assert!(router
            .handle_link_click(None, None, ClickIntent::primary())
            .is_none());
        assert!(router
            .handle_link_click(
                Some("inventory"),
                None,
                ClickIntent {
                    meta: true,
                    ..ClickIntent::default()
                }
            )
            .is_none());
        assert!(router.view().panels.is_empty());
    }

    #[test]
    fn test_blocked_history_still_renders() {
        let mut router = router();
        router.view.block_history = true;
        let nav = router
            .handle_link_click(Some("profile"), None, ClickIntent::primary())
            .unwrap();
        assert!(!nav.pushed);
        assert_eq!(router.current_page(), Some("profile"));
    }

    #[test]
    fn test_popstate_prefers_state_then_path() {
        let mut router = router();
        let state = HistoryState {
            page: "campaigns".into(),
        };
        let nav = router.on_popstate(Some(&state), "/inventory.html", None).unwrap();
        assert_eq!(nav.page, "campaigns");

        let stale = HistoryState {
            page: "gone".into(),
        };
        let nav = router.on_popstate(Some(&stale), "/inventory.html", None).unwrap();
        assert_eq!(nav.page, "inventory");

        let nav = router.on_popstate(None, "/", None).unwrap();
        assert_eq!(nav.page, "dashboard");
        assert!(router.view().announcements.is_empty());
        assert!(router.view().history.is_empty());
    }

    #[test]
    fn test_history_state_serializes_as_object() {
        let json = serde_json::to_string(&HistoryState {
            page: "inventory".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"page":"inventory"}"#);
    }
}
