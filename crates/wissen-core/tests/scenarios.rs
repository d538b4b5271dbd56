//! Load and interaction scenarios for the dashboard shell.

use wissen_core::{
    Breakpoint, ClickIntent, DashboardShell, FixedViewport, HistoryState, MemoryStore,
    PageCatalog, PagePanel, PageRouter, PageView, RevealTracker, SidebarController, SidebarFrame,
    SidebarView, UiConfig, UiResult,
};
use wissen_core::sidebar::SidebarOptions;

#[derive(Default)]
struct Frames(Vec<SidebarFrame>);

impl SidebarView for Frames {
    fn apply_open_state(&mut self, frame: &SidebarFrame) {
        self.0.push(*frame);
    }
}

#[derive(Default)]
struct Pages {
    mounted: Vec<String>,
    pushed: Vec<String>,
}

impl PageView for Pages {
    fn set_current_page(&mut self, _page: &str) {}

    fn set_header(&mut self, _title: &str, _subtitle: &str) {}

    fn mount_panel(&mut self, panel: &PagePanel) {
        self.mounted.push(panel.page.clone());
    }

    fn highlight_link(&mut self, _page: &str) {}

    fn set_document_title(&mut self, _title: &str) {}

    fn announce(&mut self, _message: &str) {}

    fn link_href(&self, _page: &str) -> Option<String> {
        None
    }

    fn push_history(&mut self, state: &HistoryState, _title: &str, href: &str) -> UiResult<()> {
        assert_eq!(href, format!("{}.html", state.page));
        self.pushed.push(state.page.clone());
        Ok(())
    }
}

fn load(width: f64, store: MemoryStore) -> DashboardShell<FixedViewport, MemoryStore, Frames, Pages> {
    let config = UiConfig::default();
    let viewport = FixedViewport::new(Breakpoint::new(config.breakpoint_px), width);
    let sidebar = SidebarController::with_options(
        viewport,
        store,
        Frames::default(),
        SidebarOptions::from(&config),
    );
    let router = PageRouter::new(PageCatalog::dashboard(), config.title_prefix, Pages::default());
    let mut shell = DashboardShell::new(sidebar, Some(router));
    shell.start("/index.html", Some("dashboard"));
    shell
}

#[test]
fn test_wide_without_preference_starts_open() {
    let shell = load(1200.0, MemoryStore::new());
    assert!(shell.sidebar().is_open());
    assert!(!shell.sidebar().view().0.last().unwrap().overlay_visible);
}

#[test]
fn test_narrow_starts_closed_regardless_of_storage() {
    for stored in ["true", "false", "garbage"] {
        let shell = load(500.0, MemoryStore::with_raw(stored));
        assert!(!shell.sidebar().is_open(), "stored={stored}");
    }
    assert!(!load(500.0, MemoryStore::new()).sidebar().is_open());
}

#[test]
fn test_wide_with_stored_false_starts_closed() {
    let shell = load(1200.0, MemoryStore::with_raw("false"));
    assert!(!shell.sidebar().is_open());
}

#[test]
fn test_preference_survives_reload() {
    let mut shell = load(1200.0, MemoryStore::new());
    shell.toggle_sidebar();
    let store = shell.sidebar().store().clone();

    let reloaded = load(1200.0, store);
    assert!(!reloaded.sidebar().is_open());
}

#[test]
fn test_blocked_storage_is_session_only() {
    let mut shell = load(1200.0, MemoryStore::blocked());
    assert!(shell.sidebar().is_open());
    shell.toggle_sidebar();
    assert!(!shell.sidebar().is_open());
}

#[test]
fn test_mobile_navigation_flow() {
    let mut shell = load(500.0, MemoryStore::new());
    shell.toggle_sidebar();
    assert!(shell.sidebar().is_open());

    let nav = shell
        .handle_link_click(Some("ad-spend"), None, ClickIntent::primary())
        .unwrap();
    assert_eq!(nav.page, "ad-spend");
    assert!(!shell.sidebar().is_open());

    let pages = shell.router().unwrap().view();
    assert_eq!(pages.mounted, vec!["dashboard".to_string(), "ad-spend".to_string()]);
    assert_eq!(pages.pushed, vec!["ad-spend".to_string()]);
}

#[test]
fn test_fade_in_revealed_once() {
    let mut tracker = RevealTracker::new();
    tracker.observe(0);
    assert_eq!(tracker.on_intersect([(0, true)]), vec![0]);
    assert!(tracker.is_revealed(0));
    assert!(!tracker.observe(0));
    assert!(tracker.on_intersect([(0, false), (0, true)]).is_empty());
}
