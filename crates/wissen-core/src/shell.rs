//! # Dashboard Shell
//!
//! The sidebar controller and the optional page router behind one handle.
//! Every event the page binds goes through here so the two stay in step.

use crate::router::{ClickIntent, HistoryState, Navigation, PageRouter, RenderOptions};
use crate::sidebar::SidebarController;
use crate::traits::{PageView, PreferenceStore, SidebarView, ViewportQuery};

/// Sidebar plus optional router.
pub struct DashboardShell<Q, S, V, P> {
    sidebar: SidebarController<Q, S, V>,
    router: Option<PageRouter<P>>,
}

impl<Q, S, V, P> DashboardShell<Q, S, V, P>
where
    Q: ViewportQuery,
    S: PreferenceStore,
    V: SidebarView,
    P: PageView,
{
    /// Creates a shell. Pass `None` for pages without in-place routing.
    pub fn new(sidebar: SidebarController<Q, S, V>, router: Option<PageRouter<P>>) -> Self {
        Self { sidebar, router }
    }

    /// The sidebar controller.
    pub fn sidebar(&self) -> &SidebarController<Q, S, V> {
        &self.sidebar
    }

    /// Mutable access to the sidebar controller.
    pub fn sidebar_mut(&mut self) -> &mut SidebarController<Q, S, V> {
        &mut self.sidebar
    }

    /// The router, when enabled.
    pub fn router(&self) -> Option<&PageRouter<P>> {
        self.router.as_ref()
    }

    /// Restores the sidebar and renders the initial page without touching
    /// history or the live region.
    pub fn start(&mut self, path: &str, body_page: Option<&str>) -> Option<Navigation> {
        self.sidebar.restore_on_load();

        let router = self.router.as_mut()?;
        let page = router.initial_page(path, body_page);
        let nav = router.render_page(
            &page,
            RenderOptions {
                push_state: false,
                href: None,
                announce: false,
            },
        )?;
        self.after_navigation();
        Some(nav)
    }

    /// Either toggle button was pressed.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    /// The overlay was clicked.
    pub fn on_overlay_click(&mut self) {
        self.sidebar.on_overlay_click();
    }

    /// Escape was pressed anywhere. Returns whether it was consumed.
    pub fn on_escape(&mut self) -> bool {
        self.sidebar.on_escape()
    }

    /// The narrow media query changed.
    pub fn on_breakpoint_change(&mut self, is_narrow: bool) {
        self.sidebar.on_breakpoint_change(is_narrow);
    }

    /// A navigation link was clicked. `Some` means the caller must prevent
    /// the default navigation.
    pub fn handle_link_click(
        &mut self,
        target: Option<&str>,
        href: Option<&str>,
        intent: ClickIntent,
    ) -> Option<Navigation> {
        let nav = self
            .router
            .as_mut()?
            .handle_link_click(target, href, intent)?;
        self.after_navigation();
        Some(nav)
    }

    /// Back or forward was pressed.
    pub fn on_popstate(
        &mut self,
        state: Option<&HistoryState>,
        path: &str,
        body_page: Option<&str>,
    ) -> Option<Navigation> {
        let nav = self.router.as_mut()?.on_popstate(state, path, body_page)?;
        self.after_navigation();
        Some(nav)
    }

    // A drawer left open over the new page would hide it.
    fn after_navigation(&mut self) {
        if self.sidebar.is_narrow() && self.sidebar.is_open() {
            self.sidebar.set_open(false, false);
        }
    }
}
