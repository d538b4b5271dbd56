//! # Sidebar Controller
//!
//! Owns the "sidebar open" flag for the page lifetime, mirrors it into the
//! document through a [`SidebarView`], and persists the wide-viewport
//! preference through a [`PreferenceStore`].

use crate::config::UiConfig;
use crate::traits::{PreferenceStore, SidebarView, ViewportQuery};

/// Body class present while the sidebar is open.
pub const CLASS_OPEN: &str = "sidebar-open";
/// Body class present while the sidebar is closed.
pub const CLASS_COLLAPSED: &str = "sidebar-collapsed";
/// Body class that locks page scrolling.
pub const CLASS_NO_SCROLL: &str = "no-scroll";
/// Overlay class that makes it visible.
pub const CLASS_OVERLAY_VISIBLE: &str = "visible";

/// Icon glyphs used by the two toggle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Desktop control, sidebar open.
    PanelLeftClose,
    /// Desktop control, sidebar closed.
    PanelLeftOpen,
    /// Mobile control, sidebar open.
    Close,
    /// Mobile control, sidebar closed.
    Menu,
}

impl Icon {
    /// Name of the glyph in the lucide icon set.
    #[must_use]
    pub fn lucide_name(self) -> &'static str {
        match self {
            Self::PanelLeftClose => "panel-left-close",
            Self::PanelLeftOpen => "panel-left-open",
            Self::Close => "x",
            Self::Menu => "menu",
        }
    }
}

/// The transient flag the controller owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    /// Whether the sidebar is open.
    pub is_open: bool,
}

/// Everything a view needs to draw one sidebar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarFrame {
    /// Sidebar open.
    pub open: bool,
    /// Viewport was narrow when the frame was built.
    pub narrow: bool,
    /// Glyph for the desktop toggle.
    pub desktop_icon: Icon,
    /// Glyph for the mobile toggle.
    pub mobile_icon: Icon,
    /// Value for `aria-expanded` on both toggles.
    pub aria_expanded: bool,
    /// Whether the modal overlay is shown.
    pub overlay_visible: bool,
    /// Whether the body scroll lock is on.
    pub scroll_locked: bool,
}

impl SidebarFrame {
    /// Computes the frame for a state and viewport class.
    #[must_use]
    pub fn compute(open: bool, narrow: bool, overlay_enabled: bool) -> Self {
        let modal = narrow && open;
        Self {
            open,
            narrow,
            desktop_icon: if open {
                Icon::PanelLeftClose
            } else {
                Icon::PanelLeftOpen
            },
            mobile_icon: if open { Icon::Close } else { Icon::Menu },
            aria_expanded: open,
            overlay_visible: overlay_enabled && modal,
            scroll_locked: modal,
        }
    }

    /// Body classes to add and to remove, in that order.
    #[must_use]
    pub fn body_classes(&self) -> (Vec<&'static str>, Vec<&'static str>) {
        let mut add = Vec::with_capacity(2);
        let mut remove = Vec::with_capacity(2);

        if self.open {
            add.push(CLASS_OPEN);
            remove.push(CLASS_COLLAPSED);
        } else {
            add.push(CLASS_COLLAPSED);
            remove.push(CLASS_OPEN);
        }

        if self.scroll_locked {
            add.push(CLASS_NO_SCROLL);
        } else {
            remove.push(CLASS_NO_SCROLL);
        }

        (add, remove)
    }
}

/// Sidebar behavior knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarOptions {
    /// State on wide viewports when nothing is stored.
    pub default_open: bool,
    /// Whether the overlay is part of this page.
    pub overlay: bool,
}

impl Default for SidebarOptions {
    fn default() -> Self {
        Self {
            default_open: true,
            overlay: true,
        }
    }
}

impl From<&UiConfig> for SidebarOptions {
    fn from(config: &UiConfig) -> Self {
        Self {
            default_open: config.default_open,
            overlay: config.features.overlay,
        }
    }
}

/// Responsive sidebar state machine.
///
/// # Examples
///
/// ```
/// use wissen_core::{Breakpoint, FixedViewport, MemoryStore, SidebarController, SidebarFrame, SidebarView};
///
/// #[derive(Default)]
/// struct Frames(Vec<SidebarFrame>);
///
/// impl SidebarView for Frames {
///     fn apply_open_state(&mut self, frame: &SidebarFrame) {
///         self.0.push(*frame);
///     }
/// }
///
/// let viewport = FixedViewport::new(Breakpoint::new(960), 1200.0);
/// let mut sidebar = SidebarController::new(viewport, MemoryStore::new(), Frames::default());
/// sidebar.restore_on_load();
/// assert!(sidebar.is_open());
///
/// sidebar.toggle();
/// assert!(!sidebar.is_open());
/// assert_eq!(sidebar.store().raw(), Some("false"));
/// ```
pub struct SidebarController<Q, S, V> {
    state: SidebarState,
    viewport: Q,
    store: S,
    view: V,
    options: SidebarOptions,
}

impl<Q, S, V> SidebarController<Q, S, V>
where
    Q: ViewportQuery,
    S: PreferenceStore,
    V: SidebarView,
{
    /// Creates a controller with default options.
    ///
    /// The initial flag is "open unless narrow"; nothing is rendered until
    /// [`restore_on_load`](Self::restore_on_load) runs.
    pub fn new(viewport: Q, store: S, view: V) -> Self {
        Self::with_options(viewport, store, view, SidebarOptions::default())
    }

    /// Creates a controller with explicit options.
    pub fn with_options(viewport: Q, store: S, view: V, options: SidebarOptions) -> Self {
        let is_open = !viewport.is_narrow();
        Self {
            state: SidebarState { is_open },
            viewport,
            store,
            view,
            options,
        }
    }

    /// Whether the sidebar is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Current state snapshot.
    #[must_use]
    pub fn state(&self) -> SidebarState {
        self.state
    }

    /// Whether the viewport is currently narrow.
    #[must_use]
    pub fn is_narrow(&self) -> bool {
        self.viewport.is_narrow()
    }

    /// The preference store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Mutable access to the view.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Flips the flag, persists and renders.
    pub fn toggle(&mut self) {
        self.set_open(!self.state.is_open, true);
    }

    /// Sets the flag and renders.
    ///
    /// With `persist`, narrow viewports always store `false` so the stored
    /// value only ever reflects the wide-viewport choice.
    pub fn set_open(&mut self, open: bool, persist: bool) {
        self.state.is_open = open;
        self.render();

        if persist {
            let stored = if self.viewport.is_narrow() {
                false
            } else {
                open
            };
            if let Err(e) = self.store.save(stored) {
                tracing::debug!(error = %e, "Sidebar preference not persisted");
            }
        }

        tracing::trace!(open, persist, "Sidebar state set");
    }

    /// Pushes the current flag to the view.
    pub fn render(&mut self) {
        let frame =
            SidebarFrame::compute(self.state.is_open, self.viewport.is_narrow(), self.options.overlay);
        self.view.apply_open_state(&frame);
    }

    /// Initial state on page load: closed when narrow, otherwise the stored
    /// preference or the configured default. Persists the result.
    pub fn restore_on_load(&mut self) {
        let narrow = self.viewport.is_narrow();
        let open = self.derive(narrow);
        tracing::debug!(open, narrow, "Restoring sidebar state");
        self.set_open(open, true);
    }

    /// Re-derives state after the breakpoint flips, without persisting.
    pub fn on_breakpoint_change(&mut self, is_narrow: bool) {
        let open = self.derive(is_narrow);
        tracing::debug!(open, narrow = is_narrow, "Breakpoint changed");
        self.set_open(open, false);
    }

    /// Escape closes the sidebar when it is open as a modal drawer.
    ///
    /// Returns whether the key was consumed.
    pub fn on_escape(&mut self) -> bool {
        if self.state.is_open && self.viewport.is_narrow() {
            self.set_open(false, true);
            true
        } else {
            false
        }
    }

    /// Clicking the overlay closes the sidebar.
    pub fn on_overlay_click(&mut self) {
        self.set_open(false, true);
    }

    fn derive(&self, narrow: bool) -> bool {
        if narrow {
            return false;
        }
        self.stored_preference().unwrap_or(self.options.default_open)
    }

    fn stored_preference(&self) -> Option<bool> {
        match self.store.load() {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(error = %e, "Sidebar preference unavailable");
                None
            }
        }
    }
}
