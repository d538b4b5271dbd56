//! DOM rendering for the sidebar controller.

use web_sys::{Document, Element, HtmlElement};

use wissen_core::sidebar::CLASS_OVERLAY_VISIBLE;
use wissen_core::{Icon, SidebarFrame, SidebarView};

use crate::dom::{query, query_in, set_bool_attr, set_class};
use crate::icons::render_icon;

/// Overlay behind the drawer on narrow viewports.
pub const SELECTOR_OVERLAY: &str = "[data-sidebar-overlay]";
/// Toggle button shown on wide viewports.
pub const SELECTOR_DESKTOP_TOGGLE: &str = "[data-sidebar-toggle=\"desktop\"]";
/// Toggle button shown on narrow viewports.
pub const SELECTOR_MOBILE_TOGGLE: &str = "[data-sidebar-toggle=\"mobile\"]";

/// Sidebar markup the controller writes to. Every part is optional.
pub struct DomSidebarView {
    body: Option<HtmlElement>,
    overlay: Option<Element>,
    desktop_toggle: Option<Element>,
    mobile_toggle: Option<Element>,
    desktop_icon: Option<Element>,
    mobile_icon: Option<Element>,
    last_icons: Option<(Icon, Icon)>,
}

impl DomSidebarView {
    /// Looks up the sidebar markup.
    pub fn new(document: &Document) -> Self {
        let desktop_toggle = query(document, SELECTOR_DESKTOP_TOGGLE);
        let mobile_toggle = query(document, SELECTOR_MOBILE_TOGGLE);
        let desktop_icon = desktop_toggle
            .as_ref()
            .and_then(|t| query_in(t, "[data-icon-slot=\"desktop\"]"));
        let mobile_icon = mobile_toggle
            .as_ref()
            .and_then(|t| query_in(t, "[data-icon-slot=\"mobile\"]"));

        Self {
            body: document.body(),
            overlay: query(document, SELECTOR_OVERLAY),
            desktop_toggle,
            mobile_toggle,
            desktop_icon,
            mobile_icon,
            last_icons: None,
        }
    }

    /// Whether the page carries any sidebar markup at all.
    pub fn is_present(&self) -> bool {
        self.overlay.is_some() || self.desktop_toggle.is_some() || self.mobile_toggle.is_some()
    }

    /// Both toggle buttons that exist.
    pub fn toggles(&self) -> impl Iterator<Item = &Element> {
        self.desktop_toggle.iter().chain(self.mobile_toggle.iter())
    }

    /// The overlay, if present.
    pub fn overlay(&self) -> Option<&Element> {
        self.overlay.as_ref()
    }

    /// Drops the cached glyphs so the next frame redraws them, for when the
    /// icon library finishes loading after the first render.
    pub fn invalidate_icons(&mut self) {
        self.last_icons = None;
    }

    fn render_icons(&mut self, frame: &SidebarFrame) {
        let icons = (frame.desktop_icon, frame.mobile_icon);
        if self.last_icons == Some(icons) {
            return;
        }

        let mut complete = true;
        for (slot, icon) in [
            (&self.desktop_icon, frame.desktop_icon),
            (&self.mobile_icon, frame.mobile_icon),
        ] {
            let Some(slot) = slot else {
                continue;
            };
            if let Err(e) = render_icon(slot, icon.lucide_name()) {
                tracing::debug!(error = %e, "Icon render skipped");
                complete = false;
            }
        }

        self.last_icons = complete.then_some(icons);
    }
}

impl SidebarView for DomSidebarView {
    fn apply_open_state(&mut self, frame: &SidebarFrame) {
        if let Some(body) = &self.body {
            let (add, remove) = frame.body_classes();
            for class in add {
                set_class(body, class, true);
            }
            for class in remove {
                set_class(body, class, false);
            }
        }

        if let Some(overlay) = &self.overlay {
            set_class(overlay, CLASS_OVERLAY_VISIBLE, frame.overlay_visible);
        }

        self.render_icons(frame);

        for toggle in self.toggles() {
            set_bool_attr(toggle, "aria-expanded", frame.aria_expanded);
        }
    }
}
