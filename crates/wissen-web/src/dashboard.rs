//! # Dashboard Bindings
//!
//! Builds the dashboard shell over the page's markup and wires browser
//! events to it. The shell lives for the page lifetime behind an
//! `Rc<RefCell<_>>` that each listener closes over.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::Reflect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, KeyboardEvent, MediaQueryListEvent, MouseEvent, PopStateEvent};

use wissen_core::sidebar::SidebarOptions;
use wissen_core::{
    ClickIntent, DashboardShell, HistoryState, MemoryStore, PageCatalog, PageRouter, PageView,
    PreferenceStore, SidebarController, UiConfig,
};

use crate::dom::{
    body_page, js_error, listen, listen_active, location_path, query, query_all, window,
};
use crate::icons::ensure_icons;
use crate::media::MediaViewport;
use crate::pages::{DomPageView, SELECTOR_PAGE_LINKS};
use crate::sidebar::DomSidebarView;
use crate::storage::LocalStore;

/// The concrete shell used in the browser.
pub type Shell = DashboardShell<MediaViewport, Box<dyn PreferenceStore>, DomSidebarView, DomPageView>;

/// Shared handle to the page's shell.
pub type SharedShell = Rc<RefCell<Shell>>;

/// Runs `f` against the shell unless another handler holds it.
fn with_shell<R>(shell: &SharedShell, f: impl FnOnce(&mut Shell) -> R) -> Option<R> {
    match shell.try_borrow_mut() {
        Ok(mut shell) => Some(f(&mut shell)),
        Err(_) => {
            tracing::warn!("Dashboard state busy, event dropped");
            None
        }
    }
}

/// Mounts the dashboard shell. Returns `None` on pages without sidebar
/// markup.
pub fn mount(document: &Document, config: &UiConfig) -> Option<SharedShell> {
    let sidebar_view = DomSidebarView::new(document);
    if !sidebar_view.is_present() {
        tracing::debug!("No sidebar markup, dashboard not mounted");
        return None;
    }

    let toggles: Vec<_> = sidebar_view.toggles().cloned().collect();
    let overlay = sidebar_view.overlay().cloned();

    let viewport = MediaViewport::new(config);
    let store: Box<dyn PreferenceStore> = if config.features.persistence {
        Box::new(LocalStore::open(config.storage_key.clone()))
    } else {
        Box::new(MemoryStore::new())
    };
    let sidebar = SidebarController::with_options(
        viewport.clone(),
        store,
        sidebar_view,
        SidebarOptions::from(config),
    );

    let page = body_page(document);
    let router = if config.features.page_router {
        if query(document, "[data-dynamic-main]").is_none() {
            tracing::debug!("No [data-dynamic-main], page panels will not be swapped");
        }
        Some(PageRouter::new(
            PageCatalog::dashboard(),
            config.title_prefix.clone(),
            DomPageView::new(document),
        ))
    } else {
        if let Some(page) = &page {
            DomPageView::new(document).highlight_link(page);
        }
        None
    };

    let shell = Rc::new(RefCell::new(DashboardShell::new(sidebar, router)));

    {
        let mut shell = shell.borrow_mut();
        shell.start(&location_path(), page.as_deref());
        ensure_icons();
        let sidebar = shell.sidebar_mut();
        sidebar.view_mut().invalidate_icons();
        sidebar.render();
    }

    for toggle in &toggles {
        let shell = shell.clone();
        listen(toggle, "click", move |_| {
            with_shell(&shell, |s| s.toggle_sidebar());
        });
    }

    if let Some(overlay) = overlay.filter(|_| config.features.overlay) {
        let shell = shell.clone();
        listen(&overlay, "click", move |_| {
            with_shell(&shell, |s| s.on_overlay_click());
        });
    }

    {
        let shell = shell.clone();
        listen(document, "keydown", move |event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|ev| ev.key() == "Escape");
            if escape {
                with_shell(&shell, |s| s.on_escape());
            }
        });
    }

    bind_breakpoint(&viewport, &shell);

    if config.features.page_router {
        bind_history(document, &shell);
        bind_links(document, &shell);
    }

    tracing::info!(
        open = shell.borrow().sidebar().is_open(),
        router = config.features.page_router,
        "Dashboard mounted"
    );
    Some(shell)
}

fn bind_breakpoint(viewport: &MediaViewport, shell: &SharedShell) {
    let Some(list) = viewport.list() else {
        return;
    };

    if Reflect::has(list, &JsValue::from_str("addEventListener")).unwrap_or(false) {
        let shell = shell.clone();
        EventListener::new(list, "change", move |event| {
            if let Some(ev) = event.dyn_ref::<MediaQueryListEvent>() {
                with_shell(&shell, |s| s.on_breakpoint_change(ev.matches()));
            }
        })
        .forget();
        return;
    }

    // Older Safari only has the deprecated addListener.
    tracing::debug!("Falling back to MediaQueryList.addListener");
    let shell = shell.clone();
    let on_change = Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |ev: MediaQueryListEvent| {
        with_shell(&shell, |s| s.on_breakpoint_change(ev.matches()));
    });
    if let Err(e) = list.add_listener_with_opt_callback(Some(on_change.as_ref().unchecked_ref())) {
        tracing::warn!(error = %js_error(&e), "Breakpoint changes will not be tracked");
    }
    on_change.forget();
}

fn bind_history(document: &Document, shell: &SharedShell) {
    let Some(window) = window() else {
        return;
    };

    let shell = shell.clone();
    let document = document.clone();
    listen(&window, "popstate", move |event| {
        let state = event
            .dyn_ref::<PopStateEvent>()
            .and_then(|ev| serde_wasm_bindgen::from_value::<HistoryState>(ev.state()).ok());
        let page = body_page(&document);
        with_shell(&shell, |s| {
            s.on_popstate(state.as_ref(), &location_path(), page.as_deref())
        });
    });
}

fn bind_links(document: &Document, shell: &SharedShell) {
    for link in query_all(document, SELECTOR_PAGE_LINKS) {
        let shell = shell.clone();
        let target = link.clone();
        listen_active(&link, "click", move |event| {
            let Some(ev) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let page = target.get_attribute("data-page-target");
            let href = target.get_attribute("href");
            let intent = ClickIntent {
                button: ev.button(),
                meta: ev.meta_key(),
                ctrl: ev.ctrl_key(),
                shift: ev.shift_key(),
                alt: ev.alt_key(),
                default_prevented: ev.default_prevented(),
            };

            let handled = with_shell(&shell, |s| {
                s.handle_link_click(page.as_deref(), href.as_deref(), intent)
                    .is_some()
            })
            .unwrap_or(false);

            if handled {
                ev.prevent_default();
            }
        });
    }
}
