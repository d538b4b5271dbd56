//! DOM rendering for the page router.

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlElement};

use wissen_core::{HistoryState, PagePanel, PageView, UiError, UiResult};

use crate::dom::{focus, js_error, query, query_all, remove_attr, set_attr, set_class, window};

/// Links that switch pages.
pub const SELECTOR_PAGE_LINKS: &str = "[data-page-target]";

/// Page markup the router writes to. Every part is optional.
pub struct DomPageView {
    document: Document,
    body: Option<HtmlElement>,
    main: Option<Element>,
    header_title: Option<Element>,
    header_subtitle: Option<Element>,
    announcer: Option<Element>,
    // Dropping the handle cancels a pending announcement.
    announcement: Option<AnimationFrame>,
}

impl DomPageView {
    /// Looks up the page markup.
    pub fn new(document: &Document) -> Self {
        Self {
            document: document.clone(),
            body: document.body(),
            main: query(document, "[data-dynamic-main]"),
            header_title: query(document, "[data-header-title]"),
            header_subtitle: query(document, "[data-header-subtitle]"),
            announcer: query(document, "[data-page-announcer]"),
            announcement: None,
        }
    }

    fn create(&self, tag: &str) -> UiResult<Element> {
        self.document
            .create_element(tag)
            .map_err(|e| {
                UiError::DomOperation(format!("createElement <{tag}>: {}", js_error(&e)))
            })
    }

    fn build_panel(&self, panel: &PagePanel) -> UiResult<Element> {
        let section = self.create("section")?;
        section.set_class_name("content-section page-panel");
        set_attr(&section, "aria-labelledby", &panel.heading_id);

        let heading_wrapper = self.create("header")?;
        heading_wrapper.set_class_name("panel-heading");
        let heading = self.create("h2")?;
        heading.set_id(&panel.heading_id);
        heading.set_text_content(Some(&panel.heading));
        append(&heading_wrapper, &heading)?;

        let supporting = self.create("p")?;
        supporting.set_class_name("page-supporting-copy");
        supporting.set_text_content(Some(&panel.description));

        let body = self.create("div")?;
        body.set_class_name("panel-body");
        let placeholder = self.create("p")?;
        placeholder.set_class_name("page-placeholder");
        placeholder.set_text_content(Some(&panel.placeholder));
        append(&body, &placeholder)?;

        if let Some(embed) = &panel.embed {
            let surface = self.create("div")?;
            surface.set_class_name("embed-surface");
            set_attr(&surface, "role", "group");
            set_attr(&surface, "aria-label", &embed.label);
            set_attr(&surface, "data-embed-target", &embed.target);

            let hint = self.create("p")?;
            hint.set_class_name("embed-hint");
            hint.set_text_content(Some(&embed.hint));
            append(&surface, &hint)?;
            append(&body, &surface)?;
        }

        append(&section, &heading_wrapper)?;
        append(&section, &supporting)?;
        append(&section, &body)?;
        Ok(section)
    }
}

fn append(parent: &Element, child: &Element) -> UiResult<()> {
    parent
        .append_child(child)
        .map(|_| ())
        .map_err(|e| UiError::DomOperation(format!("appendChild: {}", js_error(&e))))
}

/// Focuses a panel for screen readers; the temporary tabindex goes away on
/// the first blur.
fn focus_panel(panel: &Element) {
    set_attr(panel, "tabindex", "-1");
    focus(panel);

    let target = panel.clone();
    EventListener::once(panel, "blur", move |_| remove_attr(&target, "tabindex")).forget();
}

impl PageView for DomPageView {
    fn set_current_page(&mut self, page: &str) {
        if let Some(body) = &self.body {
            set_attr(body, "data-page", page);
        }
    }

    fn set_header(&mut self, title: &str, subtitle: &str) {
        if let Some(el) = &self.header_title {
            el.set_text_content(Some(title));
        }
        if let Some(el) = &self.header_subtitle {
            el.set_text_content(Some(subtitle));
        }
    }

    fn mount_panel(&mut self, panel: &PagePanel) {
        let Some(main) = &self.main else {
            return;
        };
        main.set_inner_html("");
        match self.build_panel(panel) {
            Ok(section) => {
                if let Err(e) = append(main, &section) {
                    tracing::warn!(error = %e, page = %panel.page, "Panel not mounted");
                    return;
                }
                focus_panel(&section);
            }
            Err(e) => tracing::warn!(error = %e, page = %panel.page, "Panel not built"),
        }
    }

    fn highlight_link(&mut self, page: &str) {
        for link in query_all(&self.document, ".sidebar-link, .profile-link") {
            set_class(&link, "active", false);
            remove_attr(&link, "aria-current");
        }

        let active = query(
            &self.document,
            &format!(".sidebar-link[data-page-target=\"{page}\"]"),
        )
        .or_else(|| {
            query(
                &self.document,
                &format!(".profile-link[data-page-target=\"{page}\"]"),
            )
        });
        if let Some(link) = active {
            set_class(&link, "active", true);
            set_attr(&link, "aria-current", "page");
        }
    }

    fn set_document_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn announce(&mut self, message: &str) {
        let Some(announcer) = self.announcer.clone() else {
            return;
        };
        let message = message.to_string();
        self.announcement = Some(request_animation_frame(move |_| {
            announcer.set_text_content(Some(&message));
        }));
    }

    fn link_href(&self, page: &str) -> Option<String> {
        query(&self.document, &format!("[data-page-target=\"{page}\"]"))
            .and_then(|link| link.get_attribute("href"))
    }

    fn push_history(&mut self, state: &HistoryState, title: &str, href: &str) -> UiResult<()> {
        let history = window()
            .ok_or_else(|| UiError::HistoryBlocked("no window".into()))?
            .history()
            .map_err(|e| UiError::HistoryBlocked(js_error(&e)))?;
        let state: JsValue = serde_wasm_bindgen::to_value(state)
            .map_err(|e| UiError::HistoryBlocked(e.to_string()))?;
        history
            .push_state_with_url(&state, title, Some(href))
            .map_err(|e| UiError::HistoryBlocked(js_error(&e)))
    }
}
