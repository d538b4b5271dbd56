//! # Landing Page Widgets
//!
//! Accordion, scroll-aware navbar, fade-in reveal and the mobile menu focus
//! trap. Each binds only when its markup is present.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent,
};

use wissen_core::navbar::CLASS_SCROLLED;
use wissen_core::reveal::{stagger_delay, CLASS_VISIBLE};
use wissen_core::{
    Accordion, FocusMove, FocusTrap, RevealConfig, RevealTracker, ScrollEffect, TrapKey, UiConfig,
};

use crate::dom::{
    focus, js_error, listen, listen_active, query, query_all, query_all_in, remove_attr,
    set_attr, set_bool_attr, set_class, window,
};

/// Elements that fade up as they scroll into view.
const SELECTOR_ANIMATED: &str =
    ".hero__column, .feature-grid__item, .support-grid__item, .pricing-card, .accordion__item";

/// Focusable entries inside the mobile menu.
const SELECTOR_MENU_FOCUSABLE: &str = "a[href]";

/// Listeners and observers torn down on unload.
pub struct LandingPage {
    scroll_listener: Option<EventListener>,
    observer: Option<IntersectionObserver>,
    reveal_callback: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
    tracker: Rc<RefCell<RevealTracker>>,
}

impl LandingPage {
    /// Removes the scroll listener and stops observing.
    pub fn teardown(&mut self) {
        self.scroll_listener = None;
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.reveal_callback = None;
        self.tracker.borrow_mut().disconnect();
        tracing::debug!("Landing widgets torn down");
    }
}

/// Mounts every landing widget whose markup exists.
pub fn mount(document: &Document, config: &UiConfig) -> Rc<RefCell<LandingPage>> {
    bind_accordion(document);
    bind_mobile_menu(document);

    assign_animations(document, config.reveal.stagger_ms);
    let tracker = Rc::new(RefCell::new(RevealTracker::new()));
    let (observer, reveal_callback) = bind_reveal(document, &config.reveal, &tracker);

    let page = Rc::new(RefCell::new(LandingPage {
        scroll_listener: bind_navbar(document, config.scroll_threshold),
        observer,
        reveal_callback,
        tracker,
    }));

    if let Some(window) = window() {
        let page = page.clone();
        listen(&window, "unload", move |_| {
            page.borrow_mut().teardown();
        });
    }

    page
}

fn bind_navbar(document: &Document, threshold: f64) -> Option<EventListener> {
    let navbar = query(document, ".navbar")?;
    let window = window()?;

    let mut effect = ScrollEffect::new(threshold);
    let scroll_window = window.clone();
    let mut update = move || {
        let y = scroll_window.scroll_y().unwrap_or(0.0);
        if let Some(scrolled) = effect.on_scroll(y) {
            set_class(&navbar, CLASS_SCROLLED, scrolled);
        }
    };
    update();

    Some(EventListener::new_with_options(
        &window,
        "scroll",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |_| update(),
    ))
}

fn bind_accordion(document: &Document) {
    let panels: Vec<(Element, Element)> = query_all(document, ".accordion__toggle")
        .into_iter()
        .filter_map(|toggle| {
            let content = toggle.parent_element()?.next_element_sibling()?;
            Some((toggle, content))
        })
        .collect();
    if panels.is_empty() {
        return;
    }

    let accordion = Rc::new(RefCell::new(Accordion::from_flags(
        panels.iter().map(|(_, content)| content.has_attribute("data-open")),
    )));
    let panels = Rc::new(panels);
    sync_accordion(&panels, &accordion.borrow());

    for index in 0..panels.len() {
        let accordion = accordion.clone();
        let toggle = panels[index].0.clone();
        let panels = panels.clone();
        listen(&toggle, "click", move |_| {
            let mut accordion = accordion.borrow_mut();
            accordion.toggle(index);
            sync_accordion(&panels, &accordion);
        });
    }

    tracing::debug!(panels = panels.len(), "Accordion bound");
}

fn sync_accordion(panels: &[(Element, Element)], accordion: &Accordion) {
    for (index, (toggle, content)) in panels.iter().enumerate() {
        let open = accordion.is_open(index);
        set_bool_attr(toggle, "aria-expanded", open);
        if open {
            set_attr(content, "data-open", "true");
        } else {
            remove_attr(content, "data-open");
        }
    }
}

fn assign_animations(document: &Document, stagger_ms: u32) {
    for (index, element) in query_all(document, SELECTOR_ANIMATED).iter().enumerate() {
        set_attr(element, "data-animate", "fade-up");
        if let Some(html) = element.dyn_ref::<HtmlElement>() {
            let delay = stagger_delay(index, stagger_ms);
            if let Err(e) = html.style().set_property("--stagger", &delay) {
                tracing::debug!(error = %js_error(&e), "Stagger delay not set");
            }
        }
    }
}

fn supports_intersection_observer() -> bool {
    window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

type RevealBinding = (
    Option<IntersectionObserver>,
    Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
);

fn bind_reveal(
    document: &Document,
    config: &RevealConfig,
    tracker: &Rc<RefCell<RevealTracker>>,
) -> RevealBinding {
    let elements = query_all(document, "[data-animate='fade-up']");
    if elements.is_empty() {
        return (None, None);
    }

    for (id, element) in elements.iter().enumerate() {
        set_attr(element, "data-reveal-id", &id.to_string());
        tracker.borrow_mut().observe(id);
    }

    let reveal_all = |elements: &[Element]| {
        for id in tracker.borrow_mut().reveal_all() {
            if let Some(element) = elements.get(id) {
                set_class(element, CLASS_VISIBLE, true);
            }
        }
    };

    if !supports_intersection_observer() {
        tracing::debug!("IntersectionObserver unsupported, revealing all");
        reveal_all(elements.as_slice());
        return (None, None);
    }

    let elements = Rc::new(elements);
    let callback = {
        let tracker = tracker.clone();
        let elements = elements.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let reports: Vec<(usize, bool)> = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        let id = entry.target().get_attribute("data-reveal-id")?.parse().ok()?;
                        Some((id, entry.is_intersecting()))
                    })
                    .collect();

                for id in tracker.borrow_mut().on_intersect(reports) {
                    if let Some(element) = elements.get(id) {
                        set_class(element, CLASS_VISIBLE, true);
                        observer.unobserve(element);
                    }
                }
            },
        )
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.threshold));
    init.set_root_margin(&config.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            for element in elements.iter() {
                observer.observe(element);
            }
            tracing::debug!(elements = elements.len(), "Reveal observer bound");
            (Some(observer), Some(callback))
        }
        Err(e) => {
            tracing::debug!(error = %js_error(&e), "IntersectionObserver failed, revealing all");
            reveal_all(elements.as_slice());
            (None, None)
        }
    }
}

fn bind_mobile_menu(document: &Document) {
    let (Some(menu), Some(trigger)) = (
        query(document, "[data-mobile-menu]"),
        query(document, "[data-mobile-menu-toggle]"),
    ) else {
        return;
    };

    let trap = Rc::new(RefCell::new(FocusTrap::new()));
    let menu = Rc::new(MobileMenu { menu, trigger });
    menu.sync(false);

    {
        let trap = trap.clone();
        let menu = menu.clone();
        let trigger = menu.trigger.clone();
        listen(&trigger, "click", move |_| {
            let target = trap.borrow_mut().toggle();
            menu.sync(trap.borrow().is_open());
            menu.move_focus(target);
        });
    }

    let active_document = document.clone();
    listen_active(document, "keydown", move |event| {
        let Some(ev) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if !trap.borrow().is_open() {
            return;
        }

        let links = menu.links();
        let focused = active_document
            .active_element()
            .and_then(|active| links.iter().position(|link| *link == active));
        let key = TrapKey::from_key(&ev.key(), ev.shift_key());
        let outcome = trap.borrow_mut().on_key(key, focused, links.len());

        if outcome.prevent_default {
            ev.prevent_default();
        }
        if outcome.closed {
            menu.sync(false);
        }
        menu.move_focus(outcome.focus);
    });
}

struct MobileMenu {
    menu: Element,
    trigger: Element,
}

impl MobileMenu {
    fn links(&self) -> Vec<Element> {
        query_all_in(&self.menu, SELECTOR_MENU_FOCUSABLE)
    }

    fn sync(&self, open: bool) {
        set_class(&self.menu, "is-open", open);
        set_bool_attr(&self.trigger, "aria-expanded", open);
    }

    fn move_focus(&self, target: Option<FocusMove>) {
        let element = match target {
            Some(FocusMove::First) => self.links().into_iter().next(),
            Some(FocusMove::Last) => self.links().into_iter().last(),
            Some(FocusMove::Trigger) => Some(self.trigger.clone()),
            None => None,
        };
        if let Some(element) = element {
            focus(&element);
        }
    }
}
