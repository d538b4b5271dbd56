//! Lucide icon rendering.
//!
//! The icon library is an optional page script. When it or a glyph is
//! missing the slot keeps whatever markup it already had.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use wissen_core::{UiError, UiResult};

use crate::dom::{js_error, window};

fn lucide() -> Option<Object> {
    let window = window()?;
    Reflect::get(&window, &JsValue::from_str("lucide"))
        .ok()
        .filter(|v| v.is_object())
        .map(|v| v.unchecked_into::<Object>())
}

/// Runs `lucide.createIcons()` for any `data-lucide` markup on the page.
pub fn ensure_icons() {
    let Some(lucide) = lucide() else {
        return;
    };
    let create = Reflect::get(&lucide, &JsValue::from_str("createIcons"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());
    if let Some(create) = create {
        if let Err(e) = create.call0(&lucide) {
            tracing::debug!(error = %js_error(&e), "createIcons failed");
        }
    }
}

/// Replaces the contents of `slot` with the SVG for `name`.
///
/// # Errors
///
/// Returns [`UiError::MissingIcon`] when the library or the glyph is absent.
pub fn render_icon(slot: &Element, name: &str) -> UiResult<()> {
    let missing = || UiError::MissingIcon(name.to_string());

    let icons = lucide()
        .and_then(|l| Reflect::get(&l, &JsValue::from_str("icons")).ok())
        .filter(|v| v.is_object())
        .ok_or_else(missing)?;
    let icon = Reflect::get(&icons, &JsValue::from_str(name))
        .ok()
        .filter(|v| v.is_object())
        .ok_or_else(missing)?;
    let to_svg = Reflect::get(&icon, &JsValue::from_str("toSvg"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(missing)?;

    let attrs = Object::new();
    Reflect::set(&attrs, &"aria-hidden".into(), &"true".into())
        .and_then(|_| Reflect::set(&attrs, &"focusable".into(), &"false".into()))
        .map_err(|e| UiError::MissingIcon(js_error(&e)))?;

    let svg = to_svg
        .call1(&icon, &attrs)
        .map_err(|e| UiError::MissingIcon(js_error(&e)))?
        .as_string()
        .ok_or_else(missing)?;

    slot.set_inner_html(&svg);
    Ok(())
}
