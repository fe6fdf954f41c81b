//! WASM bootstrap for the domglue behaviors.
//!
//! This module is the page-facing surface: selector-based exports that
//! page JavaScript calls once at load time to attach behaviors to
//! existing markup. All behavior lives in the `domglue` crate; this
//! crate only resolves selectors, parses the JSON options object, and
//! installs the panic hook.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use domglue::{PanelOptions, PopupController, menu, nav, panel, placeholder, prioritize, scroll};

/// Initialize panic reporting to the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn select(selector: &str) -> Result<Vec<Element>, JsValue> {
    let list = document()?.query_selector_all(selector)?;
    Ok(domglue::dom::elements(list))
}

fn html_elements(elements: Vec<Element>) -> Vec<HtmlElement> {
    elements
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Attach panel behavior to every element matching `selector`.
///
/// # Arguments
/// * `selector` - CSS selector for the panel elements
/// * `options_json` - JSON options object (camelCase keys as in
///   `PanelOptions`); empty or malformed input falls back to defaults
///
/// # Returns
/// Number of panels attached (0 for an empty selection), or an error
/// for a syntactically invalid selector
#[wasm_bindgen]
pub fn attach_panels(selector: &str, options_json: &str) -> Result<u32, JsValue> {
    let options = PanelOptions::from_json(options_json);
    let handle = panel::attach_all(html_elements(select(selector)?), &options);
    Ok(handle.len() as u32)
}

/// Apply the placeholder polyfill to every form or container matching
/// `selector`. No-op on engines with native placeholder support.
///
/// # Returns
/// Number of roots processed, or an error for an invalid selector
#[wasm_bindgen]
pub fn apply_placeholder_polyfill(selector: &str) -> Result<u32, JsValue> {
    let roots = select(selector)?;
    let count = roots.len() as u32;
    for root in &roots {
        placeholder::apply(root);
    }
    Ok(count)
}

/// Move every element matching `selector` to the front of its parent
/// (`condition` true) or back to its remembered position
/// (`condition` false).
#[wasm_bindgen]
pub fn prioritize_selection(selector: &str, condition: bool) -> Result<(), JsValue> {
    prioritize(&select(selector)?, condition);
    Ok(())
}

/// Wire the hamburger toggle: `button_selector` for the clickable
/// icon, `bar_selector` for its line elements, `menu_selector` for the
/// container receiving the open-state class.
///
/// # Returns
/// `true` if the button and menu were found and bound, `false` for an
/// inert no-op
#[wasm_bindgen]
pub fn attach_menu_toggle(
    button_selector: &str,
    bar_selector: &str,
    menu_selector: &str,
) -> Result<bool, JsValue> {
    let doc = document()?;
    let button = doc
        .query_selector(button_selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    let menu = doc.query_selector(menu_selector)?;
    let (Some(button), Some(menu)) = (button, menu) else {
        return Ok(false);
    };
    let bars = select(bar_selector)?;
    menu::attach(&button, bars, menu);
    Ok(true)
}

/// Wire the scroll-control pair: a to-top control revealed once the
/// page is scrolled, and an optional to-bottom control.
///
/// # Returns
/// `true` if the to-top control was found and bound
#[wasm_bindgen]
pub fn attach_scroll_controls(
    to_top_selector: &str,
    to_bottom_selector: Option<String>,
) -> Result<bool, JsValue> {
    let doc = document()?;
    let Some(to_top) = doc
        .query_selector(to_top_selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(false);
    };
    let to_bottom = match to_bottom_selector.as_deref() {
        Some(selector) => doc
            .query_selector(selector)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok()),
        None => None,
    };
    scroll::attach(to_top, to_bottom);
    Ok(true)
}

/// Attach the mouse-position-triggered popup to the element with the
/// given id.
///
/// # Returns
/// `true` if the element was found and bound
#[wasm_bindgen]
pub fn attach_popup(id: &str) -> bool {
    let Some(popup) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    let _ = PopupController::attach(popup);
    true
}

/// Flatten the first nav matching `selector` into indented link-list
/// markup, ready to inject into a panel.
///
/// # Returns
/// The markup, empty when nothing matches, or an error for an invalid
/// selector
#[wasm_bindgen]
pub fn nav_list_html(selector: &str) -> Result<String, JsValue> {
    match document()?.query_selector(selector)? {
        Some(nav_el) => Ok(nav::nav_list(&nav_el)),
        None => Ok(String::new()),
    }
}
