//! Thin helper layer for repetitive DOM operations.
//!
//! Everything here is a small wrapper around `web-sys` so the behavior
//! modules don't repeat window/document plumbing, listener wiring, or
//! visibility toggling inline.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

/// Current window, if any.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current document, if any.
pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Bind an event listener for the life of the page.
///
/// The closure is leaked (`forget`), matching the never-unbound event
/// glue this crate replaces. Callers that need typed events cast inside
/// the handler with `dyn_ref`.
pub fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::<dyn FnMut(Event)>::new(handler);
    let _ = target.add_event_listener_with_callback(kind, cb.as_ref().unchecked_ref());
    cb.forget();
}

/// Run `f` once after `delay_ms` milliseconds.
///
/// Fire-and-forget: there is no cancellation handle, so callbacks must
/// be idempotent against whatever state they find when they fire.
pub fn defer(delay_ms: i32, f: impl FnOnce() + 'static) {
    let cb = Closure::once_into_js(f);
    if let Some(win) = window() {
        let _ = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
    }
}

/// Collect a `NodeList` into the elements it contains.
pub fn elements(list: NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            out.push(el);
        }
    }
    out
}

/// Query all matching elements under `root`. Empty on selector error.
pub fn select_all(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => elements(list),
        Err(_) => Vec::new(),
    }
}

/// The element an event originated on, if it is an element at all.
pub fn event_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Nearest ancestor-or-self of the event target matching `selector`.
pub fn event_closest(event: &Event, selector: &str) -> Option<Element> {
    event_element(event)?.closest(selector).ok().flatten()
}

/// Hide or reveal an element through the `hidden` attribute.
pub fn set_hidden(el: &Element, hidden: bool) {
    if hidden {
        let _ = el.set_attribute("hidden", "");
    } else {
        let _ = el.remove_attribute("hidden");
    }
}

/// Whether an element currently carries the `hidden` attribute.
pub fn is_hidden(el: &Element) -> bool {
    el.has_attribute("hidden")
}

/// Prefixed warning: browser console on wasm, stderr elsewhere.
pub(crate) fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&format!("[domglue][warn] {msg}").into());
    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("[domglue][warn] {msg}");
}
