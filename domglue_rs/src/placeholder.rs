//! Placeholder-attribute polyfill for legacy form inputs.
//!
//! On engines without native placeholder rendering, empty text and
//! textarea fields display their placeholder text as a real value
//! marked with [`PLACEHOLDER_CLASS`]. Password fields can't display
//! plain text while masked, so each gets a shadow text-type twin
//! (name/id suffixed with [`SHADOW_SUFFIX`], inserted immediately
//! after the real field); exactly one of the pair is visible at any
//! time, tracked through the `hidden` attribute. Submit scrubs shadow
//! names and placeholder values out of the submission; reset is
//! re-implemented so the derived state survives it.

use once_cell::race::OnceBool;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlInputElement, HtmlOptionElement, HtmlSelectElement,
    HtmlTextAreaElement};

use crate::dom;

/// Suffix marking the shadow half of a password field pair.
pub const SHADOW_SUFFIX: &str = "-polyfill-field";

/// Class marking a field that currently displays its placeholder text
/// as a value.
pub const PLACEHOLDER_CLASS: &str = "polyfill-placeholder";

static NATIVE_PLACEHOLDER: OnceBool = OnceBool::new();

/// Whether the engine renders placeholder text natively.
///
/// Probed once per page by creating an `<input>` and checking for a
/// `placeholder` property; the result is memoized and threaded into
/// [`apply`]. Outside a browser the probe answers `true`, which keeps
/// the polyfill inert.
pub fn native_placeholder_support() -> bool {
    NATIVE_PLACEHOLDER.get_or_init(probe)
}

fn probe() -> bool {
    let Some(doc) = dom::document() else {
        return true;
    };
    let Ok(input) = doc.create_element("input") else {
        return true;
    };
    js_sys::Reflect::has(input.as_ref(), &JsValue::from_str("placeholder")).unwrap_or(true)
}

/// Shadow twin name for a real field name.
pub fn shadow_name(name: &str) -> String {
    format!("{name}{SHADOW_SUFFIX}")
}

/// Whether a field name denotes a shadow twin.
pub fn is_shadow_name(name: &str) -> bool {
    name.ends_with(SHADOW_SUFFIX)
}

/// Real field name behind a shadow name; unchanged if not a shadow.
pub fn base_name(name: &str) -> &str {
    name.strip_suffix(SHADOW_SUFFIX).unwrap_or(name)
}

/// Whether a field with this value should display its placeholder.
pub fn wants_placeholder(value: &str, placeholder: &str) -> bool {
    value.is_empty() || value == placeholder
}

/// Apply the polyfill to a form, or to every form under a container.
///
/// No-op when the engine supports placeholders natively (capability
/// probed once, globally, before any instance work).
pub fn apply(root: &Element) {
    apply_with_support(root, native_placeholder_support());
}

/// [`apply`] with the capability probe's answer passed in explicitly.
///
/// Lets a caller that has already probed (or that needs the legacy
/// path regardless, as the tests do) skip the memoized probe.
pub fn apply_with_support(root: &Element, native_support: bool) {
    if native_support {
        return;
    }

    for field in dom::select_all(root, "input[type=text], textarea") {
        init_text_field(&field);
        bind_text_field(&field);
    }

    for field in dom::select_all(root, "input[type=password]") {
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            init_password_field(input);
        }
    }

    for form in forms_in_scope(root) {
        bind_form(&form);
    }
}

// ----------------------------------------------------------------------
// Text / textarea
// ----------------------------------------------------------------------

fn init_text_field(field: &Element) {
    if wants_placeholder(&value_of(field), &placeholder_of(field)) {
        mark(field);
        set_value(field, &placeholder_of(field));
    }
}

fn bind_text_field(field: &Element) {
    let el = field.clone();
    dom::listen(field.as_ref(), "blur", move |_event| {
        if is_shadow_name(&name_of(&el)) {
            return;
        }
        if value_of(&el).is_empty() {
            mark(&el);
            set_value(&el, &placeholder_of(&el));
        }
    });

    let el = field.clone();
    dom::listen(field.as_ref(), "focus", move |_event| {
        if is_shadow_name(&name_of(&el)) {
            return;
        }
        if value_of(&el) == placeholder_of(&el) {
            unmark(&el);
            set_value(&el, "");
        }
    });
}

// ----------------------------------------------------------------------
// Password pairing
// ----------------------------------------------------------------------

fn init_password_field(real: &HtmlInputElement) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Ok(created) = doc.create_element("input") else {
        return;
    };
    let Ok(shadow) = created.dyn_into::<HtmlInputElement>() else {
        return;
    };

    shadow.set_type("text");
    shadow.set_class_name(&real.class_name());
    if !real.id().is_empty() {
        shadow.set_id(&shadow_name(&real.id()));
    }
    if !real.name().is_empty() {
        shadow.set_name(&shadow_name(&real.name()));
    }
    shadow.set_placeholder(&real.placeholder());
    shadow.set_value(&real.placeholder());
    mark(shadow.as_ref());

    if let Some(parent) = real.parent_node() {
        let shadow_node: &web_sys::Node = shadow.as_ref();
        let _ = parent.insert_before(shadow_node, real.next_sibling().as_ref());
    }

    sync_pair(real, &shadow);
    bind_password_pair(real.clone(), shadow);
}

/// Exactly one of {real, shadow} visible, keyed on the real value.
fn sync_pair(real: &HtmlInputElement, shadow: &HtmlInputElement) {
    let empty = real.value().is_empty();
    dom::set_hidden(real.as_ref(), empty);
    dom::set_hidden(shadow.as_ref(), !empty);
}

fn bind_password_pair(real: HtmlInputElement, shadow: HtmlInputElement) {
    // Leaving the real field empty hands the pair back to the shadow.
    let (r, s) = (real.clone(), shadow.clone());
    dom::listen(real.as_ref(), "blur", move |event| {
        event.prevent_default();
        if r.value().is_empty() {
            dom::set_hidden(r.as_ref(), true);
            dom::set_hidden(s.as_ref(), false);
        }
    });

    // Focusing the shadow hands control to the real field.
    let (r, s) = (real.clone(), shadow.clone());
    dom::listen(shadow.as_ref(), "focus", move |event| {
        event.prevent_default();
        dom::set_hidden(s.as_ref(), true);
        dom::set_hidden(r.as_ref(), false);
        let _ = r.focus();
    });

    // The shadow never accepts typed input as real data.
    let s = shadow.clone();
    dom::listen(shadow.as_ref(), "keydown", move |event| {
        event.prevent_default();
        s.set_value("");
    });
}

// ----------------------------------------------------------------------
// Submit / reset
// ----------------------------------------------------------------------

fn forms_in_scope(root: &Element) -> Vec<Element> {
    if root.matches("form").unwrap_or(false) {
        vec![root.clone()]
    } else {
        dom::select_all(root, "form")
    }
}

fn bind_form(form: &Element) {
    let el = form.clone();
    dom::listen(form.as_ref(), "submit", move |_event| {
        scrub_form(&el);
    });

    let el = form.clone();
    dom::listen(form.as_ref(), "reset", move |event| {
        event.prevent_default();
        reset_form(&el);
    });
}

/// Keep shadow names and displayed placeholder text out of the
/// submission data.
fn scrub_form(form: &Element) {
    for field in dom::select_all(form, "input[type=text], input[type=password], textarea") {
        if is_shadow_name(&name_of(&field)) {
            set_name(&field, "");
        }
        if value_of(&field) == placeholder_of(&field) {
            unmark(&field);
            set_value(&field, "");
        }
    }
}

/// Native reset is cancelled and re-implemented so per-type derived
/// state (pair visibility, placeholder marking) is restored too.
fn reset_form(form: &Element) {
    for select in dom::select_all(form, "select") {
        let Some(select) = select.dyn_ref::<HtmlSelectElement>() else {
            continue;
        };
        if let Some(first) = select
            .query_selector("option")
            .ok()
            .flatten()
            .and_then(|o| o.dyn_into::<HtmlOptionElement>().ok())
        {
            select.set_value(&first.value());
        }
    }

    for field in dom::select_all(form, "input, textarea") {
        unmark(&field);

        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            match input.type_().as_str() {
                "submit" | "reset" => {}
                "password" => {
                    input.set_value(&input.default_value());
                    if let Some(shadow) = shadow_for(input) {
                        sync_pair(input, &shadow);
                    }
                }
                "checkbox" | "radio" => input.set_checked(input.default_checked()),
                "text" => {
                    input.set_value(&input.default_value());
                    if input.value().is_empty() {
                        mark(&field);
                        input.set_value(&input.placeholder());
                    }
                }
                _ => input.set_value(&input.default_value()),
            }
        } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
            textarea.set_value(&textarea.default_value());
            if textarea.value().is_empty() {
                mark(&field);
                textarea.set_value(&textarea.placeholder());
            }
        }
    }
}

/// Shadow twin of a real password field, found by naming convention
/// among its siblings.
fn shadow_for(real: &HtmlInputElement) -> Option<HtmlInputElement> {
    if real.name().is_empty() {
        return None;
    }
    let parent = real.parent_element()?;
    parent
        .query_selector(&format!("input[name=\"{}\"]", shadow_name(&real.name())))
        .ok()
        .flatten()?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

// ----------------------------------------------------------------------
// Field access across input/textarea
// ----------------------------------------------------------------------

fn value_of(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.value()
    } else {
        String::new()
    }
}

fn set_value(field: &Element, value: &str) {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_value(value);
    }
}

fn placeholder_of(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.placeholder()
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.placeholder()
    } else {
        String::new()
    }
}

fn name_of(field: &Element) -> String {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.name()
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.name()
    } else {
        String::new()
    }
}

fn set_name(field: &Element, name: &str) {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        input.set_name(name);
    } else if let Some(textarea) = field.dyn_ref::<HtmlTextAreaElement>() {
        textarea.set_name(name);
    }
}

fn mark(field: &Element) {
    let _ = field.class_list().add_1(PLACEHOLDER_CLASS);
}

fn unmark(field: &Element) {
    let _ = field.class_list().remove_1(PLACEHOLDER_CLASS);
}
