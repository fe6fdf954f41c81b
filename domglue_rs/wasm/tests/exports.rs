//! Boundary tests for the page-facing exports.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use domglue_wasm::{attach_panels, attach_popup, nav_list_html};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn empty_selection_attaches_nothing() {
    assert_eq!(attach_panels("#no-such-panel-anywhere", "").unwrap(), 0);
}

#[wasm_bindgen_test]
fn invalid_selector_is_an_error() {
    assert!(attach_panels("][not-a-selector", "").is_err());
}

#[wasm_bindgen_test]
fn malformed_options_still_attach() {
    // Options fall back to defaults; the selection is what matters.
    assert_eq!(attach_panels("#still-no-panel", "{broken").unwrap(), 0);
}

#[wasm_bindgen_test]
fn missing_popup_reports_inert_binding() {
    assert!(!attach_popup("no-such-popup"));
}

#[wasm_bindgen_test]
fn unmatched_nav_yields_empty_markup() {
    assert_eq!(nav_list_html("#no-such-nav").unwrap(), "");
}
