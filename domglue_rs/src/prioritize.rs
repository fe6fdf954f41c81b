//! Move elements to the front of their parent and back.
//!
//! Each relocated element remembers its previous sibling in a hidden
//! expando slot on the element itself; the slot's presence is the
//! "currently relocated" marker, so repeated calls with the same
//! condition are no-ops and the round trip restores the exact original
//! sibling position.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, Node};

/// Expando property holding the restore anchor while relocated.
const MARKER: &str = "__domglue_prioritized";

/// Move each element to the front of its parent (`condition` true), or
/// restore each relocated element to its original position
/// (`condition` false).
///
/// Elements with no parent are skipped. An element already first in
/// its parent has nothing to remember and is left alone.
pub fn prioritize(elements: &[Element], condition: bool) {
    for element in elements {
        let Some(parent) = element.parent_node() else {
            continue;
        };
        let node: &Node = element.as_ref();

        match restore_anchor(element) {
            None => {
                if !condition {
                    continue;
                }
                // The previous sibling is the restore point; no sibling
                // means the element is already at the top.
                let Some(anchor) = element.previous_element_sibling() else {
                    continue;
                };
                let _ = parent.insert_before(node, parent.first_child().as_ref());
                let _ = js_sys::Reflect::set(
                    element.as_ref(),
                    &JsValue::from_str(MARKER),
                    anchor.as_ref(),
                );
            }
            Some(anchor) => {
                if condition {
                    continue;
                }
                let _ = parent.insert_before(node, anchor.next_sibling().as_ref());
                let _ = js_sys::Reflect::delete_property(
                    element.unchecked_ref(),
                    &JsValue::from_str(MARKER),
                );
            }
        }
    }
}

/// The stored restore anchor, if the element is currently relocated.
fn restore_anchor(element: &Element) -> Option<Element> {
    js_sys::Reflect::get(element.as_ref(), &JsValue::from_str(MARKER))
        .ok()?
        .dyn_into::<Element>()
        .ok()
}
