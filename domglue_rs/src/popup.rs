//! Mouse-position-triggered popup.
//!
//! The popup is revealed when the cursor touches the viewport's top
//! edge, or moves upward fast while already near the top - the classic
//! exit-intent pattern. Clicking the popup dismisses it. The last
//! observed cursor Y is instance state owned by the controller, not a
//! module-scoped global.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::dom;

/// Cursor Y below which the top edge counts as touched.
pub const TOP_EDGE: f64 = 1.0;

/// Cursor Y band in which a fast upward movement triggers the popup.
pub const HOT_ZONE: f64 = 100.0;

/// Upward travel per mousemove sample that counts as "fast".
pub const VELOCITY_THRESHOLD: f64 = 10.0;

/// Whether a cursor moving from `last_y` to `y` should reveal the popup.
pub fn should_reveal(last_y: f64, y: f64) -> bool {
    y < TOP_EDGE || (last_y - y > VELOCITY_THRESHOLD && y < HOT_ZONE)
}

/// Controller owning one popup element and its mouse-tracking state.
#[derive(Clone)]
pub struct PopupController {
    inner: Rc<PopupInner>,
}

struct PopupInner {
    popup: HtmlElement,
    last_y: Cell<f64>,
}

impl PopupController {
    /// Attach the trigger to the document and the dismiss handler to
    /// the popup itself.
    ///
    /// `last_y` starts at the viewport height - off the hot zone, so
    /// the first sample can't read as a fast upward move.
    pub fn attach(popup: HtmlElement) -> Self {
        let initial_y = dom::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);

        let controller = Self {
            inner: Rc::new(PopupInner {
                popup,
                last_y: Cell::new(initial_y),
            }),
        };

        if let Some(doc) = dom::document() {
            let ctl = controller.clone();
            dom::listen(doc.as_ref(), "mousemove", move |event| {
                let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let y = mouse.client_y() as f64;
                if should_reveal(ctl.inner.last_y.get(), y) {
                    ctl.show();
                }
                ctl.inner.last_y.set(y);
            });
        }

        let ctl = controller.clone();
        dom::listen(controller.inner.popup.as_ref(), "click", move |_event| {
            ctl.hide();
        });

        controller
    }

    /// Reveal the popup (inline display toggle - the one sanctioned
    /// inline-style exception).
    pub fn show(&self) {
        let _ = self.inner.popup.style().set_property("display", "block");
    }

    /// Dismiss the popup.
    pub fn hide(&self) {
        let _ = self.inner.popup.style().set_property("display", "none");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_edge_contact_reveals() {
        assert!(should_reveal(500.0, 0.0));
        assert!(should_reveal(5.0, 0.5));
    }

    #[test]
    fn test_fast_upward_move_near_top_reveals() {
        assert!(should_reveal(90.0, 50.0));
    }

    #[test]
    fn test_slow_move_near_top_does_not() {
        assert!(!should_reveal(55.0, 50.0));
    }

    #[test]
    fn test_fast_move_far_from_top_does_not() {
        assert!(!should_reveal(400.0, 200.0));
    }

    #[test]
    fn test_downward_move_does_not() {
        assert!(!should_reveal(50.0, 90.0));
    }
}
