//! Scroll-to-top/bottom control.
//!
//! The to-top control is revealed whenever the page is scrolled at
//! all and hidden again at the very top; clicking it smooth-scrolls
//! the window home. An optional to-bottom control scrolls to a fixed
//! offset further down the page.

use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom;

/// State class revealing a scroll control.
pub const REVEAL_CLASS: &str = "scroll-control--visible";

/// Offset (CSS pixels) the to-bottom control scrolls to.
pub const BOTTOM_OFFSET: f64 = 1000.0;

/// Whether the to-top control should be revealed at this scroll offset.
pub fn to_top_visible(scroll_y: f64) -> bool {
    scroll_y > 0.0
}

/// Bind the control pair.
///
/// `to_top` is revealed/hidden on every window scroll; both controls
/// get click handlers driving a native smooth scroll.
pub fn attach(to_top: HtmlElement, to_bottom: Option<HtmlElement>) {
    let Some(win) = dom::window() else {
        return;
    };

    let control = to_top.clone();
    dom::listen(win.as_ref(), "scroll", move |_event| {
        let Some(win) = dom::window() else {
            return;
        };
        let offset = win.scroll_y().unwrap_or(0.0);
        let _ = control
            .class_list()
            .toggle_with_force(REVEAL_CLASS, to_top_visible(offset));
    });

    dom::listen(to_top.as_ref(), "click", |_event| scroll_window_to(0.0));

    if let Some(to_bottom) = to_bottom {
        dom::listen(to_bottom.as_ref(), "click", |_event| {
            scroll_window_to(BOTTOM_OFFSET);
        });
    }
}

fn scroll_window_to(offset: f64) {
    let Some(win) = dom::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(offset);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_at_page_top() {
        assert!(!to_top_visible(0.0));
    }

    #[test]
    fn test_revealed_once_scrolled() {
        assert!(to_top_visible(50.0));
        assert!(to_top_visible(1.0));
    }
}
