//! Hamburger-menu animation toggle.
//!
//! A click on the hamburger button flips a fixed state class on each
//! bar element and on the menu container; CSS owns the actual
//! animation. No configuration surface, no state beyond class
//! membership.

use web_sys::{Element, HtmlElement};

use crate::dom;

/// State class toggled on each bar of the hamburger icon.
pub const BAR_ACTIVE_CLASS: &str = "bars__line--active";

/// State class toggled on the menu container.
pub const MENU_ACTIVE_CLASS: &str = "nav-list--active";

/// Bind the toggle to `button`, flipping the state classes on `bars`
/// (the icon's line elements, typically four) and on the `menu`
/// container.
pub fn attach(button: &HtmlElement, bars: Vec<Element>, menu: Element) {
    dom::listen(button.as_ref(), "click", move |_event| {
        for bar in &bars {
            let _ = bar.class_list().toggle(BAR_ACTIVE_CLASS);
        }
        let _ = menu.class_list().toggle(MENU_ACTIVE_CLASS);
    });
}
