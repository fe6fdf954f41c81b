//! Panel widget: turn an element into a dismissible overlay/drawer.
//!
//! A panel has two states, Hidden and Visible, expressed entirely
//! through class membership on a target element (by default the panel
//! itself). Any hyperlink on the page whose `href` is `#<panelId>`
//! toggles it; clicks outside it, Escape, qualifying swipes, and
//! followed links inside it hide it, depending on configuration.
//!
//! Events inside the panel never propagate to the document-level
//! outside-click handler, which is what keeps "click outside"
//! well-defined rather than self-triggering.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlFormElement, KeyboardEvent, TouchEvent};

use crate::config::PanelOptions;
use crate::{dom, gesture};

/// One attached panel instance.
///
/// Cheap to clone; every event closure holds a clone of the same
/// instance. Dropping all clones does not unbind listeners - bindings
/// live for the page, like the glue they replace.
#[derive(Clone)]
pub struct Panel {
    inner: Rc<PanelInner>,
}

struct PanelInner {
    element: HtmlElement,
    target: Element,
    id: Option<String>,
    options: PanelOptions,
    /// Touch-start coordinates of the gesture in flight, if any.
    touch_origin: Cell<Option<(f64, f64)>>,
}

impl Panel {
    /// Attach panel behavior to `element`.
    ///
    /// The options' `target` selector is resolved here, falling back to
    /// the element itself when absent or unmatched. An element with no
    /// `id` still gets outside-click/escape/swipe behavior, but there
    /// is nothing for the `#<panelId>` trigger convention to match, so
    /// no trigger or internal-close bindings are made.
    pub fn attach(element: HtmlElement, options: &PanelOptions) -> Self {
        let target = options
            .target
            .as_deref()
            .and_then(|selector| {
                dom::document().and_then(|doc| doc.query_selector(selector).ok().flatten())
            })
            .unwrap_or_else(|| element.clone().into());

        let id = Some(element.id()).filter(|id| !id.is_empty());

        let panel = Self {
            inner: Rc::new(PanelInner {
                element,
                target,
                id,
                options: options.clone(),
                touch_origin: Cell::new(None),
            }),
        };
        panel.wire();
        panel
    }

    /// The panel element itself.
    pub fn element(&self) -> &HtmlElement {
        &self.inner.element
    }

    /// The element whose visibility class is toggled.
    pub fn target(&self) -> &Element {
        &self.inner.target
    }

    /// Whether the target currently carries the visible class.
    pub fn is_visible(&self) -> bool {
        self.inner
            .target
            .class_list()
            .contains(&self.inner.options.visible_class)
    }

    /// Enter the Visible state.
    pub fn show(&self) {
        let _ = self
            .inner
            .target
            .class_list()
            .add_1(&self.inner.options.visible_class);
    }

    /// Flip between Hidden and Visible.
    pub fn toggle(&self) {
        let _ = self
            .inner
            .target
            .class_list()
            .toggle(&self.inner.options.visible_class);
    }

    /// Enter the Hidden state. No-op when already hidden.
    pub fn hide(&self) {
        self.hide_with_event(None);
    }

    /// Hide, cancelling the triggering event if one is given.
    ///
    /// Post-hide side effects (scroll reset, form reset) run after the
    /// configured delay on a fire-and-forget timer; a stale timer from
    /// a rapid hide/show sequence re-runs them against current state.
    fn hide_with_event(&self, event: Option<&Event>) {
        if !self.is_visible() {
            return;
        }
        if let Some(event) = event {
            event.prevent_default();
            event.stop_propagation();
        }

        let _ = self
            .inner
            .target
            .class_list()
            .remove_1(&self.inner.options.visible_class);

        if self.inner.options.reset_scroll || self.inner.options.reset_forms {
            let inner = Rc::clone(&self.inner);
            dom::defer(inner.options.delay, move || {
                if inner.options.reset_scroll {
                    inner.element.set_scroll_top(0);
                }
                if inner.options.reset_forms {
                    for form in dom::select_all(inner.element.as_ref(), "form") {
                        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
                            form.reset();
                        }
                    }
                }
            });
        }
    }

    // ------------------------------------------------------------------
    // Event wiring
    // ------------------------------------------------------------------

    fn wire(&self) {
        let element: &HtmlElement = &self.inner.element;

        if self.inner.options.hide_on_click {
            self.wire_link_interception();
        }

        // Track the touch gesture in flight.
        let panel = self.clone();
        dom::listen(element.as_ref(), "touchstart", move |event| {
            if let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|t| t.touches().get(0)) {
                panel
                    .inner
                    .touch_origin
                    .set(Some((touch.page_x() as f64, touch.page_y() as f64)));
            }
        });

        let panel = self.clone();
        dom::listen(element.as_ref(), "touchmove", move |event| {
            panel.on_touch_move(&event);
        });

        // Nothing inside the panel reaches the document-level handlers.
        for kind in ["click", "touchend", "touchstart", "touchmove"] {
            dom::listen(element.as_ref(), kind, |event| event.stop_propagation());
        }

        if let Some(id) = self.inner.id.clone() {
            // A child link pointing at the panel's own id closes it.
            // Direct class removal, no deferred side effects.
            let panel = self.clone();
            let selector = format!("a[href=\"#{id}\"]");
            dom::listen(element.as_ref(), "click", move |event| {
                let Some(link) = dom::event_closest(&event, &selector) else {
                    return;
                };
                if !contains(&panel.inner.element, &link) {
                    return;
                }
                event.prevent_default();
                event.stop_propagation();
                let _ = panel
                    .inner
                    .target
                    .class_list()
                    .remove_1(&panel.inner.options.visible_class);
            });
        }

        if let Some(body) = dom::document().and_then(|doc| doc.body()) {
            // Any click/tap that makes it to the body is outside the panel.
            for kind in ["click", "touchend"] {
                let panel = self.clone();
                dom::listen(body.as_ref(), kind, move |event| {
                    panel.hide_with_event(Some(&event));
                });
            }

            if let Some(id) = self.inner.id.clone() {
                // Trigger convention: a[href="#<panelId>"] anywhere toggles.
                let panel = self.clone();
                let selector = format!("a[href=\"#{id}\"]");
                dom::listen(body.as_ref(), "click", move |event| {
                    if dom::event_closest(&event, &selector).is_none() {
                        return;
                    }
                    event.prevent_default();
                    event.stop_propagation();
                    panel.toggle();
                });
            }
        }

        if self.inner.options.hide_on_escape {
            if let Some(win) = dom::window() {
                let panel = self.clone();
                dom::listen(win.as_ref(), "keydown", move |event| {
                    let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if key.key() == "Escape" {
                        panel.hide_with_event(Some(&event));
                    }
                });
            }
        }
    }

    /// Intercept followed hyperlinks inside the panel: hide first, then
    /// navigate once the hide transition (plus delay) has played out.
    fn wire_link_interception(&self) {
        let panel = self.clone();
        dom::listen(self.inner.element.as_ref(), "click", move |event| {
            let Some(link) = dom::event_closest(&event, "a") else {
                return;
            };
            if !contains(&panel.inner.element, &link) {
                return;
            }

            let href = link.get_attribute("href").unwrap_or_default();
            if href.is_empty() || href == "#" {
                return;
            }
            if let Some(id) = &panel.inner.id {
                if href == format!("#{id}") {
                    return;
                }
            }

            event.prevent_default();
            event.stop_propagation();
            panel.hide();

            let new_window = link.get_attribute("target").as_deref() == Some("_blank");
            dom::defer(panel.inner.options.delay + 10, move || {
                redirect(&href, new_window);
            });
        });
    }

    fn on_touch_move(&self, event: &Event) {
        let Some((start_x, start_y)) = self.inner.touch_origin.get() else {
            return;
        };
        let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|t| t.touches().get(0)) else {
            return;
        };
        let delta_x = start_x - touch.page_x() as f64;
        let delta_y = start_y - touch.page_y() as f64;

        if self.inner.options.hide_on_swipe
            && gesture::swipe_dismisses(self.inner.options.side, delta_x, delta_y)
        {
            self.inner.touch_origin.set(None);
            self.hide();
            event.prevent_default();
            event.stop_propagation();
            return;
        }

        // Keep a drag past the panel's own scroll range from
        // rubber-banding the page underneath.
        let element = &self.inner.element;
        if gesture::suppress_overscroll(
            element.scroll_top() as f64,
            element.scroll_height() as f64,
            element.offset_height() as f64,
            delta_y,
        ) {
            event.prevent_default();
            event.stop_propagation();
        }
    }
}

/// Collective handle over every panel an attach call produced.
///
/// Attaching to an empty selection yields an empty handle; every
/// operation on it is a no-op.
pub struct PanelHandle {
    panels: Vec<Panel>,
}

impl PanelHandle {
    /// The attached panels.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Hide every attached panel.
    pub fn hide_all(&self) {
        for panel in &self.panels {
            panel.hide();
        }
    }

    /// Show every attached panel.
    pub fn show_all(&self) {
        for panel in &self.panels {
            panel.show();
        }
    }
}

/// Attach panel behavior to every element of a selection independently.
pub fn attach_all<I>(elements: I, options: &PanelOptions) -> PanelHandle
where
    I: IntoIterator<Item = HtmlElement>,
{
    PanelHandle {
        panels: elements
            .into_iter()
            .map(|element| Panel::attach(element, options))
            .collect(),
    }
}

fn contains(parent: &HtmlElement, child: &Element) -> bool {
    let node: &web_sys::Node = child.as_ref();
    parent.contains(Some(node))
}

fn redirect(href: &str, new_window: bool) {
    let Some(win) = dom::window() else {
        return;
    };
    if new_window {
        let _ = win.open_with_url(href);
    } else {
        let _ = win.location().set_href(href);
    }
}
