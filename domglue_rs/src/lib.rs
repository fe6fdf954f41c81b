//! # domglue
//!
//! **Browser-side UI behaviors for existing markup** - a small collection of
//! DOM glue compiled to WebAssembly and attached to elements the page
//! already has.
//!
//! Nothing here renders; every behavior augments elements selected at
//! attach time and reacts to DOM events one shot at a time.
//!
//! ## Behaviors
//!
//! - **Panel** - turn an element into a dismissible overlay/drawer with
//!   click-outside-to-close, escape-to-close, swipe-to-close, and
//!   link-click interception
//! - **Placeholder Polyfill** - simulate placeholder text in
//!   text/textarea/password fields on engines without native support
//! - **Prioritize** - move elements to the front of their parent and
//!   restore them to their original position later
//! - **Menu Toggle / Scroll Control / Popup** - stateless page chrome:
//!   hamburger animation classes, a scroll-to-top control, a
//!   mouse-position-triggered popup
//! - **Nav List** - flatten a nav's links into an indented link list for
//!   panel content
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,no_run
//! use domglue::{panel, PanelOptions, Side};
//!
//! # fn demo(menu: web_sys::HtmlElement) {
//! let options = PanelOptions {
//!     delay: 500,
//!     hide_on_click: true,
//!     hide_on_swipe: true,
//!     side: Side::Left,
//!     ..PanelOptions::default()
//! };
//! let handle = panel::attach_all([menu], &options);
//! handle.hide_all();
//! # }
//! ```
//!
//! Page JavaScript goes through the `domglue-wasm` member instead, which
//! exposes selector-based `#[wasm_bindgen]` exports.
//!
//! ## Event model
//!
//! All listeners are bound for the life of the page (`Closure::forget`),
//! mirroring the one-shot, never-unbound event glue this crate replaces.
//! Deferred work uses fire-and-forget timeouts with no cancellation;
//! every deferred callback is written to be idempotent against the state
//! it finds.

// ============================================================================
// Core Modules
// ============================================================================

/// Panel widget: dismissible overlay/drawer attached to an element.
pub mod panel;

/// Placeholder-attribute polyfill for legacy form inputs.
pub mod placeholder;

/// Move elements to the front of their parent and back.
pub mod prioritize;

// ============================================================================
// Page Chrome
// ============================================================================

/// Hamburger-menu animation toggle.
pub mod menu;

/// Scroll-to-top/bottom control.
pub mod scroll;

/// Mouse-position-triggered popup.
pub mod popup;

/// Indented link-list generation from a nav element.
pub mod nav;

// ============================================================================
// Support
// ============================================================================

/// Panel configuration record and sides.
pub mod config;

/// Pure swipe/overscroll decision rules.
pub mod gesture;

/// Thin DOM helper layer (listeners, timers, visibility).
pub mod dom;

pub use config::{PanelOptions, Side};
pub use panel::{Panel, PanelHandle};
pub use popup::PopupController;
pub use prioritize::prioritize;
