//! Panel configuration.
//!
//! Options arrive either as a Rust struct or as a JSON object from page
//! JavaScript. Field names stay camelCase on the wire so existing page
//! configs keep working; any omitted or unknown field shallow-merges
//! over the hard-coded defaults.

use serde::Deserialize;

use crate::dom;

/// Viewport side a panel slides in from.
///
/// Drives which swipe direction dismisses the panel; [`Side::None`]
/// disables directional dismissal entirely.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
    #[default]
    None,
}

/// Per-panel options record.
///
/// Constructed once at attach time and immutable thereafter; the panel
/// holds it behind an `Rc` shared with its event closures.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PanelOptions {
    /// Delay (ms) before post-hide side effects and deferred redirects.
    pub delay: i32,
    /// Hide the panel when a followed hyperlink inside it is clicked.
    pub hide_on_click: bool,
    /// Hide the panel on an Escape keypress.
    pub hide_on_escape: bool,
    /// Hide the panel on a qualifying swipe gesture.
    pub hide_on_swipe: bool,
    /// Reset the panel's scroll position to top after hiding.
    pub reset_scroll: bool,
    /// Reset all descendant forms to their default state after hiding.
    pub reset_forms: bool,
    /// Side of the viewport the panel appears from.
    pub side: Side,
    /// Selector for the element whose visibility class is toggled.
    /// Resolved at attach time; defaults to the panel element itself.
    pub target: Option<String>,
    /// Class expressing the Visible state.
    pub visible_class: String,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            delay: 0,
            hide_on_click: false,
            hide_on_escape: false,
            hide_on_swipe: false,
            reset_scroll: false,
            reset_forms: false,
            side: Side::None,
            target: None,
            visible_class: "visible".into(),
        }
    }
}

impl PanelOptions {
    /// Parse options from a JSON object string.
    ///
    /// An empty string means "all defaults". A string that fails to
    /// parse also falls back to defaults, after a console warning -
    /// malformed configuration is corrected, never fatal.
    pub fn from_json(json: &str) -> Self {
        if json.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str(json) {
            Ok(options) => options,
            Err(e) => {
                dom::warn(&format!("invalid panel options ({e}); using defaults"));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = PanelOptions::default();
        assert_eq!(options.delay, 0);
        assert!(!options.hide_on_click);
        assert!(!options.hide_on_escape);
        assert!(!options.hide_on_swipe);
        assert!(!options.reset_scroll);
        assert!(!options.reset_forms);
        assert_eq!(options.side, Side::None);
        assert_eq!(options.target, None);
        assert_eq!(options.visible_class, "visible");
    }

    #[test]
    fn test_partial_json_merges_over_defaults() {
        let options =
            PanelOptions::from_json(r#"{"delay": 500, "hideOnClick": true, "side": "left"}"#);
        assert_eq!(options.delay, 500);
        assert!(options.hide_on_click);
        assert_eq!(options.side, Side::Left);
        // Everything unmentioned keeps its default.
        assert!(!options.hide_on_swipe);
        assert_eq!(options.visible_class, "visible");
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let options = PanelOptions::from_json(r#"{"visibleClass": "open", "bogus": 1}"#);
        assert_eq!(options.visible_class, "open");
    }

    #[test]
    fn test_malformed_json_is_defaults() {
        let options = PanelOptions::from_json(r#"{"delay": "#);
        assert_eq!(options.delay, 0);
        assert_eq!(options.visible_class, "visible");
    }

    #[test]
    fn test_empty_json_is_defaults() {
        let options = PanelOptions::from_json("  ");
        assert_eq!(options.visible_class, "visible");
        assert_eq!(options.side, Side::None);
    }

    #[test]
    fn test_target_selector() {
        let options = PanelOptions::from_json(r#"{"target": "body"}"#);
        assert_eq!(options.target.as_deref(), Some("body"));
    }

    #[test]
    fn test_all_sides_parse() {
        for (json, side) in [
            ("left", Side::Left),
            ("right", Side::Right),
            ("top", Side::Top),
            ("bottom", Side::Bottom),
            ("none", Side::None),
        ] {
            let options = PanelOptions::from_json(&format!(r#"{{"side": "{json}"}}"#));
            assert_eq!(options.side, side);
        }
    }
}
