//! Indented link-list generation from a nav element.
//!
//! Flattens a nav's nested list of links into a flat run of anchors
//! carrying depth classes, the shape panel content expects.

use web_sys::Element;

use crate::dom;

/// Flatten every anchor under `nav` into indented link-list markup.
///
/// Depth is the anchor's `<li>` nesting level below the nav, so a
/// top-level item renders at depth 0. Empty `href`/`target`
/// attributes are omitted from the output.
pub fn nav_list(nav: &Element) -> String {
    let mut markup = String::new();
    for anchor in dom::select_all(nav, "a") {
        let depth = li_depth(nav, &anchor);
        let text = anchor.text_content().unwrap_or_default();
        let href = anchor.get_attribute("href");
        let target = anchor.get_attribute("target");
        markup.push_str(&link_markup(
            &text,
            depth,
            href.as_deref(),
            target.as_deref(),
        ));
    }
    markup
}

/// `<li>` ancestors between `anchor` and `nav`, minus one, floored at 0.
fn li_depth(nav: &Element, anchor: &Element) -> usize {
    let mut count = 0usize;
    let mut current = anchor.parent_element();
    while let Some(el) = current {
        if el == *nav {
            break;
        }
        if el.tag_name().eq_ignore_ascii_case("li") {
            count += 1;
        }
        current = el.parent_element();
    }
    count.saturating_sub(1)
}

/// One flattened link entry.
pub(crate) fn link_markup(
    text: &str,
    depth: usize,
    href: Option<&str>,
    target: Option<&str>,
) -> String {
    let mut attrs = String::new();
    if let Some(target) = target.filter(|t| !t.is_empty()) {
        attrs.push_str(&format!(" target=\"{target}\""));
    }
    if let Some(href) = href.filter(|h| !h.is_empty()) {
        attrs.push_str(&format!(" href=\"{href}\""));
    }
    format!(
        "<a class=\"link depth-{depth}\"{attrs}><span class=\"indent-{depth}\"></span>{text}</a>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_link() {
        assert_eq!(
            link_markup("Home", 0, Some("/"), None),
            "<a class=\"link depth-0\" href=\"/\"><span class=\"indent-0\"></span>Home</a>"
        );
    }

    #[test]
    fn test_nested_link_with_target() {
        assert_eq!(
            link_markup("Docs", 2, Some("/docs"), Some("_blank")),
            "<a class=\"link depth-2\" target=\"_blank\" href=\"/docs\">\
             <span class=\"indent-2\"></span>Docs</a>"
        );
    }

    #[test]
    fn test_empty_attributes_are_omitted() {
        assert_eq!(
            link_markup("Bare", 1, Some(""), Some("")),
            "<a class=\"link depth-1\"><span class=\"indent-1\"></span>Bare</a>"
        );
    }
}
