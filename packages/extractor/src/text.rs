//! Text helpers shared by the selector applier and the heuristics.

use scraper::{ElementRef, Html, Node};

/// Collapse internal whitespace to single spaces and trim.
pub(crate) fn collapse_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible text of one element, whitespace-collapsed.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    collapse_ws(&el.text().collect::<Vec<_>>().join(" "))
}

/// Visible text of the whole document in document order, skipping
/// script/style/template content, whitespace-collapsed.
pub(crate) fn document_text(doc: &Html) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for node in doc.tree.nodes() {
        if let Node::Text(text) = node.value() {
            let hidden = node.ancestors().any(|a| match a.value() {
                Node::Element(el) => {
                    matches!(el.name(), "script" | "style" | "noscript" | "template")
                }
                _ => false,
            });
            if !hidden {
                parts.push(&**text);
            }
        }
    }
    collapse_ws(&parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    #[test]
    fn test_collapse_ws() {
        assert_eq!(collapse_ws("  a \n\t b  c  "), "a b c");
        assert_eq!(collapse_ws(""), "");
        assert_eq!(collapse_ws("   "), "");
    }

    #[test]
    fn test_element_text_collapses_nested_whitespace() {
        let doc = Html::parse_document("<div><span>  Acme </span>\n <b>Widget</b></div>");
        let selector = Selector::parse("div").unwrap();
        let el = doc.select(&selector).next().unwrap();
        assert_eq!(element_text(el), "Acme Widget");
    }

    #[test]
    fn test_document_text_skips_scripts_and_styles() {
        let html = r#"<html><head><style>.x{color:red}</style>
            <script>var price = "$9.99";</script></head>
            <body><p>Visible text</p></body></html>"#;
        let doc = Html::parse_document(html);
        let text = document_text(&doc);
        assert!(text.contains("Visible text"));
        assert!(!text.contains("$9.99"));
        assert!(!text.contains("color:red"));
    }

    #[test]
    fn test_document_text_is_in_document_order() {
        let doc = Html::parse_document("<body><p>first</p><div>second</div></body>");
        let text = document_text(&doc);
        assert!(text.find("first").unwrap() < text.find("second").unwrap());
    }
}
