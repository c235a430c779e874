//! Title inference.

use scraper::{Html, Selector};

use crate::text::element_text;

/// Infer a product title from common title carriers, first hit wins:
/// `og:title` meta, `twitter:title` meta, the document `<title>`, then the
/// first non-empty `h1`/`h2`/`h3`. Empty-after-trim candidates are skipped.
pub fn infer_title(doc: &Html) -> Option<String> {
    meta_content(doc, r#"meta[property="og:title"]"#)
        .or_else(|| meta_content(doc, r#"meta[name="twitter:title"]"#))
        .or_else(|| first_text(doc, "title"))
        .or_else(|| first_text(doc, "h1"))
        .or_else(|| first_text(doc, "h2"))
        .or_else(|| first_text(doc, "h3"))
}

fn meta_content(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector)
        .filter_map(|el| el.value().attr("content"))
        .map(|content| content.trim().to_string())
        .find(|content| !content.is_empty())
}

fn first_text(doc: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    doc.select(&selector)
        .map(element_text)
        .find(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_og_title_wins_over_everything_else() {
        let html = r#"<html><head>
            <meta property="og:title" content="  OG Widget ">
            <meta name="twitter:title" content="Tweet Widget">
            <title>Title Widget</title>
        </head><body><h1>H1 Widget</h1></body></html>"#;
        let doc = Html::parse_document(html);
        assert_eq!(infer_title(&doc).as_deref(), Some("OG Widget"));
    }

    #[test]
    fn test_twitter_title_beats_document_title() {
        let html = r#"<html><head>
            <meta name="twitter:title" content="Tweet Widget">
            <title>Title Widget</title>
        </head></html>"#;
        let doc = Html::parse_document(html);
        assert_eq!(infer_title(&doc).as_deref(), Some("Tweet Widget"));
    }

    #[test]
    fn test_empty_meta_content_falls_through() {
        let html = r#"<html><head>
            <meta property="og:title" content="   ">
            <title>Fallback Title</title>
        </head></html>"#;
        let doc = Html::parse_document(html);
        assert_eq!(infer_title(&doc).as_deref(), Some("Fallback Title"));
    }

    #[test]
    fn test_heading_priority_order() {
        let html = "<html><body><h3>Deep</h3><h2>Mid</h2></body></html>";
        let doc = Html::parse_document(html);
        // h2 outranks h3 regardless of document position
        assert_eq!(infer_title(&doc).as_deref(), Some("Mid"));
    }

    #[test]
    fn test_no_title_sources_yields_none() {
        let doc = Html::parse_document("<html><body><p>just text</p></body></html>");
        assert_eq!(infer_title(&doc), None);
    }
}
