//! Availability inference.

use scraper::Html;

use crate::text::document_text;

/// Stock phrases in priority order; the first phrase present anywhere in the
/// lower-cased document text wins, even if another phrase appears earlier in
/// the document.
const AVAILABILITY_PHRASES: [&str; 6] = [
    "in stock",
    "out of stock",
    "available",
    "pre-order",
    "preorder",
    "coming soon",
];

/// Characters of context kept before the matched phrase.
const WINDOW_BEFORE: usize = 30;

/// Characters kept from the phrase start onward.
const WINDOW_AFTER: usize = 50;

/// Infer an availability snippet: a trimmed window of text surrounding the
/// first recognized stock phrase.
pub fn infer_availability(doc: &Html) -> Option<String> {
    let text = document_text(doc).to_lowercase();

    for phrase in AVAILABILITY_PHRASES {
        if let Some(idx) = text.find(phrase) {
            return Some(window(&text, idx));
        }
    }

    None
}

/// Char-boundary-safe slice from `WINDOW_BEFORE` characters ahead of `idx`
/// to `WINDOW_AFTER` characters past it, trimmed.
fn window(text: &str, idx: usize) -> String {
    let start = text[..idx]
        .char_indices()
        .rev()
        .take(WINDOW_BEFORE)
        .last()
        .map(|(i, _)| i)
        .unwrap_or(idx);

    let end = text[idx..]
        .char_indices()
        .nth(WINDOW_AFTER)
        .map(|(i, _)| idx + i)
        .unwrap_or(text.len());

    text[start..end].trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_contains_the_phrase() {
        let html = "<body><p>This very popular widget is currently in stock and ships tomorrow from our warehouse.</p></body>";
        let doc = Html::parse_document(html);
        let snippet = infer_availability(&doc).unwrap();
        assert!(snippet.contains("in stock"));
        assert!(snippet.chars().count() <= "in stock".len() + 80);
    }

    #[test]
    fn test_phrase_priority_beats_document_order() {
        let html = "<body><p>Pre-order bonuses listed below.</p><p>Currently in stock.</p></body>";
        let doc = Html::parse_document(html);
        // "in stock" outranks "pre-order" even though it appears later
        assert!(infer_availability(&doc).unwrap().contains("in stock"));
    }

    #[test]
    fn test_out_of_stock_outranks_available() {
        let html = "<body><p>No longer available. This item is out of stock.</p></body>";
        let doc = Html::parse_document(html);
        let snippet = infer_availability(&doc).unwrap();
        assert!(snippet.contains("out of stock"));
    }

    #[test]
    fn test_phrase_at_document_start() {
        let html = "<body>In stock now</body>";
        let doc = Html::parse_document(html);
        assert_eq!(infer_availability(&doc).as_deref(), Some("in stock now"));
    }

    #[test]
    fn test_multibyte_text_near_the_window_edges() {
        let html = "<body><p>Prix: 49,00 € — élégant, raffiné, été — in stock — expédié dès demain, garanti authentique</p></body>";
        let doc = Html::parse_document(html);
        let snippet = infer_availability(&doc).unwrap();
        assert!(snippet.contains("in stock"));
    }

    #[test]
    fn test_no_phrase_yields_none() {
        let doc = Html::parse_document("<body><p>nothing to see</p></body>");
        assert_eq!(infer_availability(&doc), None);
    }
}
