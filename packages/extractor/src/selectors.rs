//! Selector application.
//!
//! Applies a caller-supplied field → CSS selector mapping to a parsed
//! document, field by field. Unparseable selector syntax, zero matches and
//! empty-after-collapse text all record the field as absent; nothing
//! propagates past this module.

use scraper::{Html, Selector};
use tracing::debug;

use crate::text::element_text;
use crate::types::record::RawFieldSet;
use crate::types::request::SelectorMapping;

/// Apply a selector mapping to a document.
///
/// Fields absent from the mapping stay absent; unrecognized field names are
/// ignored.
pub fn apply_selectors(doc: &Html, mapping: &SelectorMapping) -> RawFieldSet {
    let mut raw = RawFieldSet::default();

    for (field, selector) in mapping.iter() {
        match field {
            "title" => raw.title = select_text(doc, selector, field),
            "price" => raw.price = select_text(doc, selector, field),
            "availability" => raw.availability = select_text(doc, selector, field),
            other => debug!(field = other, "ignoring unrecognized mapping field"),
        }
    }

    raw
}

/// First match's visible text, or `None` on parse failure, no match, or
/// empty text.
fn select_text(doc: &Html, selector_str: &str, field: &str) -> Option<String> {
    if selector_str.trim().is_empty() {
        return None;
    }

    let selector = match Selector::parse(selector_str) {
        Ok(s) => s,
        Err(_) => {
            debug!(field, selector = selector_str, "invalid selector, treating field as missing");
            return None;
        }
    };

    let text = doc.select(&selector).next().map(element_text)?;
    (!text.is_empty()).then_some(text)
}
