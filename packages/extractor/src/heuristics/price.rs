//! Price inference.

use regex::Regex;
use scraper::{Html, Selector};

use crate::patterns;
use crate::text::{document_text, element_text};

/// Class/id keywords that mark price-bearing elements.
const PRICE_KEYWORDS: [&str; 6] = ["price", "amount", "cost", "sale", "our-price", "discount"];

/// Infer a price substring, in order: keyword-classed elements, then
/// keyword-id elements, then a currency-pattern search over the whole
/// document text. Within each stage the first document-order currency match
/// wins; the result is the matched substring (e.g. `$1,299.99`).
pub fn infer_price(doc: &Html) -> Option<String> {
    let currency = patterns::currency();

    scan_attribute(doc, "class", &currency)
        .or_else(|| scan_attribute(doc, "id", &currency))
        .or_else(|| {
            currency
                .find(&document_text(doc))
                .map(|m| m.as_str().to_string())
        })
}

/// Document-order scan of elements whose attribute value carries a price
/// keyword; returns the first currency match found in such an element's
/// visible text.
fn scan_attribute(doc: &Html, attribute: &str, currency: &Regex) -> Option<String> {
    let any = Selector::parse("*").unwrap();

    for el in doc.select(&any) {
        let Some(value) = el.value().attr(attribute) else {
            continue;
        };
        if !has_price_keyword(value) {
            continue;
        }
        let text = element_text(el);
        if let Some(m) = currency.find(&text) {
            return Some(m.as_str().to_string());
        }
    }

    None
}

fn has_price_keyword(attribute_value: &str) -> bool {
    let lowered = attribute_value.to_lowercase();
    PRICE_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}
