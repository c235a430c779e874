//! Raw field normalization.

use chrono::Utc;

use crate::patterns;
use crate::types::record::{NormalizedRecord, Price, RawFieldSet};

/// Convert a raw field set into the normalized output record.
///
/// The raw price text is mined for a currency symbol and, independently, for
/// a numeric run; either can be absent on its own. The timestamp is the
/// normalization instant, not fetch time.
pub fn normalize(raw: RawFieldSet) -> NormalizedRecord {
    NormalizedRecord {
        title: raw.title,
        price: normalize_price(raw.price),
        availability: raw.availability,
        specs: raw.specs,
        extraction_timestamp: Utc::now(),
    }
}

fn normalize_price(raw: Option<String>) -> Price {
    let Some(text) = raw else {
        return Price::default();
    };

    let currency = patterns::currency()
        .captures(&text)
        .and_then(|caps| caps.get(1))
        .and_then(|symbol| symbol.as_str().chars().next());

    let amount = patterns::number()
        .find(&text)
        .and_then(|run| parse_amount(run.as_str()));

    Price {
        raw: Some(text),
        amount,
        currency,
    }
}

/// Strip thousands separators and parse; a malformed run yields `None`
/// rather than an error.
fn parse_amount(run: &str) -> Option<f64> {
    run.replace(',', "").parse().ok()
}
