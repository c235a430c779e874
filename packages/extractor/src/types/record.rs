//! Field sets and the normalized output record.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw per-field values collected from selector application and heuristic
/// backfill, before normalization.
///
/// Specs keep insertion order, which is document discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFieldSet {
    pub title: Option<String>,
    pub price: Option<String>,
    pub availability: Option<String>,
    pub specs: IndexMap<String, String>,
}

/// Structured price.
///
/// `amount` is present only when a numeric run was found inside `raw`;
/// `currency` only when a recognized symbol preceded a digit run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Raw extracted price text
    pub raw: Option<String>,

    /// Parsed decimal amount, thousands separators stripped
    pub amount: Option<f64>,

    /// Single-character currency symbol
    pub currency: Option<char>,
}

/// The output contract of one extraction call.
///
/// Absent fields serialize as `null`; specs serialize as `{}` when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub title: Option<String>,
    pub price: Price,
    pub availability: Option<String>,
    pub specs: IndexMap<String, String>,

    /// UTC instant of normalization (not fetch time), ISO-8601 with zone
    /// designator on the wire
    pub extraction_timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_absent_fields_as_null() {
        let record = NormalizedRecord {
            title: None,
            price: Price::default(),
            availability: None,
            specs: IndexMap::new(),
            extraction_timestamp: Utc::now(),
        };

        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert!(json["title"].is_null());
        assert!(json["price"]["raw"].is_null());
        assert!(json["price"]["amount"].is_null());
        assert!(json["price"]["currency"].is_null());
        assert!(json["specs"].as_object().unwrap().is_empty());
        assert!(json["extraction_timestamp"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_currency_serializes_as_single_character_string() {
        let price = Price {
            raw: Some("$19.99".to_string()),
            amount: Some(19.99),
            currency: Some('$'),
        };
        let json = serde_json::to_value(&price).unwrap();
        assert_eq!(json["currency"], "$");
    }

    #[test]
    fn test_specs_preserve_insertion_order() {
        let mut specs = IndexMap::new();
        specs.insert("Weight".to_string(), "2 kg".to_string());
        specs.insert("Color".to_string(), "Black".to_string());
        let json = serde_json::to_string(&specs).unwrap();
        assert!(json.find("Weight").unwrap() < json.find("Color").unwrap());
    }
}
