//! Specification mining.

use indexmap::IndexMap;
use scraper::{Html, Selector};

use crate::text::element_text;

/// Cap on synthetic list-derived spec entries.
const MAX_LIST_SPECS: usize = 10;

/// Mine label/value specifications.
///
/// Strategy 1: every two-cell table row across all tables, cell 1 as label
/// and cell 2 as value; later duplicate labels overwrite earlier values.
/// Strategy 2 (only when no table yields a pair): the first unordered list
/// with at least two non-empty items, capped and labeled `Spec_1..Spec_N`.
/// Neither strategy matching yields an empty map, never an error.
pub fn infer_specs(doc: &Html) -> IndexMap<String, String> {
    let from_tables = specs_from_tables(doc);
    if !from_tables.is_empty() {
        return from_tables;
    }
    specs_from_lists(doc)
}

fn specs_from_tables(doc: &Html) -> IndexMap<String, String> {
    let table = Selector::parse("table").unwrap();
    let row = Selector::parse("tr").unwrap();
    let cell = Selector::parse("th, td").unwrap();

    let mut specs = IndexMap::new();

    for table_el in doc.select(&table) {
        for row_el in table_el.select(&row) {
            let cells: Vec<_> = row_el.select(&cell).collect();
            if let [label_cell, value_cell] = cells[..] {
                let label = element_text(label_cell);
                let value = element_text(value_cell);
                if !label.is_empty() && !value.is_empty() {
                    specs.insert(label, value);
                }
            }
        }
    }

    specs
}

fn specs_from_lists(doc: &Html) -> IndexMap<String, String> {
    let list = Selector::parse("ul").unwrap();
    let item = Selector::parse("li").unwrap();

    for list_el in doc.select(&list) {
        let items: Vec<String> = list_el
            .select(&item)
            .map(element_text)
            .filter(|text| !text.is_empty())
            .collect();

        if items.len() < 2 {
            continue;
        }

        return items
            .into_iter()
            .take(MAX_LIST_SPECS)
            .enumerate()
            .map(|(i, text)| (format!("Spec_{}", i + 1), text))
            .collect();
    }

    IndexMap::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_cell_rows_become_label_value_pairs() {
        let html = r#"<table>
            <tr><th>Weight</th><td>2 kg</td></tr>
            <tr><td>Color</td><td>Black</td></tr>
            <tr><td>One cell only</td></tr>
        </table>"#;
        let doc = Html::parse_document(html);
        let specs = infer_specs(&doc);

        assert_eq!(specs.get("Weight").map(String::as_str), Some("2 kg"));
        assert_eq!(specs.get("Color").map(String::as_str), Some("Black"));
        assert_eq!(specs.len(), 2);
    }

    #[test]
    fn test_pairs_accumulate_across_tables_and_later_labels_overwrite() {
        let html = r#"
            <table><tr><td>Color</td><td>Black</td></tr></table>
            <table><tr><td>Color</td><td>Silver</td></tr>
                   <tr><td>Width</td><td>10 cm</td></tr></table>
        "#;
        let doc = Html::parse_document(html);
        let specs = infer_specs(&doc);

        assert_eq!(specs.get("Color").map(String::as_str), Some("Silver"));
        assert_eq!(specs.get("Width").map(String::as_str), Some("10 cm"));
    }

    #[test]
    fn test_tables_beat_lists() {
        let html = r#"
            <ul><li>Fast</li><li>Light</li><li>Cheap</li></ul>
            <table><tr><td>Weight</td><td>2 kg</td></tr></table>
        "#;
        let doc = Html::parse_document(html);
        let specs = infer_specs(&doc);

        assert_eq!(specs.get("Weight").map(String::as_str), Some("2 kg"));
        assert!(!specs.values().any(|v| v == "Fast"));
    }

    #[test]
    fn test_first_qualifying_list_is_used() {
        let html = r#"
            <ul><li>Only one item</li></ul>
            <ul><li>Fast</li><li></li><li>Light</li></ul>
            <ul><li>Never</li><li>Reached</li></ul>
        "#;
        let doc = Html::parse_document(html);
        let specs = infer_specs(&doc);

        assert_eq!(specs.get("Spec_1").map(String::as_str), Some("Fast"));
        assert_eq!(specs.get("Spec_2").map(String::as_str), Some("Light"));
        assert_eq!(specs.len(), 2);
    }

    #[test]
    fn test_list_entries_are_capped() {
        let items: String = (1..=14).map(|i| format!("<li>Item {i}</li>")).collect();
        let doc = Html::parse_document(&format!("<ul>{items}</ul>"));
        let specs = infer_specs(&doc);

        assert_eq!(specs.len(), MAX_LIST_SPECS);
        assert_eq!(specs.get("Spec_10").map(String::as_str), Some("Item 10"));
        assert!(!specs.contains_key("Spec_11"));
    }

    #[test]
    fn test_nothing_qualifying_yields_empty_map() {
        let doc = Html::parse_document("<body><p>no specs here</p></body>");
        assert!(infer_specs(&doc).is_empty());
    }
}
