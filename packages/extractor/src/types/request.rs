//! Request types accepted at the boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Mapping from field name to CSS selector text.
///
/// Recognized field names are `title`, `price` and `availability`; anything
/// else is ignored by the applier. Deserializes from a plain JSON object, so
/// caller-supplied and oracle-produced mappings share this shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectorMapping {
    fields: BTreeMap<String, String>,
}

impl SelectorMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field selector.
    pub fn with(mut self, field: impl Into<String>, selector: impl Into<String>) -> Self {
        self.fields.insert(field.into(), selector.into());
        self
    }

    /// Selector for a field, if present.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// True when no selectors were supplied.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of field selectors.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterate over (field, selector) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A single extraction request.
///
/// Exactly one of `url`/`html` is expected to be meaningful; inline HTML
/// takes precedence and the URL is then ignored for fetching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionRequest {
    /// Page URL to fetch live
    pub url: Option<String>,

    /// Inline HTML snapshot; wins over `url`
    pub html: Option<String>,

    /// Ask the selector oracle for a mapping when none is supplied
    #[serde(default, rename = "use_llm", alias = "use_ai_inference")]
    pub use_ai_inference: bool,

    /// Caller-supplied field selectors
    #[serde(default)]
    pub mapping: SelectorMapping,
}

impl ExtractionRequest {
    /// Request a live fetch of a URL.
    pub fn for_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Request extraction from an HTML snapshot.
    pub fn for_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Self::default()
        }
    }

    /// Supply a selector mapping.
    pub fn with_mapping(mut self, mapping: SelectorMapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Enable AI-assisted selector inference.
    pub fn with_ai_inference(mut self, enabled: bool) -> Self {
        self.use_ai_inference = enabled;
        self
    }
}
