//! The extraction pipeline.
//!
//! Orchestrates the ordered stages that turn raw HTML into a normalized
//! record: parse → (optional selector oracle) → selector application →
//! heuristic backfill → normalization. Each call owns its parsed document
//! and intermediate state, so one engine can serve concurrent callers.

use std::sync::Arc;

use scraper::Html;
use tracing::{debug, warn};

use crate::error::{ExtractionError, Result};
use crate::fetcher::{FetchedPage, Fetcher};
use crate::heuristics;
use crate::normalize::normalize;
use crate::selectors::apply_selectors;
use crate::traits::oracle::SelectorOracle;
use crate::types::record::NormalizedRecord;
use crate::types::request::{ExtractionRequest, SelectorMapping};

/// The extraction engine.
///
/// # Example
///
/// ```rust,ignore
/// use extractor::{ExtractionRequest, Extractor};
///
/// let engine = Extractor::new();
/// let record = engine
///     .extract(&ExtractionRequest::for_url("https://example.com/p/1"))
///     .await?;
/// ```
pub struct Extractor {
    fetcher: Fetcher,
    oracle: Option<Arc<dyn SelectorOracle>>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    /// Create an engine with a default fetcher and no oracle.
    pub fn new() -> Self {
        Self {
            fetcher: Fetcher::new(),
            oracle: None,
        }
    }

    /// Replace the fetcher.
    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Attach a selector oracle, consulted when a request asks for AI
    /// inference and supplies no mapping of its own.
    pub fn with_oracle(mut self, oracle: Arc<dyn SelectorOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Fetch a page through the engine's retrying fetcher.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        Ok(self.fetcher.fetch(url).await?)
    }

    /// Ask the oracle for a selector mapping.
    ///
    /// Any oracle failure, and the absence of an oracle, degrade to an
    /// empty mapping so the pipeline falls through to heuristics.
    pub async fn infer_mapping(&self, html: &str) -> SelectorMapping {
        let Some(oracle) = &self.oracle else {
            debug!("no selector oracle attached");
            return SelectorMapping::default();
        };

        match oracle.infer_selectors(html).await {
            Ok(mapping) => {
                debug!(oracle = oracle.name(), fields = mapping.len(), "oracle proposed selectors");
                mapping
            }
            Err(e) => {
                warn!(oracle = oracle.name(), error = %e, "selector oracle failed, falling back to heuristics");
                SelectorMapping::default()
            }
        }
    }

    /// Extract a normalized record from HTML.
    ///
    /// Infallible: a field both the selectors and the heuristics miss is
    /// simply absent in the record.
    pub fn extract_html(&self, html: &str, mapping: &SelectorMapping) -> NormalizedRecord {
        let doc = Html::parse_document(html);

        let mut raw = apply_selectors(&doc, mapping);
        if raw.title.is_none() {
            raw.title = heuristics::infer_title(&doc);
        }
        if raw.price.is_none() {
            raw.price = heuristics::infer_price(&doc);
        }
        if raw.availability.is_none() {
            raw.availability = heuristics::infer_availability(&doc);
        }
        raw.specs = heuristics::infer_specs(&doc);

        normalize(raw)
    }

    /// Run a full request.
    ///
    /// Inline HTML wins over a URL; a URL is fetched through the retrying
    /// fetcher; the oracle is consulted only when asked for and no mapping
    /// was supplied.
    pub async fn extract(&self, request: &ExtractionRequest) -> Result<NormalizedRecord> {
        let html = match (&request.html, &request.url) {
            (Some(html), _) => html.clone(),
            (None, Some(url)) => self.fetcher.fetch(url).await?.html,
            (None, None) => return Err(ExtractionError::NoInput),
        };

        let mapping = if request.mapping.is_empty() && request.use_ai_inference {
            self.infer_mapping(&html).await
        } else {
            request.mapping.clone()
        };

        Ok(self.extract_html(&html, &mapping))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{fixtures, MockOracle};

    #[test]
    fn test_plain_product_page_with_empty_mapping() {
        let engine = Extractor::new();
        let record = engine.extract_html(fixtures::PLAIN_PRODUCT_PAGE, &SelectorMapping::new());

        assert_eq!(record.title.as_deref(), Some("Plain"));
        assert_eq!(record.price.raw.as_deref(), Some("$19.99"));
        assert_eq!(record.price.amount, Some(19.99));
        assert_eq!(record.price.currency, Some('$'));
        assert!(record.availability.unwrap().contains("in stock now"));
        assert!(record.specs.is_empty());
    }

    #[test]
    fn test_zero_match_selector_falls_through_to_heuristics() {
        let engine = Extractor::new();
        let mapping = SelectorMapping::new().with("title", "h1.does-not-exist");
        let record = engine.extract_html(fixtures::PLAIN_PRODUCT_PAGE, &mapping);

        assert_eq!(record.title.as_deref(), Some("Plain"));
    }

    #[test]
    fn test_selector_result_preempts_heuristics() {
        let engine = Extractor::new();
        let mapping = SelectorMapping::new().with("price", "span.price");
        let record = engine.extract_html(fixtures::RICH_PRODUCT_PAGE, &mapping);

        assert_eq!(record.price.raw.as_deref(), Some("$1,299.99"));
        assert_eq!(record.price.amount, Some(1299.99));
    }

    #[test]
    fn test_idempotent_modulo_timestamp() {
        let engine = Extractor::new();
        let mapping = SelectorMapping::new().with("title", "h1");

        let a = engine.extract_html(fixtures::RICH_PRODUCT_PAGE, &mapping);
        let mut b = engine.extract_html(fixtures::RICH_PRODUCT_PAGE, &mapping);
        b.extraction_timestamp = a.extraction_timestamp;

        assert_eq!(a, b);
    }

    #[test]
    fn test_no_priceable_pattern_leaves_price_fully_absent() {
        let engine = Extractor::new();
        let record = engine.extract_html(
            "<html><body><p>a page about nothing</p></body></html>",
            &SelectorMapping::new(),
        );

        assert_eq!(record.price.raw, None);
        assert_eq!(record.price.amount, None);
        assert_eq!(record.price.currency, None);
    }

    #[tokio::test]
    async fn test_no_input_is_an_error() {
        let engine = Extractor::new();
        let err = engine.extract(&ExtractionRequest::default()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::NoInput));
    }

    #[tokio::test]
    async fn test_inline_html_wins_over_url() {
        // the bogus URL would fail to fetch; precedence means it is never tried
        let engine = Extractor::new();
        let request = ExtractionRequest {
            url: Some("http://127.0.0.1:1/unreachable".to_string()),
            html: Some(fixtures::PLAIN_PRODUCT_PAGE.to_string()),
            ..ExtractionRequest::default()
        };

        let record = engine.extract(&request).await.unwrap();
        assert_eq!(record.title.as_deref(), Some("Plain"));
    }

    #[tokio::test]
    async fn test_oracle_mapping_is_applied() {
        let mapping = SelectorMapping::new().with("title", "span.sku-name");
        let oracle = Arc::new(MockOracle::returning(mapping));
        let engine = Extractor::new().with_oracle(oracle.clone());

        let request = ExtractionRequest::for_html(
            r#"<html><body><span class="sku-name">Oracle Pick</span><h1>Heuristic Pick</h1></body></html>"#,
        )
        .with_ai_inference(true);

        let record = engine.extract(&request).await.unwrap();
        assert_eq!(record.title.as_deref(), Some("Oracle Pick"));
        assert_eq!(oracle.call_count(), 1);
    }

    #[tokio::test]
    async fn test_oracle_failure_degrades_to_heuristics() {
        let oracle = Arc::new(MockOracle::failing());
        let engine = Extractor::new().with_oracle(oracle.clone());

        let request = ExtractionRequest::for_html(fixtures::PLAIN_PRODUCT_PAGE.to_string())
            .with_ai_inference(true);

        let record = engine.extract(&request).await.unwrap();
        assert_eq!(record.title.as_deref(), Some("Plain"));
        assert_eq!(oracle.call_count(), 1);
    }

    #[tokio::test]
    async fn test_supplied_mapping_skips_the_oracle() {
        let oracle = Arc::new(MockOracle::returning(SelectorMapping::new()));
        let engine = Extractor::new().with_oracle(oracle.clone());

        let request = ExtractionRequest::for_html(fixtures::PLAIN_PRODUCT_PAGE.to_string())
            .with_mapping(SelectorMapping::new().with("title", "title"))
            .with_ai_inference(true);

        engine.extract(&request).await.unwrap();
        assert_eq!(oracle.call_count(), 0);
    }

    #[test]
    fn test_specs_prefer_tables_over_lists() {
        let engine = Extractor::new();
        let record = engine.extract_html(fixtures::RICH_PRODUCT_PAGE, &SelectorMapping::new());

        assert_eq!(record.specs.get("Weight").map(String::as_str), Some("2 kg"));
        assert!(!record.specs.values().any(|v| v == "Ships flat"));
    }
}
