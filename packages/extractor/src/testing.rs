//! Testing utilities including mock implementations.
//!
//! Useful for exercising the pipeline without real model or network calls.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{OracleError, OracleResult};
use crate::traits::oracle::SelectorOracle;
use crate::types::request::SelectorMapping;

/// A mock selector oracle with a canned outcome and call tracking.
pub struct MockOracle {
    mapping: SelectorMapping,
    fail: bool,
    calls: RwLock<Vec<usize>>,
}

impl MockOracle {
    /// An oracle that always returns the given mapping.
    pub fn returning(mapping: SelectorMapping) -> Self {
        Self {
            mapping,
            fail: false,
            calls: RwLock::new(Vec::new()),
        }
    }

    /// An oracle that always returns an empty mapping.
    pub fn empty() -> Self {
        Self::returning(SelectorMapping::new())
    }

    /// An oracle that always fails, like a provider outage.
    pub fn failing() -> Self {
        Self {
            mapping: SelectorMapping::new(),
            fail: true,
            calls: RwLock::new(Vec::new()),
        }
    }

    /// Number of `infer_selectors` calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl SelectorOracle for MockOracle {
    async fn infer_selectors(&self, html: &str) -> OracleResult<SelectorMapping> {
        self.calls.write().unwrap().push(html.len());
        if self.fail {
            return Err(OracleError::Exhausted {
                summary: "mock: configured to fail".to_string(),
            });
        }
        Ok(self.mapping.clone())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Shared HTML fixtures for pipeline tests.
pub mod fixtures {
    /// The minimal product page: heuristics find every field.
    pub const PLAIN_PRODUCT_PAGE: &str = "<html><head><title>Plain</title></head>\
        <body><span class=\"price\">$19.99</span><p>In stock now</p></body></html>";

    /// A fuller page: og:title, classed price, spec table and a marketing
    /// list that must lose to the table.
    pub const RICH_PRODUCT_PAGE: &str = r#"<html>
<head>
    <meta property="og:title" content="Aurora Desk Lamp">
    <title>Aurora Desk Lamp - Shop</title>
</head>
<body>
    <h1>Aurora Desk Lamp</h1>
    <span class="price">$1,299.99</span>
    <p>Currently in stock and ready to ship.</p>
    <ul>
        <li>Ships flat</li>
        <li>Easy assembly</li>
    </ul>
    <table>
        <tr><th>Weight</th><td>2 kg</td></tr>
        <tr><th>Color</th><td>Brushed steel</td></tr>
    </table>
</body>
</html>"#;
}
