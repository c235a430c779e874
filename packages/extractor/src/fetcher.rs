//! Retrying HTML fetcher.
//!
//! Wraps `reqwest` with bounded retries and linear backoff. Every call
//! performs network I/O; the engine never caches fetched documents, and no
//! connection outlives a single `fetch` call beyond the client's pool.

use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::types::config::FetchConfig;

/// A fetched page: the URL as requested, the final URL after redirects, and
/// the body decoded per the server-declared (or detected) encoding.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub requested_url: String,
    pub final_url: String,
    pub html: String,
}

/// HTTP fetcher with bounded retries and linear backoff.
///
/// # Example
///
/// ```rust,ignore
/// use extractor::{FetchConfig, Fetcher};
///
/// let fetcher = Fetcher::with_config(FetchConfig::new().with_retries(5));
/// let page = fetcher.fetch("https://example.com/product/1").await?;
/// ```
pub struct Fetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher {
    /// Create a fetcher with default settings.
    pub fn new() -> Self {
        Self::with_config(FetchConfig::default())
    }

    /// Create a fetcher with the given config.
    pub fn with_config(config: FetchConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { client, config }
    }

    /// Replace the HTTP client (for custom TLS or proxy setups).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Fetch a page, retrying transport failures with linear backoff.
    ///
    /// Attempts are numbered from 1; after a failed attempt `n` the fetcher
    /// sleeps `backoff * n` before the next one. Once the budget is spent
    /// the last transport error is surfaced; no partial result is returned.
    pub async fn fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        Url::parse(url).map_err(|_| FetchError::InvalidUrl {
            url: url.to_string(),
        })?;

        let attempts = self.config.retries.max(1);
        let mut attempt = 1;

        loop {
            debug!(url, attempt, "fetch attempt");
            match self.try_fetch(url).await {
                Ok(page) => {
                    debug!(url, final_url = %page.final_url, bytes = page.html.len(), "fetch succeeded");
                    return Ok(page);
                }
                Err(e) => {
                    warn!(url, attempt, error = %e, "fetch attempt failed");
                    if attempt >= attempts {
                        return Err(FetchError::Exhausted {
                            url: url.to_string(),
                            attempts,
                            last: Box::new(e),
                        });
                    }
                    let delay = self.config.backoff * attempt;
                    debug!(url, delay_ms = delay.as_millis() as u64, "backing off");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> FetchResult<FetchedPage> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, &self.config.user_agent)
            .send()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let final_url = response.url().to_string();
        let html = response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok(FetchedPage {
            requested_url: url.to_string(),
            final_url,
            html,
        })
    }
}
