//! Configuration for the fetcher and the selector oracle.
//!
//! Values are injected at construction time; environment reads happen once
//! at process startup, never mid-run.

use std::fmt;
use std::time::Duration;

use crate::error::{OracleError, OracleResult};
use crate::security::SecretString;

/// Browser-like default User-Agent for live fetches.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Known-public Gemini models tried after the configured preference.
pub const DEFAULT_ORACLE_MODELS: [&str; 5] = [
    "gemini-1.5-flash-latest",
    "gemini-1.5-flash",
    "gemini-1.5-flash-001",
    "gemini-1.0-pro",
    "gemini-pro",
];

/// Fetcher tuning.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-attempt timeout
    pub timeout: Duration,

    /// Total attempts before the last transport error surfaces
    pub retries: u32,

    /// Base backoff; attempt `n` sleeps `backoff * n` before the next try
    pub backoff: Duration,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            retries: 3,
            backoff: Duration::from_secs(1),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the total attempt budget.
    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Set the base backoff duration.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Selector oracle connection settings.
///
/// The candidate model list is configuration data, not logic; pruning stale
/// identifiers is an operational concern.
#[derive(Clone)]
pub struct OracleConfig {
    /// API key (secret)
    pub api_key: SecretString,

    /// Preferred model tried before the fallback list
    pub preferred_model: Option<String>,

    /// Fallback model candidates, in order
    pub models: Vec<String>,

    /// API base URL
    pub base_url: String,

    /// Whole-call HTTP timeout per model attempt
    pub timeout: Duration,

    /// Number of HTML characters embedded in the prompt
    pub html_prefix_chars: usize,
}

impl OracleConfig {
    /// Create a config with the given API key and default candidates.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key),
            preferred_model: None,
            models: DEFAULT_ORACLE_MODELS.iter().map(|m| m.to_string()).collect(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout: Duration::from_secs(30),
            html_prefix_chars: 6000,
        }
    }

    /// Read `GEMINI_API_KEY` and the optional `GEMINI_MODEL` preference from
    /// the environment.
    pub fn from_env() -> OracleResult<Self> {
        let api_key =
            std::env::var("GEMINI_API_KEY").map_err(|_| OracleError::MissingCredential)?;
        if api_key.is_empty() {
            return Err(OracleError::MissingCredential);
        }
        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            if !model.is_empty() {
                config.preferred_model = Some(model);
            }
        }
        Ok(config)
    }

    /// Set the preferred model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.preferred_model = Some(model.into());
        self
    }

    /// Replace the fallback candidate list.
    pub fn with_models(mut self, models: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.models = models.into_iter().map(|m| m.into()).collect();
        self
    }

    /// Set a custom base URL (for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Models to try, preference first.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.preferred_model
            .as_deref()
            .into_iter()
            .chain(self.models.iter().map(String::as_str))
    }
}

impl fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleConfig")
            .field("api_key", &"[REDACTED]")
            .field("preferred_model", &self.preferred_model)
            .field("models", &self.models)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("html_prefix_chars", &self.html_prefix_chars)
            .finish()
    }
}
