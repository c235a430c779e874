//! Gemini implementation of the selector oracle.
//!
//! Calls the Generative Language REST API asking for a JSON object that maps
//! `title`, `price` and `availability` to CSS selectors. Candidate models
//! are tried in order until one yields a parseable mapping; per-model errors
//! are collected and surfaced together when every candidate fails.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{OracleError, OracleResult};
use crate::traits::oracle::SelectorOracle;
use crate::types::config::OracleConfig;
use crate::types::request::SelectorMapping;

/// Gemini-backed selector oracle.
///
/// # Example
///
/// ```rust,ignore
/// use extractor::{GeminiOracle, OracleConfig};
///
/// let oracle = GeminiOracle::new(OracleConfig::from_env()?);
/// let mapping = oracle.infer_selectors(&html).await?;
/// ```
pub struct GeminiOracle {
    client: Client,
    config: OracleConfig,
}

impl GeminiOracle {
    /// Build an oracle over the given configuration.
    pub fn new(config: OracleConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");
        Self { client, config }
    }

    /// Build from `GEMINI_API_KEY` / `GEMINI_MODEL`.
    pub fn from_env() -> OracleResult<Self> {
        Ok(Self::new(OracleConfig::from_env()?))
    }

    fn build_prompt(html: &str, prefix_chars: usize) -> String {
        let prefix = truncate_chars(html, prefix_chars);
        format!(
            "You are an expert HTML analyst. Given the following HTML, identify the correct CSS selectors \
             for three elements: product title, product price, and availability. \
             Respond ONLY as a JSON object with keys: title, price, availability.\n\n\
             Example output: {{\"title\": \"h1.product-title\", \"price\": \"span.price\", \"availability\": \"#stock\"}}\n\n\
             HTML:\n{prefix}"
        )
    }

    async fn generate(&self, model: &str, prompt: &str) -> OracleResult<String> {
        let url = format!("{}/models/{}:generateContent", self.config.base_url, model);
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.config.api_key.expose())
            .json(&request)
            .send()
            .await
            .map_err(|e| OracleError::Http(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Http(
                format!("HTTP {status}: {body}").into(),
            ));
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| OracleError::Http(Box::new(e)))?;

        let text = body.text();
        if text.is_empty() {
            return Err(OracleError::EmptyResponse);
        }
        Ok(text)
    }
}

#[async_trait]
impl SelectorOracle for GeminiOracle {
    async fn infer_selectors(&self, html: &str) -> OracleResult<SelectorMapping> {
        if self.config.api_key.expose().is_empty() {
            return Err(OracleError::MissingCredential);
        }

        let prompt = Self::build_prompt(html, self.config.html_prefix_chars);
        let mut failures: Vec<String> = Vec::new();

        for model in self.config.candidates() {
            debug!(model, "trying selector inference model");
            let attempt = self.generate(model, &prompt).await;
            match attempt.and_then(|text| parse_mapping(&text)) {
                Ok(mapping) => {
                    debug!(model, fields = mapping.len(), "model produced a selector mapping");
                    return Ok(mapping);
                }
                Err(e) => {
                    debug!(model, error = %e, "model attempt failed");
                    failures.push(format!("{model}: {e}"));
                }
            }
        }

        let summary = failures.join("; ");
        warn!(summary = %summary, "all selector inference models failed");
        Err(OracleError::Exhausted { summary })
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

/// Parse model output into a mapping, tolerating fenced code blocks.
fn parse_mapping(text: &str) -> OracleResult<SelectorMapping> {
    let payload = strip_fences(text).trim();
    if payload.is_empty() {
        return Err(OracleError::EmptyResponse);
    }
    Ok(serde_json::from_str(payload)?)
}

/// Strip a ```json or bare ``` fence wrapper, if any.
fn strip_fences(text: &str) -> &str {
    if let Some(start) = text.find("```json") {
        let rest = &text[start + 7..];
        return rest.split("```").next().unwrap_or(rest);
    }
    if let Some(start) = text.find("```") {
        let rest = &text[start + 3..];
        return rest.split("```").next().unwrap_or(rest);
    }
    text
}

/// Char-boundary-safe prefix of at most `max_chars` characters.
fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

impl GenerateResponse {
    /// Concatenated text across candidates and parts, trimmed.
    fn text(&self) -> String {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|content| content.parts.iter())
            .map(|part| part.text.as_str())
            .collect::<String>()
            .trim()
            .to_string()
    }
}
