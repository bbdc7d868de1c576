use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::{KnowledgeSource, LookupOutcome};
use crate::config::KnowledgeConfig;

/// Page-summary lookups against a Wikipedia REST endpoint
/// (`{base_url}/{Title_With_Underscores}` returning `{"extract": "..."}`).
pub struct WikipediaSummary {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl WikipediaSummary {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| anyhow::anyhow!("invalid knowledge base url '{base_url}': {e}"))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("knowledge base url '{base_url}' cannot carry a path");
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("brai/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn from_config(config: &KnowledgeConfig) -> anyhow::Result<Self> {
        Self::new(&config.base_url, Duration::from_millis(config.timeout_ms))
    }

    /// Build the summary URL for a question, or `None` if nothing is left
    /// once the question mark and whitespace are stripped.
    pub fn summary_url(&self, question: &str) -> Option<Url> {
        let slug = slug(question)?;
        let mut url = self.base_url.clone();
        url.path_segments_mut().ok()?.pop_if_empty().push(&slug);
        Some(url)
    }
}

/// `"Quem foi Pelé?"` → `"Quem_foi_Pelé"`.
fn slug(question: &str) -> Option<String> {
    let trimmed = question.trim().trim_end_matches('?').trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.split_whitespace().collect::<Vec<_>>().join("_"))
}

#[async_trait]
impl KnowledgeSource for WikipediaSummary {
    async fn lookup(&self, question: &str) -> LookupOutcome {
        let Some(url) = self.summary_url(question) else {
            return LookupOutcome::NotFound;
        };

        let response = match self.client.get(url.clone()).send().await {
            Ok(r) => r,
            Err(e) => {
                if e.is_timeout() {
                    warn!(
                        url = %url,
                        timeout_ms = self.timeout.as_millis() as u64,
                        "knowledge lookup timed out"
                    );
                } else {
                    warn!(url = %url, "knowledge lookup failed: {e}");
                }
                return LookupOutcome::Unreachable;
            }
        };

        let status = response.status();
        if !status.is_success() {
            if status != StatusCode::NOT_FOUND {
                warn!(url = %url, %status, "knowledge source returned an error status");
            }
            return LookupOutcome::NotFound;
        }

        let body: serde_json::Value = match response.json().await {
            Ok(v) => v,
            Err(e) if e.is_timeout() => {
                warn!(url = %url, "knowledge body timed out");
                return LookupOutcome::Unreachable;
            }
            Err(e) => {
                debug!(url = %url, "knowledge body was not JSON: {e}");
                return LookupOutcome::NotFound;
            }
        };

        match body.get("extract").and_then(|v| v.as_str()) {
            Some(extract) => LookupOutcome::Found(extract.to_string()),
            None => {
                debug!(url = %url, "knowledge response has no extract");
                LookupOutcome::NotFound
            }
        }
    }
}
