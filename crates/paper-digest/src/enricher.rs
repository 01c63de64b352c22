//! Semantic Scholar citation enrichment.

use serde::Deserialize;

use crate::config::api;
use crate::error::{ClientError, ClientResult};

/// Client for the Semantic Scholar Graph API.
#[derive(Clone)]
pub struct SemanticScholarClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

/// Wire shape of a citation-count lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CitationResponse {
    #[serde(default)]
    citation_count: Option<u32>,
}

impl SemanticScholarClient {
    /// Create a new client with an optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self { client: reqwest::Client::new(), base_url: api::GRAPH_API.to_string(), api_key }
    }

    /// Override the API endpoint (for testing with mock servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Look up the citation count for an arXiv id.
    ///
    /// Every failure mode collapses to 0: non-success status, transport
    /// error, and a success response lacking the field. "Paper not found"
    /// and "service unreachable" are business-equivalent here, so neither
    /// is surfaced to the caller.
    pub async fn get_citation_count(&self, arxiv_id: &str) -> u32 {
        match self.try_get_citation_count(arxiv_id).await {
            Ok(count) => count,
            Err(err) => {
                tracing::debug!(arxiv_id, error = %err, "citation lookup failed, defaulting to 0");
                0
            }
        }
    }

    async fn try_get_citation_count(&self, arxiv_id: &str) -> ClientResult<u32> {
        let url = format!("{}/paper/arXiv:{}", self.base_url, arxiv_id);

        let mut request = self
            .client
            .get(&url)
            .query(&[("fields", "citationCount")])
            .timeout(api::REQUEST_TIMEOUT);

        if let Some(ref key) = self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::unexpected_status(status.as_u16()));
        }

        let body: CitationResponse = response.json().await?;
        Ok(body.citation_count.unwrap_or(0))
    }
}

impl std::fmt::Debug for SemanticScholarClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScholarClient").field("has_api_key", &self.has_api_key()).finish()
    }
}
