//! Hugging Face daily-papers fetcher.
//!
//! The daily feed is already popularity-scored, so `citation_count` is
//! seeded from upvotes and the set needs no separate enrichment pass.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::config::api;
use crate::error::ClientResult;
use crate::models::Paper;

/// Fetcher for the Hugging Face daily-papers JSON feed.
#[derive(Debug, Clone)]
pub struct HuggingFaceFetcher {
    client: reqwest::Client,
    base_url: String,
    limit: u32,
}

/// Paper payload within a daily-feed item.
#[derive(Debug, Deserialize)]
struct HfPaper {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    authors: Vec<HfAuthor>,
    #[serde(default, rename = "publishedAt")]
    published_at: String,
    #[serde(default)]
    upvotes: u32,
    #[serde(default)]
    ai_summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct HfAuthor {
    #[serde(default)]
    name: String,
}

impl HuggingFaceFetcher {
    /// Create a fetcher bounded to `limit` feed items.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: api::HUGGINGFACE_API.to_string(),
            limit,
        }
    }

    /// Override the feed endpoint (for testing with mock servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch daily papers, most upvoted first, optionally keyword-filtered.
    ///
    /// Same failure policy as the arXiv fetcher: any fetch or parse failure
    /// yields an empty set.
    pub async fn fetch_papers(&self, keyword: Option<&str>) -> Vec<Paper> {
        tracing::debug!(limit = self.limit, keyword = ?keyword, "querying Hugging Face daily papers");

        match self.try_fetch().await {
            Ok(items) => {
                let papers: Vec<Paper> = items
                    .into_iter()
                    .filter_map(into_paper)
                    .filter(|p| matches_keyword(p, keyword))
                    .collect();
                tracing::info!(count = papers.len(), "fetched papers from Hugging Face");
                papers
            }
            Err(err) => {
                tracing::warn!(error = %err, "Hugging Face fetch failed, returning empty set");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> ClientResult<Vec<serde_json::Value>> {
        let url = format!("{}/api/daily_papers", self.base_url);
        let limit = self.limit.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[("limit", limit.as_str())])
            .timeout(api::REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(crate::error::ClientError::unexpected_status(status.as_u16()));
        }

        Ok(response.json().await?)
    }
}

/// Convert one feed item into a paper.
///
/// Items wrap the paper under a `paper` key or carry its fields inline;
/// entries whose id is not arXiv-shaped (no dot) are skipped.
fn into_paper(item: serde_json::Value) -> Option<Paper> {
    let payload = item.get("paper").cloned().unwrap_or(item);
    let hf: HfPaper = serde_json::from_value(payload).ok()?;

    if !hf.id.contains('.') {
        return None;
    }

    let published = DateTime::parse_from_rfc3339(hf.published_at.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_default();

    Some(Paper {
        title: hf.title.trim().to_string(),
        authors: hf
            .authors
            .into_iter()
            .map(|a| a.name)
            .filter(|name| !name.is_empty())
            .collect(),
        summary: hf.summary.split_whitespace().collect::<Vec<_>>().join(" "),
        published,
        url: format!("https://huggingface.co/papers/{}", hf.id),
        pdf_url: format!("https://arxiv.org/pdf/{}.pdf", hf.id),
        arxiv_id: hf.id,
        citation_count: Some(hf.upvotes),
        ai_summary: hf.ai_summary,
    })
}

fn matches_keyword(paper: &Paper, keyword: Option<&str>) -> bool {
    let Some(keyword) = keyword else { return true };
    let keyword = keyword.to_lowercase();
    paper.title.to_lowercase().contains(&keyword) || paper.summary.to_lowercase().contains(&keyword)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_into_paper_wrapped_item() {
        let item = json!({
            "paper": {
                "id": "2405.12345",
                "title": "Scaling RAG",
                "summary": "Retrieval  augmented\ngeneration at scale.",
                "authors": [{"name": "Carol"}, {"name": ""}],
                "publishedAt": "2024-05-20T00:00:00Z",
                "upvotes": 33,
                "ai_summary": "A short take."
            }
        });

        let paper = into_paper(item).unwrap();
        assert_eq!(paper.arxiv_id, "2405.12345");
        assert_eq!(paper.url, "https://huggingface.co/papers/2405.12345");
        assert_eq!(paper.pdf_url, "https://arxiv.org/pdf/2405.12345.pdf");
        assert_eq!(paper.authors, vec!["Carol"]);
        assert_eq!(paper.summary, "Retrieval augmented generation at scale.");
        assert_eq!(paper.citation_count, Some(33));
        assert_eq!(paper.ai_summary.as_deref(), Some("A short take."));
    }

    #[test]
    fn test_into_paper_inline_item() {
        let item = json!({"id": "2405.00001", "title": "Inline", "upvotes": 1});
        let paper = into_paper(item).unwrap();
        assert_eq!(paper.title, "Inline");
        assert_eq!(paper.citation_count, Some(1));
    }

    #[test]
    fn test_non_arxiv_ids_are_skipped() {
        let item = json!({"paper": {"id": "not-an-id", "title": "Nope"}});
        assert!(into_paper(item).is_none());
    }

    #[test]
    fn test_keyword_filter_is_case_insensitive() {
        let item = json!({"id": "2405.00002", "title": "Benchmarking RAG pipelines"});
        let paper = into_paper(item).unwrap();
        assert!(matches_keyword(&paper, Some("rag")));
        assert!(matches_keyword(&paper, None));
        assert!(!matches_keyword(&paper, Some("diffusion")));
    }
}
