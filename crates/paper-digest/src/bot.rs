//! Pipeline orchestrator.

use crate::config::defaults;
use crate::enricher::SemanticScholarClient;
use crate::error::ConfigError;
use crate::fetcher::{ArxivFetcher, FetchOptions};
use crate::filter::filter_by_min_citations;
use crate::notifiers::{Notifier, SlackNotifier};

/// Construction options for [`PaperBot`].
///
/// Only `arxiv_query` is required; everything else falls back to the
/// defaults in [`crate::config`]. A notifier can be injected directly, or a
/// Slack webhook URL can be supplied as a shorthand for the common case.
#[derive(Default)]
pub struct PaperBotOptions {
    /// Search query in the arXiv query grammar.
    pub arxiv_query: String,

    /// Cap on fetched papers (default 20).
    pub max_papers: Option<u32>,

    /// Lookback window in days (default 1; advisory, see [`FetchOptions`]).
    pub days_back: Option<u32>,

    /// Citation threshold (default 0, which filters nothing).
    pub min_citations: Option<u32>,

    /// Injected delivery channel.
    pub notifier: Option<Box<dyn Notifier>>,

    /// Fallback: build a [`SlackNotifier`] from this webhook URL when no
    /// notifier is injected.
    pub slack_webhook_url: Option<String>,

    /// Semantic Scholar API key (optional, raises rate limits).
    pub semantic_scholar_api_key: Option<String>,

    /// Override the arXiv endpoint (for testing with mock servers).
    pub arxiv_api_url: Option<String>,

    /// Override the Graph API endpoint (for testing with mock servers).
    pub graph_api_url: Option<String>,
}

/// Sequences one fetch → enrich → filter → notify pass.
pub struct PaperBot {
    fetcher: ArxivFetcher,
    scholar: SemanticScholarClient,
    notifier: Box<dyn Notifier>,
    min_citations: u32,
}

impl PaperBot {
    /// Build the pipeline from options.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingNotifier`] when neither a notifier nor
    /// a Slack webhook URL is supplied. This is the one hard failure in the
    /// whole system; everything downstream degrades instead of failing.
    pub fn new(options: PaperBotOptions) -> Result<Self, ConfigError> {
        let notifier: Box<dyn Notifier> = match (options.notifier, options.slack_webhook_url) {
            (Some(notifier), _) => notifier,
            (None, Some(webhook_url)) => Box::new(SlackNotifier::new(webhook_url)),
            (None, None) => return Err(ConfigError::MissingNotifier),
        };

        let fetch_options = FetchOptions {
            max_results: options.max_papers.unwrap_or(defaults::MAX_RESULTS),
            days_back: options.days_back.unwrap_or(defaults::DAYS_BACK),
        };
        let mut fetcher = ArxivFetcher::new(options.arxiv_query, fetch_options);
        if let Some(url) = options.arxiv_api_url {
            fetcher = fetcher.with_base_url(url);
        }

        let mut scholar = SemanticScholarClient::new(options.semantic_scholar_api_key);
        if let Some(url) = options.graph_api_url {
            scholar = scholar.with_base_url(url);
        }

        Ok(Self {
            fetcher,
            scholar,
            notifier,
            min_citations: options.min_citations.unwrap_or(defaults::MIN_CITATIONS),
        })
    }

    /// Run one pipeline pass. Returns the overall success signal.
    ///
    /// An empty fetch and an empty post-filter set both count as success;
    /// "nothing to report" is not a failure. Otherwise the result is the
    /// notifier's own verdict.
    pub async fn run(&self) -> bool {
        let papers = self.fetcher.fetch_papers().await;
        if papers.is_empty() {
            tracing::info!("no papers found");
            return true;
        }

        // One lookup per paper, sequential, in fetch order. Each lookup
        // settles (count or 0) before the pipeline proceeds.
        let mut enriched = Vec::with_capacity(papers.len());
        for paper in papers {
            let count = self.scholar.get_citation_count(&paper.arxiv_id).await;
            enriched.push(paper.with_citation_count(count));
        }

        let before = enriched.len();
        let filtered = filter_by_min_citations(enriched, self.min_citations);
        if filtered.len() < before {
            tracing::info!(
                before,
                after = filtered.len(),
                min_citations = self.min_citations,
                "citation filter applied"
            );
        }
        if filtered.is_empty() {
            tracing::info!("no papers after filtering");
            return true;
        }

        self.notifier.send(&filtered).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_requires_a_delivery_channel() {
        let result = PaperBot::new(PaperBotOptions {
            arxiv_query: "cat:cs.AI".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(ConfigError::MissingNotifier)));
    }

    #[test]
    fn test_webhook_url_is_enough_to_construct() {
        let result = PaperBot::new(PaperBotOptions {
            arxiv_query: "cat:cs.AI".to_string(),
            slack_webhook_url: Some("https://hooks.slack.invalid/services/T/B/x".to_string()),
            ..Default::default()
        });
        assert!(result.is_ok());
    }
}
