//! Slack incoming-webhook notifier.

use serde_json::json;

use crate::config::{api, display};
use crate::models::Paper;

use super::{Notifier, digest_date, truncate};

/// Delivers the digest as a Block Kit message to an incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackNotifier {
    client: reqwest::Client,
    webhook_url: String,
}

impl SlackNotifier {
    /// Create a notifier posting to the given webhook URL.
    #[must_use]
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), webhook_url: webhook_url.into() }
    }
}

#[async_trait::async_trait]
impl Notifier for SlackNotifier {
    async fn send(&self, papers: &[Paper]) -> bool {
        if papers.is_empty() {
            tracing::info!("no papers to deliver, skipping Slack send");
            return true;
        }

        let payload = build_payload(papers);

        match self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .timeout(api::REQUEST_TIMEOUT)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => {
                tracing::info!(count = papers.len(), "delivered digest to Slack");
                true
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Slack webhook rejected the digest");
                false
            }
            Err(err) => {
                tracing::warn!(error = %err, "Slack delivery failed");
                false
            }
        }
    }
}

/// Build the Block Kit payload: header, then one section + divider per paper.
fn build_payload(papers: &[Paper]) -> serde_json::Value {
    let mut blocks = vec![json!({
        "type": "header",
        "text": {
            "type": "plain_text",
            "text": format!("📄 {} paper digest ({} papers)", digest_date(), papers.len()),
        }
    })];

    for (i, paper) in papers.iter().enumerate() {
        let citation_info = if paper.has_citations() {
            format!(" | {} citations", paper.citations())
        } else {
            String::new()
        };

        let text = format!(
            "*{index}. {title}*\n_{authors}_\n{summary}{citations}\n<{url}|arXiv> | <{pdf}|PDF>",
            index = i + 1,
            title = paper.title,
            authors = paper.author_line(display::AUTHOR_DISPLAY_CAP),
            summary = truncate(&paper.summary, display::SUMMARY_MAX_CHARS),
            citations = citation_info,
            url = paper.url,
            pdf = paper.pdf_url,
        );

        blocks.push(json!({
            "type": "section",
            "text": { "type": "mrkdwn", "text": text }
        }));
        blocks.push(json!({ "type": "divider" }));
    }

    json!({ "blocks": blocks })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn paper(title: &str, citation_count: Option<u32>) -> Paper {
        Paper {
            title: title.to_string(),
            authors: vec!["A".to_string(), "B".to_string(), "C".to_string(), "D".to_string()],
            summary: "s".repeat(300),
            published: DateTime::<Utc>::default(),
            url: "http://arxiv.org/abs/2301.00001".to_string(),
            pdf_url: "http://arxiv.org/pdf/2301.00001.pdf".to_string(),
            arxiv_id: "2301.00001".to_string(),
            citation_count,
            ai_summary: None,
        }
    }

    #[test]
    fn test_payload_has_header_and_per_paper_blocks() {
        let payload = build_payload(&[paper("One", Some(5)), paper("Two", Some(1))]);
        let blocks = payload["blocks"].as_array().unwrap();
        // header + 2 * (section + divider)
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[0]["type"], "header");
        assert_eq!(blocks[1]["type"], "section");
        assert_eq!(blocks[2]["type"], "divider");
    }

    #[test]
    fn test_zero_citations_are_not_shown() {
        let payload = build_payload(&[paper("Quiet", Some(0))]);
        let text = payload["blocks"][1]["text"]["text"].as_str().unwrap();
        assert!(!text.contains("citations"));
    }

    #[test]
    fn test_nonzero_citations_are_shown() {
        let payload = build_payload(&[paper("Cited", Some(12))]);
        let text = payload["blocks"][1]["text"]["text"].as_str().unwrap();
        assert!(text.contains("12 citations"));
    }

    #[test]
    fn test_summary_is_truncated_and_authors_capped() {
        let payload = build_payload(&[paper("Long", None)]);
        let text = payload["blocks"][1]["text"]["text"].as_str().unwrap();
        assert!(text.contains("..."));
        assert!(text.contains("A, B, C +others"));
        assert!(!text.contains("C, D"));
    }
}
