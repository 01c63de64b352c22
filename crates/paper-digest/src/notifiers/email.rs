//! Resend transactional-email notifier.
//!
//! Delivery goes through a plain authorized POST to the Resend `/emails`
//! endpoint. A send counts as successful only when the response carries a
//! result id.

use serde::Deserialize;
use serde_json::json;

use crate::config::{api, display};
use crate::models::Paper;

use super::{Notifier, digest_date, truncate};

/// Credentials and addressing for email delivery.
#[derive(Debug, Clone)]
pub struct EmailOptions {
    /// Resend API key.
    pub api_key: String,

    /// Sender address.
    pub from: String,

    /// Recipient address.
    pub to: String,
}

/// Delivers the digest as an HTML email via Resend.
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    client: reqwest::Client,
    base_url: String,
    options: EmailOptions,
}

/// Wire shape of a successful Resend send.
#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: Option<String>,
}

impl EmailNotifier {
    /// Create a notifier with the given credentials.
    #[must_use]
    pub fn new(options: EmailOptions) -> Self {
        Self { client: reqwest::Client::new(), base_url: api::RESEND_API.to_string(), options }
    }

    /// Override the API endpoint (for testing with mock servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn try_send(&self, papers: &[Paper]) -> Option<String> {
        let subject = format!("📄 {} paper digest ({} papers)", digest_date(), papers.len());
        let body = json!({
            "from": self.options.from,
            "to": [self.options.to],
            "subject": subject,
            "html": build_html(papers),
        });

        let response = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(&self.options.api_key)
            .json(&body)
            .timeout(api::REQUEST_TIMEOUT)
            .send()
            .await
            .ok()?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Resend rejected the digest");
            return None;
        }

        response.json::<SendResponse>().await.ok()?.id
    }
}

#[async_trait::async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, papers: &[Paper]) -> bool {
        if papers.is_empty() {
            tracing::info!("no papers to deliver, skipping email send");
            return true;
        }

        match self.try_send(papers).await {
            Some(id) => {
                tracing::info!(count = papers.len(), email_id = %id, "delivered digest by email");
                true
            }
            None => {
                tracing::warn!("email delivery failed");
                false
            }
        }
    }
}

/// Render the HTML digest. Title, authors, and summary are user-controlled
/// text and must be escaped against markup injection.
fn build_html(papers: &[Paper]) -> String {
    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <style>
    body {{ font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; }}
    .paper {{ margin-bottom: 24px; padding: 16px; border: 1px solid #e0e0e0; border-radius: 8px; }}
    .title {{ font-size: 18px; font-weight: bold; margin-bottom: 8px; }}
    .authors {{ color: #666; font-size: 14px; margin-bottom: 8px; }}
    .summary {{ font-size: 14px; line-height: 1.6; margin-bottom: 8px; }}
    .links a {{ color: #0066cc; text-decoration: none; margin-right: 16px; }}
    .citation {{ color: #0066cc; font-weight: bold; }}
  </style>
</head>
<body>
  <h2>{} paper digest ({} papers)</h2>
"#,
        digest_date(),
        papers.len()
    );

    for (i, paper) in papers.iter().enumerate() {
        let citation_info = if paper.has_citations() {
            format!(r#" <span class="citation">{} citations</span>"#, paper.citations())
        } else {
            String::new()
        };

        let summary = truncate(&paper.summary, display::SUMMARY_MAX_CHARS);

        html.push_str(&format!(
            r#"  <div class="paper">
    <div class="title">{index}. {title}</div>
    <div class="authors">{authors}</div>
    <div class="summary">{summary}{citations}</div>
    <div class="links">
      <a href="{url}">arXiv</a>
      <a href="{pdf}">PDF</a>
    </div>
  </div>
"#,
            index = i + 1,
            title = escape_html(&paper.title),
            authors = escape_html(&paper.author_line(display::AUTHOR_DISPLAY_CAP)),
            summary = escape_html(&summary),
            citations = citation_info,
            url = paper.url,
            pdf = paper.pdf_url,
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
