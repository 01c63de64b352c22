//! Research-paper digest bot.
//!
//! Polls a research-paper feed, enriches each result with a citation count
//! from the Semantic Scholar Graph API, filters by a citation threshold,
//! and delivers a digest of the survivors to Slack or email.
//!
//! The whole thing is one stateless pipeline per invocation: fetch →
//! enrich → filter → notify. Remote failures are absorbed into safe
//! defaults at each stage; the only hard failure is a missing delivery
//! channel at construction time.
//!
//! # Example
//!
//! ```no_run
//! use paper_digest::{PaperBot, PaperBotOptions};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let bot = PaperBot::new(PaperBotOptions {
//!         arxiv_query: "cat:cs.AI OR cat:cs.LG".to_string(),
//!         min_citations: Some(10),
//!         slack_webhook_url: std::env::var("SLACK_WEBHOOK_URL").ok(),
//!         ..Default::default()
//!     })?;
//!
//!     let success = bot.run().await;
//!     std::process::exit(i32::from(!success));
//! }
//! ```

pub mod bot;
pub mod config;
pub mod enricher;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod models;
pub mod notifiers;

pub use bot::{PaperBot, PaperBotOptions};
pub use enricher::SemanticScholarClient;
pub use error::{ClientError, ConfigError};
pub use fetcher::{ArxivFetcher, FetchOptions, HuggingFaceFetcher};
pub use filter::filter_by_min_citations;
pub use models::Paper;
pub use notifiers::{EmailNotifier, EmailOptions, Notifier, SlackNotifier};
