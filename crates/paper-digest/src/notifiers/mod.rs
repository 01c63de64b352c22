//! Delivery channels for the rendered digest.
//!
//! Both variants share one contract: `send` returns whether delivery is
//! considered successful, never raises past the boundary, and treats an
//! empty paper set as "nothing to report", which is success with no
//! outbound call.

use std::borrow::Cow;

use chrono::Utc;

use crate::models::Paper;

mod email;
mod slack;

pub use email::{EmailNotifier, EmailOptions};
pub use slack::SlackNotifier;

/// A delivery channel for a set of papers.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a digest of the given papers. Returns `true` on success.
    async fn send(&self, papers: &[Paper]) -> bool;
}

/// Truncate to `max_chars` display characters with an ellipsis marker.
pub(crate) fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().count() <= max_chars {
        return Cow::Borrowed(text);
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    Cow::Owned(format!("{cut}..."))
}

/// Date line shown in digest headers.
pub(crate) fn digest_date() -> String {
    Utc::now().format("%Y/%m/%d").to_string()
}
