//! Error types for the paper digest pipeline.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. `ClientError` only travels through the internal fallible
//! paths: every public contract absorbs it into a safe default (empty set,
//! zero count, `false`). `ConfigError` is the one fatal category.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
    },

    /// JSON parsing error
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Atom feed parsing error
    #[error("failed to parse feed: {0}")]
    Feed(#[from] quick_xml::Error),
}

impl ClientError {
    /// Create an unexpected-status error.
    #[must_use]
    pub fn unexpected_status(status: u16) -> Self {
        Self::UnexpectedStatus { status }
    }
}

/// Fatal configuration errors raised at construction time.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// No delivery channel could be resolved.
    #[error("either a notifier or a Slack webhook URL is required")]
    MissingNotifier,

    /// A channel was selected but its credentials are incomplete.
    #[error("missing credentials for {channel} notifications: {detail}")]
    MissingCredentials {
        /// Selected channel name
        channel: String,
        /// Which settings are required
        detail: String,
    },
}

impl ConfigError {
    /// Create a missing-credentials error.
    #[must_use]
    pub fn missing_credentials(channel: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MissingCredentials { channel: channel.into(), detail: detail.into() }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
