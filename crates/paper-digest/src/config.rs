//! Configuration constants and query presets for the digest bot.

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// arXiv Atom query endpoint.
    pub const ARXIV_API: &str = "https://export.arxiv.org/api/query";

    /// Semantic Scholar Graph API endpoint.
    pub const GRAPH_API: &str = "https://api.semanticscholar.org/graph/v1";

    /// Hugging Face base URL (daily papers feed lives under /api/daily_papers).
    pub const HUGGINGFACE_API: &str = "https://huggingface.co";

    /// Resend transactional email endpoint.
    pub const RESEND_API: &str = "https://api.resend.com";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Pipeline defaults, overridable from the CLI/environment.
pub mod defaults {
    /// Default arXiv search query.
    pub const QUERY: &str = "cat:cs.AI OR cat:cs.LG";

    /// Maximum papers fetched per run.
    pub const MAX_RESULTS: u32 = 20;

    /// Lookback window in days. Accepted for compatibility with the
    /// original configuration surface; the feed query does not filter by date.
    pub const DAYS_BACK: u32 = 1;

    /// Minimum citation count for a paper to survive filtering.
    pub const MIN_CITATIONS: u32 = 0;
}

/// Digest rendering knobs shared by both delivery channels.
pub mod display {
    /// Summary truncation length in characters, ellipsis included.
    pub const SUMMARY_MAX_CHARS: usize = 200;

    /// How many author names are shown before the "+others" marker.
    pub const AUTHOR_DISPLAY_CAP: usize = 3;
}

/// Named query presets.
///
/// Shorthand for common arXiv searches so a deployment does not need to
/// carry the full query grammar in its environment.
const PRESETS: &[(&str, &str)] = &[
    ("rag", "all:Retrieval-Augmented OR all:RAG OR all:'retrieval augmented'"),
    ("llm", "cat:cs.CL OR all:'Large Language Model' OR all:LLM"),
    ("agents", "all:'AI Agents' OR all:'autonomous agents' OR all:'agent systems'"),
    ("multimodal", "all:multimodal OR all:'vision language' OR all:VLM"),
    ("ai", "cat:cs.AI"),
    ("machine-learning", "cat:cs.LG"),
    ("nlp", "cat:cs.CL"),
    ("computer-vision", "cat:cs.CV"),
    ("robotics", "cat:cs.RO"),
    ("ai-ml", "cat:cs.AI OR cat:cs.LG"),
    ("all-ai", "cat:cs.AI OR cat:cs.LG OR cat:cs.CL OR cat:cs.CV"),
];

/// Look up a preset query by name (case-insensitive).
#[must_use]
pub fn preset_query(name: &str) -> Option<&'static str> {
    let name = name.to_ascii_lowercase();
    PRESETS.iter().find(|(key, _)| *key == name).map(|(_, query)| *query)
}
