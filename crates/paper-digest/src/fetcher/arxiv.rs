//! arXiv feed fetcher.
//!
//! Queries the arXiv Atom API sorted by submission date and parses each
//! `entry` element into a [`Paper`]. Parsing uses a quick-xml event loop
//! (Atom namespaces make regex parsing brittle) and matches on local names
//! so prefixed tags (opensearch, arxiv) are handled uniformly.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;
use regex::Regex;

use crate::config::{api, defaults};
use crate::error::ClientResult;
use crate::models::Paper;

/// Numeric arXiv id as it appears in abstract-page URLs.
static ARXIV_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+\.\d+)").expect("valid arXiv id pattern"));

/// Fetch bounds for a single run.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    /// Maximum number of entries requested from the feed.
    pub max_results: u32,

    /// Lookback window in days. Advisory: the feed query sorts by
    /// submission date but does not filter by it.
    pub days_back: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self { max_results: defaults::MAX_RESULTS, days_back: defaults::DAYS_BACK }
    }
}

/// Fetcher for the arXiv Atom query API.
#[derive(Debug, Clone)]
pub struct ArxivFetcher {
    client: reqwest::Client,
    base_url: String,
    query: String,
    options: FetchOptions,
}

impl ArxivFetcher {
    /// Create a fetcher for the given search query.
    #[must_use]
    pub fn new(query: impl Into<String>, options: FetchOptions) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: api::ARXIV_API.to_string(),
            query: query.into(),
            options,
        }
    }

    /// Override the feed endpoint (for testing with mock servers).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch candidate papers, newest submissions first.
    ///
    /// Any failure (network error, non-success status, unparseable feed)
    /// yields an empty set, never an error.
    pub async fn fetch_papers(&self) -> Vec<Paper> {
        tracing::debug!(query = %self.query, max_results = self.options.max_results, "querying arXiv");

        match self.try_fetch().await {
            Ok(papers) => {
                tracing::info!(count = papers.len(), "fetched papers from arXiv");
                papers
            }
            Err(err) => {
                tracing::warn!(error = %err, "arXiv fetch failed, returning empty set");
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self) -> ClientResult<Vec<Paper>> {
        let max_results = self.options.max_results.to_string();
        let params = [
            ("search_query", self.query.as_str()),
            ("start", "0"),
            ("max_results", max_results.as_str()),
            ("sortBy", "submittedDate"),
            ("sortOrder", "descending"),
        ];

        let response = self
            .client
            .get(&self.base_url)
            .query(&params)
            .timeout(api::REQUEST_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(crate::error::ClientError::unexpected_status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_feed(&body)
    }
}

/// Accumulator for the entry currently being parsed.
#[derive(Default)]
struct EntryFields {
    title: String,
    summary: String,
    published: String,
    id: String,
    authors: Vec<String>,
    in_author: bool,
    text: String,
}

impl EntryFields {
    fn into_paper(self) -> Paper {
        let url = self.id.trim().to_string();
        let pdf_url = format!("{}.pdf", url.replace("/abs/", "/pdf/"));
        let arxiv_id = extract_arxiv_id(&url);
        let published = DateTime::parse_from_rfc3339(self.published.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_default();

        Paper {
            title: self.title.trim().to_string(),
            authors: self.authors,
            summary: normalize_whitespace(&self.summary),
            published,
            url,
            pdf_url,
            arxiv_id,
            citation_count: None,
            ai_summary: None,
        }
    }
}

/// Parse an Atom feed document into papers, one per `entry`.
fn parse_feed(xml: &str) -> ClientResult<Vec<Paper>> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut papers = Vec::new();
    let mut entry: Option<EntryFields> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Eof => break,
            Event::Start(e) => match e.local_name().as_ref() {
                b"entry" => entry = Some(EntryFields::default()),
                b"author" => {
                    if let Some(cur) = entry.as_mut() {
                        cur.in_author = true;
                        cur.text.clear();
                    }
                }
                _ => {
                    if let Some(cur) = entry.as_mut() {
                        cur.text.clear();
                    }
                }
            },
            Event::Text(t) => {
                if let Some(cur) = entry.as_mut() {
                    let text = t.unescape().map(|s| s.to_string()).unwrap_or_default();
                    cur.text.push_str(&text);
                }
            }
            Event::End(e) => {
                if e.local_name().as_ref() == b"entry" {
                    if let Some(done) = entry.take() {
                        papers.push(done.into_paper());
                    }
                } else if let Some(cur) = entry.as_mut() {
                    match e.local_name().as_ref() {
                        b"author" => cur.in_author = false,
                        b"name" if cur.in_author => {
                            let name = cur.text.trim();
                            if !name.is_empty() {
                                cur.authors.push(name.to_string());
                            }
                        }
                        b"title" => cur.title = cur.text.clone(),
                        b"summary" => cur.summary = cur.text.clone(),
                        b"published" => cur.published = cur.text.clone(),
                        b"id" if !cur.in_author => cur.id = cur.text.clone(),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(papers)
}

/// Extract the numeric arXiv id from an abstract-page URL.
/// Returns an empty string when no id is present; that is not fatal.
fn extract_arxiv_id(url: &str) -> String {
    ARXIV_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Collapse runs of whitespace into single spaces and trim.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
