//! The paper record flowing through the pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single retrieved publication.
///
/// Created by a feed fetcher, enriched with a citation count, then read-only
/// through filtering and delivery. Enrichment produces a new record via
/// [`Paper::with_citation_count`] rather than mutating shared state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paper {
    /// Paper title, trimmed.
    pub title: String,

    /// Author display names in feed order. May be empty.
    #[serde(default)]
    pub authors: Vec<String>,

    /// Abstract with runs of whitespace collapsed to single spaces.
    pub summary: String,

    /// Publication instant stated by the feed. An unparseable timestamp
    /// coerces to the Unix epoch rather than failing the entry.
    pub published: DateTime<Utc>,

    /// Canonical abstract-page link on the source site.
    pub url: String,

    /// Derived PDF link. Never validated against the network.
    pub pdf_url: String,

    /// Short identifier extracted from `url`. Empty when the URL carries no
    /// recognizable id; derived once at parse time.
    pub arxiv_id: String,

    /// Citation count. `None` means not yet enriched; enrichment failures
    /// collapse to `Some(0)`, not `None`.
    #[serde(default)]
    pub citation_count: Option<u32>,

    /// Feed-provided AI summary. Carried through but never consulted by
    /// digest rendering.
    #[serde(default)]
    pub ai_summary: Option<String>,
}

impl Paper {
    /// Get the citation count, treating "not enriched" as 0.
    #[must_use]
    pub fn citations(&self) -> u32 {
        self.citation_count.unwrap_or(0)
    }

    /// Check if this paper has a known, nonzero citation count.
    #[must_use]
    pub const fn has_citations(&self) -> bool {
        matches!(self.citation_count, Some(c) if c > 0)
    }

    /// Return a copy of this paper carrying the given citation count.
    #[must_use]
    pub fn with_citation_count(self, count: u32) -> Self {
        Self { citation_count: Some(count), ..self }
    }

    /// Author names capped at `cap`, with a "+others" marker beyond that.
    #[must_use]
    pub fn author_line(&self, cap: usize) -> String {
        let mut line =
            self.authors.iter().take(cap).map(String::as_str).collect::<Vec<_>>().join(", ");
        if self.authors.len() > cap {
            line.push_str(" +others");
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_paper() -> Paper {
        Paper {
            title: "Attention Is All You Need".to_string(),
            authors: vec!["A. Vaswani".to_string(), "N. Shazeer".to_string()],
            summary: "The dominant sequence transduction models.".to_string(),
            published: DateTime::parse_from_rfc3339("2017-06-12T17:57:34Z")
                .unwrap()
                .with_timezone(&Utc),
            url: "http://arxiv.org/abs/1706.03762".to_string(),
            pdf_url: "http://arxiv.org/pdf/1706.03762.pdf".to_string(),
            arxiv_id: "1706.03762".to_string(),
            citation_count: None,
            ai_summary: None,
        }
    }

    #[test]
    fn test_citations_default_to_zero() {
        let paper = sample_paper();
        assert_eq!(paper.citations(), 0);
        assert!(!paper.has_citations());
    }

    #[test]
    fn test_enriched_with_zero_is_distinct_from_unenriched() {
        let paper = sample_paper().with_citation_count(0);
        assert_eq!(paper.citation_count, Some(0));
        assert_eq!(paper.citations(), 0);
        assert!(!paper.has_citations());
    }

    #[test]
    fn test_with_citation_count_preserves_fields() {
        let paper = sample_paper().with_citation_count(42);
        assert_eq!(paper.citations(), 42);
        assert!(paper.has_citations());
        assert_eq!(paper.arxiv_id, "1706.03762");
        assert_eq!(paper.title, "Attention Is All You Need");
    }

    #[test]
    fn test_author_line_caps_at_three() {
        let mut paper = sample_paper();
        paper.authors = vec![
            "A".to_string(),
            "B".to_string(),
            "C".to_string(),
            "D".to_string(),
        ];
        assert_eq!(paper.author_line(3), "A, B, C +others");
    }

    #[test]
    fn test_author_line_no_marker_at_cap() {
        let paper = sample_paper();
        assert_eq!(paper.author_line(3), "A. Vaswani, N. Shazeer");
    }

    #[test]
    fn test_author_line_empty() {
        let mut paper = sample_paper();
        paper.authors.clear();
        assert_eq!(paper.author_line(3), "");
    }

    #[test]
    fn test_serde_round_trip_uses_camel_case() {
        let paper = sample_paper().with_citation_count(7);
        let json = serde_json::to_string(&paper).unwrap();
        assert!(json.contains("citationCount"));
        assert!(json.contains("pdfUrl"));
        let back: Paper = serde_json::from_str(&json).unwrap();
        assert_eq!(back, paper);
    }
}
