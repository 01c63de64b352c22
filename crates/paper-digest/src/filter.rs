//! Citation-threshold filtering.

use crate::models::Paper;

/// Keep exactly the papers whose citation count (absent = 0) meets the
/// threshold, preserving input order. A threshold of 0 keeps everything,
/// including papers that were never enriched.
#[must_use]
pub fn filter_by_min_citations(papers: Vec<Paper>, min_citations: u32) -> Vec<Paper> {
    papers.into_iter().filter(|p| p.citations() >= min_citations).collect()
}
