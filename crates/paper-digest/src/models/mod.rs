//! Data models for the digest pipeline.

mod paper;

pub use paper::Paper;
