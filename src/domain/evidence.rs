//! Evidence items returned by an evidence source.

use serde::{Deserialize, Serialize};

/// A single piece of supporting or refuting evidence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceItem {
    /// Headline of the source
    pub title: String,

    /// Link to the source
    pub url: String,

    /// Excerpt the scorer reads
    pub snippet: String,
}

impl EvidenceItem {
    /// Create a new evidence item
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        snippet: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            snippet: snippet.into(),
        }
    }
}
