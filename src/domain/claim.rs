//! Claims extracted from user input.
//!
//! A claim has no identity beyond its text. The fingerprint gives a
//! stable key for spotting repeat checks of the same statement.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A short candidate factual statement to be checked
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claim(String);

impl Claim {
    /// Wrap a statement as a claim
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The claim text as extracted
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Deterministic key: SHA256 over the lowercased, whitespace-collapsed text.
    ///
    /// Format: "sha256:<hex>"
    pub fn fingerprint(&self) -> String {
        let normalized = self
            .0
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let mut hasher = Sha256::new();
        hasher.update(normalized.as_bytes());
        format!("sha256:{}", hex::encode(hasher.finalize()))
    }

    /// Truncate for list display, appending "..." like the recent-checks list
    pub fn preview(&self, max_chars: usize) -> String {
        let head: String = self.0.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

impl fmt::Display for Claim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Claim {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Claim {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Claim {
    fn from(s: String) -> Self {
        Self(s)
    }
}
