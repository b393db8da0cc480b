//! Fact-check records.
//!
//! A record is created once per checked claim and never mutated afterwards.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::claim::Claim;
use super::evidence::EvidenceItem;
use super::verdict::{Assessment, Category, Verdict};

/// Result of checking a single claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactCheckRecord {
    /// Unique identifier for this check
    pub id: Uuid,

    /// The claim that was checked
    pub claim: Claim,

    pub verdict: Verdict,

    /// Heuristic certainty in [0.5, 0.95]
    pub confidence: f64,

    /// Evidence consulted, in source order
    pub sources: Vec<EvidenceItem>,

    /// Display category (always `verdict.category()`)
    pub category: Category,

    /// When the check completed
    pub checked_at: DateTime<Utc>,
}

impl FactCheckRecord {
    /// Assemble a record stamped with the current time
    pub fn new(claim: Claim, assessment: Assessment, sources: Vec<EvidenceItem>) -> Self {
        Self {
            id: Uuid::new_v4(),
            claim,
            verdict: assessment.verdict,
            confidence: assessment.confidence,
            sources,
            category: assessment.verdict.category(),
            checked_at: Utc::now(),
        }
    }

    /// Confidence as a whole percentage, e.g. "80%"
    pub fn confidence_percent(&self) -> String {
        format!("{:.0}%", self.confidence * 100.0)
    }

    /// Local-time timestamp as shown on result cards
    pub fn checked_at_display(&self) -> String {
        self.checked_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string()
    }
}
