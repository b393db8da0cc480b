//! Verdicts, display categories and scorer output.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of scoring a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// Evidence leans supportive
    Verified,

    /// Evidence is balanced or silent
    Disputed,

    /// Evidence leans refuting
    False,
}

impl Verdict {
    /// Display category for this verdict. The mapping is fixed.
    pub fn category(self) -> Category {
        match self {
            Verdict::Verified => Category::Green,
            Verdict::Disputed => Category::Orange,
            Verdict::False => Category::Red,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Verified => "VERIFIED",
            Verdict::Disputed => "DISPUTED",
            Verdict::False => "FALSE",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display category derived from a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Green,
    Orange,
    Red,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Green => "green",
            Category::Orange => "orange",
            Category::Red => "red",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scorer output: verdict, confidence and the derived category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub verdict: Verdict,

    /// Heuristic certainty in [0.5, 0.95]
    pub confidence: f64,

    pub category: Category,
}

impl Assessment {
    /// Build an assessment; the category always follows the verdict
    pub fn new(verdict: Verdict, confidence: f64) -> Self {
        Self {
            verdict,
            confidence,
            category: verdict.category(),
        }
    }
}
