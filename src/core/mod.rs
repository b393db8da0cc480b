//! Core fact-checking logic.
//!
//! This module contains:
//! - Extractor: claim extraction rules
//! - Scorer: keyword credibility heuristic
//! - Orchestrator: per-claim check pipeline
//! - History / Session: session-scoped record keeping
//! - Limits: submission size guard

pub mod extractor;
pub mod history;
pub mod limits;
pub mod orchestrator;
pub mod scorer;
pub mod session;

// Re-export commonly used types
pub use extractor::{extract, ClaimExtractor, PatternExtractor, MAX_CLAIMS};
pub use history::History;
pub use limits::{InputLimits, InputViolation};
pub use orchestrator::{CheckSettings, Orchestrator};
pub use scorer::{score, CredibilityScorer, KeywordScorer, Signals};
pub use session::{Session, Submission};
