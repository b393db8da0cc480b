//! factcheck - Demo fact-checker
//!
//! Extracts candidate claims from text, looks up evidence in a static
//! topic table and scores credibility with a keyword heuristic.
//!
//! # Architecture
//!
//! The pipeline runs sequentially per submission:
//! - Extractor: text → up to three claims
//! - Evidence source: claim → evidence items (pluggable)
//! - Scorer: evidence → verdict, confidence, category
//! - Orchestrator: one record per claim
//! - Session: appends records to a bounded history
//!
//! # Modules
//!
//! - `adapters`: Evidence sources (static fixture table)
//! - `core`: Extraction, scoring, orchestration, history
//! - `domain`: Data structures (Claim, EvidenceItem, FactCheckRecord)
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Check a claim
//! factcheck check "The Great Wall of China is visible from space"
//!
//! # Use a built-in example without the pacing delay
//! factcheck check --example iphone --no-pacing
//!
//! # Interactive session with history
//! factcheck session
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;

// Re-export main types at crate root for convenience
pub use adapters::{EvidenceSource, FixtureSource};
pub use self::core::{
    extract, score, CheckSettings, ClaimExtractor, CredibilityScorer, History, Orchestrator,
    Session, Submission,
};
pub use domain::{Assessment, Category, Claim, EvidenceItem, FactCheckRecord, Verdict};
