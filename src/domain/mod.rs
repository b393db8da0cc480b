//! Domain types for the fact-checker.
//!
//! This module contains the core data structures:
//! - Claim: an extracted candidate statement
//! - EvidenceItem: a (title, url, snippet) source
//! - Verdict / Category / Assessment: scorer output
//! - FactCheckRecord: the immutable result of one check

pub mod claim;
pub mod evidence;
pub mod record;
pub mod verdict;

// Re-export commonly used types
pub use claim::Claim;
pub use evidence::EvidenceItem;
pub use record::FactCheckRecord;
pub use verdict::{Assessment, Category, Verdict};
