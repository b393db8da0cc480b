//! Evidence source interfaces.
//!
//! Evidence sources stand in for a search or indexing backend. The
//! orchestrator only depends on the `EvidenceSource` trait, so a real
//! provider can replace the fixture table without touching extraction
//! or scoring.

pub mod fixture;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::EvidenceItem;

// Re-export the fixture source
pub use fixture::FixtureSource;

/// Default number of evidence items requested per claim
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Trait for pluggable evidence backends
#[async_trait]
pub trait EvidenceSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// Look up evidence for a query, returning at most `limit` items in rank order
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<EvidenceItem>>;

    /// Health check (for networked backends)
    async fn health_check(&self) -> Result<()>;
}
