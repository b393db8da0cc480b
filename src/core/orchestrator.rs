//! Fact-check orchestrator.
//!
//! Runs one claim through evidence lookup and scoring and assembles the
//! record. The orchestrator never touches history; the session does that.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::adapters::{EvidenceSource, FixtureSource, DEFAULT_SEARCH_LIMIT};
use crate::domain::{Claim, FactCheckRecord};

use super::scorer::{CredibilityScorer, KeywordScorer};

/// Per-check settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckSettings {
    /// Presentation delay before each lookup (zero disables)
    pub pacing: Duration,

    /// Evidence items requested per claim
    pub search_limit: usize,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            pacing: Duration::from_secs(2),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl CheckSettings {
    /// Default settings without the pacing delay
    pub fn unpaced() -> Self {
        Self {
            pacing: Duration::ZERO,
            ..Default::default()
        }
    }
}

/// Main fact-check orchestrator
pub struct Orchestrator {
    /// Evidence backend
    source: Arc<dyn EvidenceSource>,

    scorer: Arc<dyn CredibilityScorer>,

    settings: CheckSettings,
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(CheckSettings::default())
    }
}

impl Orchestrator {
    /// Create an orchestrator over the fixture table and keyword scorer
    pub fn new(settings: CheckSettings) -> Self {
        Self::with_source(Arc::new(FixtureSource::new()), settings)
    }

    /// Create an orchestrator over a custom evidence source
    pub fn with_source(source: Arc<dyn EvidenceSource>, settings: CheckSettings) -> Self {
        Self {
            source,
            scorer: Arc::new(KeywordScorer),
            settings,
        }
    }

    /// Swap the credibility scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn CredibilityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn settings(&self) -> &CheckSettings {
        &self.settings
    }

    /// Name of the configured evidence source
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Check a single claim: pace, search, score, assemble
    #[instrument(skip(self, claim), fields(claim = %claim))]
    pub async fn check(&self, claim: &Claim) -> Result<FactCheckRecord> {
        let started = Instant::now();

        if !self.settings.pacing.is_zero() {
            debug!(pacing_ms = self.settings.pacing.as_millis() as u64, "Pacing delay");
            tokio::time::sleep(self.settings.pacing).await;
        }

        let evidence = self
            .source
            .search(claim.as_str(), self.settings.search_limit)
            .await
            .with_context(|| format!("Evidence lookup failed for claim '{}'", claim))?;
        debug!(items = evidence.len(), "Evidence retrieved");

        let assessment = self.scorer.score(claim, &evidence);
        let record = FactCheckRecord::new(claim.clone(), assessment, evidence);

        info!(
            record_id = %record.id,
            verdict = %record.verdict,
            confidence = record.confidence,
            duration_ms = started.elapsed().as_millis() as u64,
            "Claim checked"
        );

        Ok(record)
    }
}
