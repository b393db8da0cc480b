//! Interactive session state.
//!
//! A session owns the history for one run of the tool. Each submission is
//! size-checked, split into claims and checked claim by claim; every record
//! is appended to history as soon as it is produced.

use anyhow::Result;
use tracing::{info, warn};

use crate::domain::{Claim, FactCheckRecord};

use super::extractor::{ClaimExtractor, PatternExtractor};
use super::history::History;
use super::limits::InputLimits;
use super::orchestrator::Orchestrator;

/// Outcome of one submission
#[derive(Debug, Clone)]
pub enum Submission {
    /// No claims found; show a "nothing to check" notice
    NothingToCheck,

    /// Records produced, in claim order
    Checked(Vec<FactCheckRecord>),
}

impl Submission {
    pub fn records(&self) -> &[FactCheckRecord] {
        match self {
            Submission::NothingToCheck => &[],
            Submission::Checked(records) => records,
        }
    }
}

/// Session-scoped history and limits
pub struct Session {
    history: History,
    limits: InputLimits,
    extractor: Box<dyn ClaimExtractor>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(History::default(), InputLimits::default())
    }
}

impl Session {
    pub fn new(history: History, limits: InputLimits) -> Self {
        Self {
            history,
            limits,
            extractor: Box::new(PatternExtractor),
        }
    }

    /// Swap the claim extractor
    pub fn with_extractor(mut self, extractor: Box<dyn ClaimExtractor>) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Check every claim found in `text` and record the results.
    ///
    /// If a lookup fails midway, records already produced stay in history.
    pub async fn submit(&mut self, orchestrator: &Orchestrator, text: &str) -> Result<Submission> {
        self.submit_with(orchestrator, text, |_| {}).await
    }

    /// Like `submit`, calling `on_claim` just before each claim is checked
    pub async fn submit_with<F>(
        &mut self,
        orchestrator: &Orchestrator,
        text: &str,
        mut on_claim: F,
    ) -> Result<Submission>
    where
        F: FnMut(&Claim),
    {
        self.limits.validate(text)?;

        let claims = self.extractor.extract(text);
        if claims.is_empty() {
            info!("No claims found in submission");
            return Ok(Submission::NothingToCheck);
        }

        info!(claims = claims.len(), "Checking submission");

        let mut records = Vec::with_capacity(claims.len());
        for claim in &claims {
            if let Some(previous) = self.history.find_by_claim(claim) {
                warn!(
                    previous_id = %previous.id,
                    previous_verdict = %previous.verdict,
                    "Claim was already checked this session"
                );
            }

            on_claim(claim);
            let record = orchestrator.check(claim).await?;
            self.history.push(record.clone());
            records.push(record);
        }

        Ok(Submission::Checked(records))
    }
}
