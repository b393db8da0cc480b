//! Session history of fact-check records.
//!
//! Records are only ever appended. When a retention cap is set, appending
//! past it drops the oldest record.

use std::collections::VecDeque;

use tracing::debug;

use crate::domain::{Claim, FactCheckRecord};

/// Default retention cap
pub const DEFAULT_MAX_RECORDS: usize = 500;

/// Append-only, optionally bounded record log
#[derive(Debug, Clone)]
pub struct History {
    records: VecDeque<FactCheckRecord>,

    /// 0 means unbounded
    max_records: usize,

    evicted: u64,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RECORDS)
    }
}

impl History {
    /// Create an empty history keeping at most `max_records` (0 = unbounded)
    pub fn new(max_records: usize) -> Self {
        Self {
            records: VecDeque::new(),
            max_records,
            evicted: 0,
        }
    }

    /// Append a record, evicting the oldest if over the cap
    pub fn push(&mut self, record: FactCheckRecord) {
        self.records.push_back(record);

        if self.max_records > 0 {
            while self.records.len() > self.max_records {
                if let Some(dropped) = self.records.pop_front() {
                    self.evicted += 1;
                    debug!(record_id = %dropped.id, "History cap reached, evicted oldest record");
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records dropped by the retention cap
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    pub fn max_records(&self) -> usize {
        self.max_records
    }

    /// Records oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &FactCheckRecord> {
        self.records.iter()
    }

    /// Up to `n` records, most recent first
    pub fn recent(&self, n: usize) -> Vec<&FactCheckRecord> {
        self.records.iter().rev().take(n).collect()
    }

    /// Most recent record for the same claim (by fingerprint)
    pub fn find_by_claim(&self, claim: &Claim) -> Option<&FactCheckRecord> {
        let fingerprint = claim.fingerprint();
        self.records
            .iter()
            .rev()
            .find(|r| r.claim.fingerprint() == fingerprint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Assessment, Verdict};

    fn record(text: &str) -> FactCheckRecord {
        FactCheckRecord::new(
            Claim::new(text),
            Assessment::new(Verdict::Disputed, 0.5),
            Vec::new(),
        )
    }

    #[test]
    fn test_push_and_order() {
        let mut history = History::new(0);
        assert!(history.is_empty());

        for i in 1..=7 {
            history.push(record(&format!("claim {}", i)));
        }

        assert_eq!(history.len(), 7);
        assert_eq!(history.iter().next().unwrap().claim.as_str(), "claim 1");

        let recent: Vec<&str> = history.recent(5).iter().map(|r| r.claim.as_str()).collect();
        assert_eq!(recent, vec!["claim 7", "claim 6", "claim 5", "claim 4", "claim 3"]);
    }

    #[test]
    fn test_retention_cap_evicts_oldest() {
        let mut history = History::new(2);
        history.push(record("a"));
        history.push(record("b"));
        history.push(record("c"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.evicted(), 1);
        let kept: Vec<&str> = history.iter().map(|r| r.claim.as_str()).collect();
        assert_eq!(kept, vec!["b", "c"]);
    }

    #[test]
    fn test_find_by_claim_returns_latest() {
        let mut history = History::default();
        history.push(record("Water is wet."));
        history.push(record("Fire is hot."));
        let latest = record("water  is WET.");
        let latest_id = latest.id;
        history.push(latest);

        let found = history.find_by_claim(&Claim::new("Water is wet.")).unwrap();
        assert_eq!(found.id, latest_id);
        assert!(history.find_by_claim(&Claim::new("Ice is cold.")).is_none());
    }
}
