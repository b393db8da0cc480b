//! Keyword-count credibility scoring.
//!
//! All snippets are joined into one lowercased blob. Each phrase from the
//! negative and positive lists that occurs anywhere in the blob counts once.
//! The side with more hits decides the verdict; ties are DISPUTED.

use crate::domain::{Assessment, Claim, EvidenceItem, Verdict};

const NEGATIVE_PHRASES: &[&str] = &[
    "myth",
    "false",
    "debunked",
    "not true",
    "contrary to belief",
    "misconception",
];

const POSITIVE_PHRASES: &[&str] = &[
    "confirmed",
    "verified",
    "proven",
    "research shows",
    "studies indicate",
    "according to experts",
];

const FALSE_BASE: f64 = 0.7;
const FALSE_CEILING: f64 = 0.95;
const VERIFIED_BASE: f64 = 0.6;
const VERIFIED_CEILING: f64 = 0.9;
const DISPUTED_CONFIDENCE: f64 = 0.5;
const STEP_PER_HIT: f64 = 0.1;

/// Maps a claim and its evidence to a verdict
pub trait CredibilityScorer: Send + Sync {
    fn score(&self, claim: &Claim, evidence: &[EvidenceItem]) -> Assessment;
}

/// Raw phrase hit counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signals {
    pub positive: u32,
    pub negative: u32,
}

/// Phrase-count scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordScorer;

impl KeywordScorer {
    /// Count positive and negative phrase hits across all snippets
    pub fn signals(evidence: &[EvidenceItem]) -> Signals {
        let blob = evidence
            .iter()
            .map(|e| e.snippet.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        let count =
            |phrases: &[&str]| phrases.iter().filter(|p| blob.contains(**p)).count() as u32;

        Signals {
            positive: count(POSITIVE_PHRASES),
            negative: count(NEGATIVE_PHRASES),
        }
    }
}

impl CredibilityScorer for KeywordScorer {
    fn score(&self, claim: &Claim, evidence: &[EvidenceItem]) -> Assessment {
        score(claim, evidence)
    }
}

/// Score a claim against its evidence. Pure: same inputs, same output.
///
/// The claim text is not consulted; only the evidence snippets are.
pub fn score(_claim: &Claim, evidence: &[EvidenceItem]) -> Assessment {
    let Signals { positive, negative } = KeywordScorer::signals(evidence);

    if negative > positive {
        let confidence =
            (FALSE_BASE + STEP_PER_HIT * negative as f64).clamp(FALSE_BASE, FALSE_CEILING);
        Assessment::new(Verdict::False, confidence)
    } else if positive > negative {
        let confidence =
            (VERIFIED_BASE + STEP_PER_HIT * positive as f64).clamp(VERIFIED_BASE, VERIFIED_CEILING);
        Assessment::new(Verdict::Verified, confidence)
    } else {
        Assessment::new(Verdict::Disputed, DISPUTED_CONFIDENCE)
    }
}
