//! Claim extraction by pattern matching.
//!
//! Three rules run over the input in a fixed order. Each rule matches a run
//! of text starting at a capital letter and ending at the next `.`, `!` or
//! `?`, provided the run contains one of the rule's markers. All matches are
//! concatenated in rule order (not text order) and capped at three.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::Claim;

/// Maximum number of claims returned per submission
pub const MAX_CLAIMS: usize = 3;

/// Inputs at or below this many characters never fall back to a whole-text claim
const MIN_FALLBACK_CHARS: usize = 10;

static CLAIM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Linking / predicate words
        r"[A-Z][^.!?]*(?:is|are|was|were|has|have|will|can|cannot|costs?|contains?|causes?)[^.!?]*[.!?]",
        // Numbers and quantities
        r"[A-Z][^.!?]*(?:\d+|percent|%|million|billion|thousand)[^.!?]*[.!?]",
        // Appeals to authority
        r"[A-Z][^.!?]*(?:studies show|research shows|according to|scientists|doctors)[^.!?]*[.!?]",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("claim pattern must compile"))
    .collect()
});

/// Turns raw text into candidate claims
pub trait ClaimExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Vec<Claim>;
}

/// Regex-rule extractor
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl ClaimExtractor for PatternExtractor {
    fn extract(&self, text: &str) -> Vec<Claim> {
        extract(text)
    }
}

/// Whitespace plus the C0 file/group/record/unit separators (U+001C..U+001F)
fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Extract up to `MAX_CLAIMS` claims from `text`.
///
/// Empty or whitespace-only input yields no claims; callers treat that as
/// "nothing to check".
pub fn extract(text: &str) -> Vec<Claim> {
    let mut claims: Vec<Claim> = CLAIM_PATTERNS
        .iter()
        .flat_map(|re| re.find_iter(text).map(|m| Claim::new(m.as_str())))
        .take(MAX_CLAIMS)
        .collect();

    if claims.is_empty() {
        let trimmed = text.trim_matches(is_blank);
        if trimmed.chars().count() > MIN_FALLBACK_CHARS {
            claims.push(Claim::new(trimmed));
        }
    }

    claims
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(claims: &[Claim]) -> Vec<&str> {
        claims.iter().map(|c| c.as_str()).collect()
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(extract("").is_empty());
        assert!(extract("   \n\t  ").is_empty());
    }

    #[test]
    fn test_short_unmatched_input_yields_nothing() {
        // exactly 10 chars after trimming: not enough for the fallback
        assert!(extract("  abcdefghij  ").is_empty());
    }

    #[test]
    fn test_fallback_uses_trimmed_input() {
        let claims = extract("  The Great Wall of China is visible from space  ");
        assert_eq!(
            texts(&claims),
            vec!["The Great Wall of China is visible from space"]
        );
    }

    #[test]
    fn test_fallback_trims_separator_controls() {
        let claims = extract("\u{1c}\u{1c}abcdefghijk\u{1f} ");
        assert_eq!(texts(&claims), vec!["abcdefghijk"]);
        assert!(extract("\u{1d}\u{1e} abcdefghij \u{1f}").is_empty());
    }

    #[test]
    fn test_rule_order_not_text_order() {
        // Rule 1 hits both sentences, rule 2 hits the second again
        let claims = extract("Water is wet. The price is 5 dollars.");
        assert_eq!(
            texts(&claims),
            vec![
                "Water is wet.",
                "The price is 5 dollars.",
                "The price is 5 dollars.",
            ]
        );
    }

    #[test]
    fn test_rule_two_and_three_only() {
        let claims = extract("Over 40 percent agree! According to doctors, yes?");
        assert_eq!(
            texts(&claims),
            vec!["Over 40 percent agree!", "According to doctors, yes?"]
        );
    }

    #[test]
    fn test_capped_at_three() {
        let text = "Cats are mammals. Dogs are mammals. Birds are not. Fish are wet.";
        let claims = extract(text);
        assert_eq!(claims.len(), MAX_CLAIMS);
        assert_eq!(claims[0].as_str(), "Cats are mammals.");
    }

    #[test]
    fn test_requires_terminator() {
        // No terminator: rules never match, fallback applies instead
        let claims = extract("The iPhone 15 Pro has a titanium frame");
        assert_eq!(texts(&claims), vec!["The iPhone 15 Pro has a titanium frame"]);
    }

    #[test]
    fn test_trait_delegates() {
        let extractor = PatternExtractor;
        assert_eq!(extractor.extract("Water is wet."), extract("Water is wet."));
    }
}
