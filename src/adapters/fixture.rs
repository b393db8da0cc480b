//! Static evidence table used in place of web search.
//!
//! Each topic key is a multi-word phrase. A query selects a topic when any
//! single word of the key occurs (as a substring) in the lowercased query.
//! Topics are tried in declaration order and the first hit wins. Queries
//! matching no topic get one synthetic "in progress" item.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::domain::EvidenceItem;

use super::EvidenceSource;

/// Static evidence entry: (title, url, snippet)
type Entry = (&'static str, &'static str, &'static str);

struct Topic {
    key: &'static str,
    entries: &'static [Entry],
}

const TOPICS: &[Topic] = &[
    Topic {
        key: "iphone 15 titanium",
        entries: &[
            (
                "Apple iPhone 15 Pro Features Titanium Design",
                "https://apple.com/newsroom",
                "The iPhone 15 Pro introduces a titanium design that's lighter yet stronger than steel.",
            ),
            (
                "iPhone 15 Pro Review: Titanium Makes a Difference",
                "https://techcrunch.com",
                "Apple's use of Grade 5 titanium in the iPhone 15 Pro results in the lightest Pro model ever.",
            ),
        ],
    },
    Topic {
        key: "water 8 glasses daily",
        entries: &[
            (
                "Mayo Clinic: How much water should you drink daily?",
                "https://mayoclinic.org",
                "The 8 glasses rule is a good starting point but individual needs vary based on activity, climate, and health.",
            ),
            (
                "Harvard Health: The importance of staying hydrated",
                "https://health.harvard.edu",
                "While 8 glasses is commonly cited, actual fluid needs depend on many factors including food intake.",
            ),
        ],
    },
    Topic {
        key: "great wall china space",
        entries: &[
            (
                "NASA: Great Wall of China Not Visible from Space",
                "https://nasa.gov",
                "Contrary to popular belief, the Great Wall of China is not visible from space with the naked eye.",
            ),
            (
                "Snopes: Can You See the Great Wall from Space?",
                "https://snopes.com",
                "This is a persistent myth. The wall is too narrow to be seen from space without aid.",
            ),
        ],
    },
];

const FALLBACK_URL: &str = "https://example.com";
const FALLBACK_SNIPPET: &str = "Multiple sources found. Verification in progress...";

/// Evidence source backed by the static topic table
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }

    /// Topic keys in match order
    pub fn topics() -> impl Iterator<Item = &'static str> {
        TOPICS.iter().map(|t| t.key)
    }

    /// Synchronous lookup shared by `search`.
    ///
    /// A limit of 0 is treated as 1 so callers always get something to score.
    pub fn lookup(&self, query: &str, limit: usize) -> Vec<EvidenceItem> {
        let query_lower = query.to_lowercase();
        let limit = limit.max(1);

        for topic in TOPICS {
            if topic
                .key
                .split_whitespace()
                .any(|word| query_lower.contains(word))
            {
                debug!(topic = topic.key, "Fixture topic matched");
                return topic
                    .entries
                    .iter()
                    .take(limit)
                    .map(|(title, url, snippet)| EvidenceItem::new(*title, *url, *snippet))
                    .collect();
            }
        }

        debug!("No fixture topic matched, returning placeholder");
        vec![EvidenceItem::new(
            format!("Search results for: {}", query),
            FALLBACK_URL,
            FALLBACK_SNIPPET,
        )]
    }
}

#[async_trait]
impl EvidenceSource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<EvidenceItem>> {
        Ok(self.lookup(query, limit))
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::DEFAULT_SEARCH_LIMIT;

    #[test]
    fn test_great_wall_topic() {
        let results = FixtureSource::new().lookup(
            "The Great Wall of China is visible from space",
            DEFAULT_SEARCH_LIMIT,
        );
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url, "https://nasa.gov");
        assert_eq!(results[1].url, "https://snopes.com");
    }

    #[test]
    fn test_first_topic_wins() {
        // "iphone" hits the first topic even though "water" would hit the second
        let results = FixtureSource::new().lookup("iPhone water resistance", 5);
        assert_eq!(results[0].url, "https://apple.com/newsroom");
    }

    #[test]
    fn test_key_words_match_as_substrings() {
        // "8" is a key word of the water topic and matches inside "2018"
        let results = FixtureSource::new().lookup("Released in 2018", 5);
        assert_eq!(results[0].url, "https://mayoclinic.org");
    }

    #[test]
    fn test_fallback_keeps_original_query() {
        let results = FixtureSource::new().lookup("Eating chocolate cures cancer", 5);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Search results for: Eating chocolate cures cancer");
        assert_eq!(results[0].url, FALLBACK_URL);
        assert!(results[0].snippet.contains("in progress"));
    }

    #[test]
    fn test_limit_truncates_topic_results() {
        let source = FixtureSource::new();
        assert_eq!(source.lookup("great wall", 1).len(), 1);
        assert_eq!(source.lookup("great wall", 0).len(), 1);
    }

    #[test]
    fn test_search_is_infallible() {
        let source = FixtureSource::new();
        let results = tokio_test::block_on(source.search("", DEFAULT_SEARCH_LIMIT)).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Search results for: ");
    }

    #[tokio::test]
    async fn test_search_via_trait() {
        let source: &dyn EvidenceSource = &FixtureSource::new();
        assert_eq!(source.name(), "fixture");
        assert!(source.health_check().await.is_ok());

        let results = source.search("titanium frame", 5).await.unwrap();
        assert_eq!(results.len(), 2);
    }
}
