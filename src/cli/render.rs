//! Terminal rendering of fact-check results.
//!
//! Everything here returns a `String` so the CLI decides where it goes.

use std::fmt::Write;

use crate::domain::{Category, EvidenceItem, FactCheckRecord};

const BAR_CELLS: usize = 20;
const PREVIEW_CHARS: usize = 50;

fn badge(category: Category) -> &'static str {
    match category {
        Category::Green => "🟢",
        Category::Orange => "🟠",
        Category::Red => "🔴",
    }
}

/// Confidence meter, e.g. "████████████████░░░░"
pub fn confidence_bar(confidence: f64) -> String {
    let filled = ((confidence * BAR_CELLS as f64).round() as usize).min(BAR_CELLS);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_CELLS - filled))
}

/// Full result card for one record
pub fn card(record: &FactCheckRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(out, "  📝 Claim");
    let _ = writeln!(out, "  \"{}\"", record.claim);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {} Verdict: {}",
        badge(record.category),
        record.verdict
    );
    let _ = writeln!(
        out,
        "  Confidence Level: {}  {}",
        record.confidence_percent(),
        confidence_bar(record.confidence)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "  🔗 Sources");
    for source in &record.sources {
        out.push_str(&source_line(source));
        let _ = writeln!(out, "      {}", source.snippet);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  ✅ Checked at {}", record.checked_at_display());
    let _ = writeln!(out, "╚══════════════════════════════════════════════════════════════╝");

    out
}

fn source_line(source: &EvidenceItem) -> String {
    format!("  • {} <{}>\n", source.title, source.url)
}

/// One entry in a recent-checks list
pub fn history_entry(record: &FactCheckRecord) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "✓ {} - {}",
        record.claim.preview(PREVIEW_CHARS),
        record.verdict
    );
    let _ = writeln!(
        out,
        "    Verdict: {} ({} confidence)",
        record.verdict,
        record.confidence_percent()
    );
    let _ = writeln!(out, "    Checked: {}", record.checked_at_display());
    for source in &record.sources {
        let _ = writeln!(out, "    • {} <{}>", source.title, source.url);
    }

    out
}

/// Recent checks, most recent first
pub fn recent_list<'a>(records: impl IntoIterator<Item = &'a FactCheckRecord>) -> String {
    let mut out = String::from("📜 Recent Fact-Checks\n");
    out.push_str(&"─".repeat(64));
    out.push('\n');

    for record in records {
        out.push_str(&history_entry(record));
    }

    out
}

/// Plain evidence listing for the search command
pub fn evidence_list(items: &[EvidenceItem]) -> String {
    let mut out = String::new();
    for (idx, item) in items.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", idx + 1, item.title);
        let _ = writeln!(out, "   {}", item.url);
        let _ = writeln!(out, "   {}", item.snippet);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Assessment, Claim, Verdict};

    fn record(text: &str, verdict: Verdict, confidence: f64) -> FactCheckRecord {
        FactCheckRecord::new(
            Claim::new(text),
            Assessment::new(verdict, confidence),
            vec![EvidenceItem::new(
                "NASA: Great Wall of China Not Visible from Space",
                "https://nasa.gov",
                "not visible",
            )],
        )
    }

    #[test]
    fn test_confidence_bar() {
        assert_eq!(confidence_bar(0.5), format!("{}{}", "█".repeat(10), "░".repeat(10)));
        assert_eq!(confidence_bar(0.95).chars().filter(|c| *c == '█').count(), 19);
        assert_eq!(confidence_bar(1.5).chars().count(), 20);
    }

    #[test]
    fn test_card_contents() {
        let shown = card(&record("The Great Wall is visible", Verdict::False, 0.8));

        assert!(shown.contains("\"The Great Wall is visible\""));
        assert!(shown.contains("Verdict: FALSE"));
        assert!(shown.contains("Confidence Level: 80%"));
        assert!(shown.contains("• NASA: Great Wall of China Not Visible from Space <https://nasa.gov>"));
        assert!(shown.contains("Checked at "));
    }

    #[test]
    fn test_history_entry_truncates_claim() {
        let long = "A".repeat(80);
        let shown = history_entry(&record(&long, Verdict::Disputed, 0.5));
        let first_line = shown.lines().next().unwrap();

        assert_eq!(first_line, format!("✓ {}... - DISPUTED", "A".repeat(50)));
        assert!(shown.contains("(50% confidence)"));
    }

    #[test]
    fn test_evidence_list_numbering() {
        let items = vec![
            EvidenceItem::new("First", "https://a", "one"),
            EvidenceItem::new("Second", "https://b", "two"),
        ];
        let shown = evidence_list(&items);
        assert!(shown.starts_with("1. First\n"));
        assert!(shown.contains("2. Second\n"));
    }
}
