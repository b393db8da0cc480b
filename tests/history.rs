//! Session History Integration Tests
//!
//! Append order, display window and retention across submissions.

use factcheck::core::InputLimits;
use factcheck::{CheckSettings, History, Orchestrator, Session, Submission};

fn orchestrator() -> Orchestrator {
    Orchestrator::new(CheckSettings::unpaced())
}

#[tokio::test]
async fn test_history_accumulates_across_submissions() {
    let orchestrator = orchestrator();
    let mut session = Session::default();

    session
        .submit(&orchestrator, "The Great Wall of China is visible from space")
        .await
        .unwrap();
    session
        .submit(&orchestrator, "The iPhone 15 Pro has a titanium frame")
        .await
        .unwrap();
    let blank = session.submit(&orchestrator, "  ").await.unwrap();

    assert!(matches!(blank, Submission::NothingToCheck));
    assert_eq!(session.history().len(), 2);

    let recent = session.history().recent(5);
    assert_eq!(
        recent[0].claim.as_str(),
        "The iPhone 15 Pro has a titanium frame"
    );
    assert_eq!(
        recent[1].claim.as_str(),
        "The Great Wall of China is visible from space"
    );
}

#[tokio::test]
async fn test_display_window_shows_latest_five() {
    let orchestrator = orchestrator();
    let mut session = Session::default();

    for i in 1..=7 {
        session
            .submit(&orchestrator, &format!("Claim number {} is here.", i))
            .await
            .unwrap();
    }

    let shown: Vec<String> = session
        .history()
        .recent(5)
        .iter()
        .map(|r| r.claim.to_string())
        .collect();

    // Rules 1 and 2 both match each sentence, so every submission adds two records
    assert_eq!(session.history().len(), 14);
    assert_eq!(shown.len(), 5);
    assert_eq!(shown[0], "Claim number 7 is here.");
    assert_eq!(shown[4], "Claim number 5 is here.");
}

#[tokio::test]
async fn test_retention_cap_bounds_session() {
    let orchestrator = orchestrator();
    let mut session = Session::new(History::new(3), InputLimits::default());

    for text in [
        "Cats are mammals.",
        "Dogs are mammals.",
        "Fish are not mammals.",
        "Birds are not mammals.",
    ] {
        session.submit(&orchestrator, text).await.unwrap();
    }

    assert_eq!(session.history().len(), 3);
    assert_eq!(session.history().evicted(), 1);
    assert_eq!(
        session.history().iter().next().unwrap().claim.as_str(),
        "Dogs are mammals."
    );
}

#[tokio::test]
async fn test_records_are_json_serializable() {
    let orchestrator = orchestrator();
    let mut session = Session::default();

    let outcome = session
        .submit(&orchestrator, "The Great Wall of China is visible from space")
        .await
        .unwrap();

    let json = serde_json::to_value(outcome.records()).unwrap();
    let first = &json[0];
    assert_eq!(first["verdict"], "FALSE");
    assert_eq!(first["category"], "red");
    assert_eq!(first["sources"].as_array().unwrap().len(), 2);
    assert!(first["checked_at"].as_str().unwrap().contains('T'));
}
