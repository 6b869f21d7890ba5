//! End-to-end rotation against real corpus and tracking files.
//!
//! Every call builds a new rotator so nothing but the tracking file carries
//! state from one invocation to the next.

use std::collections::HashSet;
use std::fs;

use rotaphrase_core::{Persistence, ResetReason, UnusedOrigin};

use crate::common::Workspace;

#[test]
fn three_phrase_corpus_cycles_as_a_permutation() {
    let ws = Workspace::with_corpus("a\nb\nc\n");

    let first = ws.rotator(1).get_post_text().expect("phrase");
    let rest = ws.tracked().expect("tracking written");
    assert_eq!(rest.len(), 2);
    assert!(!rest.contains(&first));

    let second = ws.rotator(2).get_post_text().expect("phrase");
    let third = ws.rotator(3).get_post_text().expect("phrase");

    let cycle: HashSet<String> = [first, second, third].into_iter().collect();
    assert_eq!(cycle.len(), 3);
    assert_eq!(ws.tracked(), Some(Vec::new()));

    let fourth = ws.rotator(4).next_phrase().expect("phrase");
    assert_eq!(fourth.origin, UnusedOrigin::Reset(ResetReason::Exhausted));
    assert!(cycle.contains(&fourth.phrase));
    assert_eq!(ws.tracked().expect("tracking").len(), 2);
}

#[test]
fn every_phrase_appears_once_per_cycle_over_several_cycles() {
    let corpus: Vec<String> = (0..12).map(|i| format!("phrase {i}")).collect();
    let ws = Workspace::with_corpus(&corpus.join("\n"));

    for cycle in 0..3u64 {
        let mut seen = HashSet::new();
        for call in 0..12u64 {
            let phrase = ws.rotator(cycle * 100 + call).get_post_text().expect("phrase");
            assert!(seen.insert(phrase), "repeat within cycle {cycle}");
        }
        assert_eq!(seen.len(), corpus.len());
    }
}

#[test]
fn missing_tracking_file_starts_fresh_cycle() {
    let ws = Workspace::with_corpus("solo\nduo\n");
    assert!(ws.tracked().is_none());

    let selection = ws.rotator(0).next_phrase().expect("phrase");

    assert_eq!(selection.origin, UnusedOrigin::Reset(ResetReason::Absent));
    assert_eq!(selection.remaining, 1);
    assert!(selection.persistence.is_saved());
}

#[test]
fn phrases_removed_from_corpus_are_dropped_from_tracking() {
    let ws = Workspace::with_corpus("keep one\nkeep two\n");
    ws.write_tracking(r#"["deleted line", "keep two"]"#);

    let selection = ws.rotator(0).next_phrase().expect("phrase");

    assert_eq!(selection.phrase, "keep two");
    assert_eq!(ws.tracked(), Some(Vec::new()));
}

#[test]
fn malformed_tracking_file_is_replaced() {
    let ws = Workspace::with_corpus("x\ny\nz\n");
    ws.write_tracking("[\"x\", 42]");

    let selection = ws.rotator(5).next_phrase().expect("phrase");

    assert_eq!(selection.origin, UnusedOrigin::Reset(ResetReason::Invalid));
    let tracked = ws.tracked().expect("rewritten");
    assert_eq!(tracked.len(), 2);
    assert!(!tracked.contains(&selection.phrase));
}

#[test]
fn corpus_edits_between_runs_are_respected() {
    let ws = Workspace::with_corpus("old\n");
    ws.rotator(0).get_post_text().expect("phrase");

    fs::write(ws.corpus_path(), "new one\nnew two\n").expect("rewrite corpus");
    ws.write_tracking(r#"["old"]"#);

    let selection = ws.rotator(1).next_phrase().expect("phrase");
    assert_eq!(selection.origin, UnusedOrigin::Reset(ResetReason::Stale));
    assert!(selection.phrase.starts_with("new"));
}

#[test]
fn blank_corpus_fails_without_touching_tracking() {
    let ws = Workspace::with_corpus("\n\n   \n");

    assert!(ws.rotator(0).get_post_text().is_err());
    assert!(ws.tracked().is_none());
}

#[test]
fn unwritable_tracking_location_still_yields_phrase() {
    let ws = Workspace::with_corpus("only\n");
    // A regular file where the state directory should be.
    fs::write(ws.path().join("state"), "not a directory").expect("block dir");

    let selection = ws.rotator(0).next_phrase().expect("phrase");

    assert_eq!(selection.phrase, "only");
    assert!(matches!(selection.persistence, Persistence::Failed(_)));
}

#[test]
fn status_and_reset_reflect_tracking_file() {
    let ws = Workspace::with_corpus("a\nb\nc\nd\n");
    ws.rotator(0).get_post_text().expect("phrase");
    ws.rotator(1).get_post_text().expect("phrase");

    let status = ws.rotator(2).status().expect("status");
    assert_eq!((status.remaining, status.total), (2, 4));

    assert_eq!(ws.rotator(3).reset().expect("reset"), 4);
    assert_eq!(
        ws.tracked(),
        Some(vec!["a".into(), "b".into(), "c".into(), "d".into()])
    );
}
