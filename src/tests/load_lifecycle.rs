//! The screen before, during and after the one-shot initial load.

use crate::model::{LoadError, Record};
use crate::state::{LoadStatus, PageSize};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;
use std::path::PathBuf;

#[test]
fn empty_table_renders_while_loading() {
    let (mut harness, _tx) =
        AcceptanceTestHarness::pending(PageSize::default(), 100, 20).expect("harness");

    let output = harness.render_to_string();

    assert_eq!(harness.state().load_status, LoadStatus::Loading);
    assert!(output.contains("Loading records…"));
    assert!(output.contains("Search by name"));
}

#[test]
fn keys_before_load_finishes_are_harmless() {
    let (mut harness, _tx) =
        AcceptanceTestHarness::pending(PageSize::default(), 100, 20).expect("harness");

    harness.send_keys(&[
        KeyCode::Char('j'),
        KeyCode::Char(' '),
        KeyCode::Char('a'),
        KeyCode::Char('d'),
        KeyCode::Char('e'),
        KeyCode::Char('l'),
        KeyCode::End,
    ]);

    assert!(harness.is_running());
    assert!(harness.state().view_model().selection().is_empty());
    assert_eq!(harness.state().snapshot().page_info.current_page, 1);
}

#[test]
fn arriving_records_replace_loading_message() {
    let (mut harness, tx) =
        AcceptanceTestHarness::pending(PageSize::default(), 100, 20).expect("harness");
    assert!(!harness.tick());

    tx.send(Ok(vec![
        Record::new("1", "Aaron Miles", "aaron@mailinator.com", "member"),
        Record::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "admin"),
    ]))
    .expect("receiver alive");
    assert!(harness.tick());

    let output = harness.render_to_string();
    assert_eq!(harness.state().load_status, LoadStatus::Loaded { count: 2 });
    assert!(output.contains("Aaron Miles"));
    assert!(output.contains("Admin"), "role shown capitalised");
    assert!(!output.contains("Loading records…"));
}

#[test]
fn search_typed_during_load_applies_to_arriving_records() {
    let (mut harness, tx) =
        AcceptanceTestHarness::pending(PageSize::default(), 100, 20).expect("harness");
    harness.send_key(KeyCode::Char('/'));
    harness.type_text("naik");

    tx.send(Ok(vec![
        Record::new("1", "Aaron Miles", "aaron@mailinator.com", "member"),
        Record::new("2", "Aishwarya Naik", "aishwarya@mailinator.com", "admin"),
    ]))
    .expect("receiver alive");
    harness.tick();

    let ids = harness.state().snapshot().visible_ids();
    assert_eq!(ids.len(), 1);
    assert_eq!(ids[0].as_str(), "2");
}

#[test]
fn failed_load_shows_reason_and_empty_table() {
    let mut harness = AcceptanceTestHarness::with_outcome(
        Err(LoadError::Status {
            url: "https://example.com/members.json".to_string(),
            status: 503,
        }),
        PageSize::default(),
        160,
        20,
    )
    .expect("harness");

    let output = harness.render_to_string();

    assert!(matches!(
        harness.state().load_status,
        LoadStatus::Failed { .. }
    ));
    assert!(output.contains("Load failed: Request to https://example.com/members.json returned HTTP 503"));
    assert!(output.contains("No records: the load failed"));
    assert!(harness.state().view_model().store().is_empty());
}

#[test]
fn missing_fixture_is_a_failed_load_not_a_crash() {
    let missing = PathBuf::from("tests/fixtures/does_not_exist.json");

    let harness = AcceptanceTestHarness::from_fixture(missing.to_str().unwrap_or_default())
        .expect("harness");

    match &harness.state().load_status {
        LoadStatus::Failed { reason } => assert!(reason.contains("does_not_exist.json")),
        other => panic!("Expected Failed, got {:?}", other),
    }
}
