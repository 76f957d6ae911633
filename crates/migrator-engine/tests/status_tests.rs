//! Status reporting: applied / pending / missing and checksum drift

mod common;

use common::*;
use migrator_core::Direction;
use migrator_engine::{run, status, MigrationState, RunOptions};
use migrator_store::ledger;

#[test]
fn test_status_without_ledger_lists_everything_pending() {
    let dir = abc_folder();
    let mut conn = memory_db();

    let report = status(&mut conn, &repo(&dir)).unwrap();

    assert!(!report.ledger_present);
    assert_eq!(report.count(MigrationState::Pending), 3);
    assert!(report.migrations.iter().all(|m| m.reversible));
    // Read-only: the ledger is not created
    assert!(!ledger::is_bootstrapped(&mut conn).unwrap());
}

#[test]
fn test_status_after_partial_up() {
    let dir = abc_folder();
    let mut conn = memory_db();
    run(&mut conn, &repo(&dir), Direction::Up, &RunOptions::to("B")).unwrap();

    let report = status(&mut conn, &repo(&dir)).unwrap();

    let states: Vec<(&str, MigrationState)> = report
        .migrations
        .iter()
        .map(|m| (m.name.as_str(), m.state))
        .collect();
    assert_eq!(
        states,
        vec![
            ("A", MigrationState::Applied),
            ("B", MigrationState::Applied),
            ("C", MigrationState::Pending),
        ]
    );
    assert!(report.migrations[0].applied_at.is_some());
    assert!(report.migrations[2].applied_at.is_none());
}

#[test]
fn test_status_hides_bootstrap_entry() {
    let dir = folder_with(&[]);
    let mut conn = memory_db();
    ledger::ensure_bootstrapped(&mut conn).unwrap();

    let report = status(&mut conn, &repo(&dir)).unwrap();

    assert!(report.ledger_present);
    assert!(report.migrations.is_empty());
}

#[test]
fn test_status_reports_missing_script() {
    let dir = abc_folder();
    let mut conn = memory_db();
    run(&mut conn, &repo(&dir), Direction::Up, &RunOptions::default()).unwrap();
    std::fs::remove_file(dir.path().join("C.sql")).unwrap();

    let report = status(&mut conn, &repo(&dir)).unwrap();

    let c = report
        .migrations
        .iter()
        .find(|m| m.name.as_str() == "C")
        .unwrap();
    assert_eq!(c.state, MigrationState::Missing);
    assert!(c.reversible);
    assert_eq!(report.count(MigrationState::Missing), 1);
}

#[test]
fn test_status_detects_edited_script() {
    let dir = abc_folder();
    let mut conn = memory_db();
    run(&mut conn, &repo(&dir), Direction::Up, &RunOptions::default()).unwrap();
    std::fs::write(
        dir.path().join("B.sql"),
        "CREATE TABLE b (id INTEGER, extra TEXT);",
    )
    .unwrap();

    let report = status(&mut conn, &repo(&dir)).unwrap();

    let drifted: Vec<&str> = report.drifted().map(|m| m.name.as_str()).collect();
    assert_eq!(drifted, vec!["B"]);
}

#[test]
fn test_status_serializes_lowercase_states() {
    let dir = abc_folder();
    let mut conn = memory_db();
    run(&mut conn, &repo(&dir), Direction::Up, &RunOptions::to("A")).unwrap();

    let report = status(&mut conn, &repo(&dir)).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["ledger_present"], true);
    assert_eq!(json["migrations"][0]["name"], "A");
    assert_eq!(json["migrations"][0]["state"], "applied");
    assert_eq!(json["migrations"][1]["state"], "pending");
}
