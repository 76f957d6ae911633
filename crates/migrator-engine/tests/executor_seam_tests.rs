//! The runner only talks to the database through `SqlExecutor`; a wrapping
//! executor observes every statement it sends.

mod common;

use common::*;
use migrator_core::{Direction, ExErrorKind};
use migrator_engine::{run, RunOptions};
use migrator_store::executor::Row;
use migrator_store::{Result, SqlExecutor};
use rusqlite::Connection;

struct RecordingExecutor {
    inner: Connection,
    batches: Vec<String>,
    writes: Vec<String>,
}

impl RecordingExecutor {
    fn new() -> Self {
        Self {
            inner: memory_db(),
            batches: Vec::new(),
            writes: Vec::new(),
        }
    }
}

impl SqlExecutor for RecordingExecutor {
    fn execute_batch(&mut self, sql: &str) -> Result<()> {
        self.batches.push(sql.to_string());
        SqlExecutor::execute_batch(&mut self.inner, sql)
    }

    fn execute(&mut self, sql: &str, params: &[&str]) -> Result<usize> {
        self.writes.push(sql.to_string());
        SqlExecutor::execute(&mut self.inner, sql, params)
    }

    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<Row>> {
        SqlExecutor::query(&mut self.inner, sql, params)
    }
}

#[test]
fn test_scripts_and_ledger_writes_go_through_executor() {
    let dir = abc_folder();
    let mut exec = RecordingExecutor::new();

    run(&mut exec, &repo(&dir), Direction::Up, &RunOptions::default()).unwrap();

    // Bootstrap script, then A, B, C
    assert_eq!(exec.batches.len(), 4);
    assert_eq!(exec.batches[1], "CREATE TABLE a (id INTEGER);");
    // Bootstrap entry plus one entry per migration
    assert_eq!(
        exec.writes.iter().filter(|w| w.starts_with("INSERT")).count(),
        4
    );
}

#[test]
fn test_dry_run_sends_no_writes() {
    let dir = abc_folder();
    let mut exec = RecordingExecutor::new();

    let options = RunOptions {
        target: None,
        dry_run: true,
    };
    run(&mut exec, &repo(&dir), Direction::Up, &options).unwrap();

    assert!(exec.batches.is_empty());
    assert!(exec.writes.is_empty());
}

#[test]
fn test_target_not_found_sends_no_script() {
    let dir = abc_folder();
    let mut exec = RecordingExecutor::new();

    let err = run(&mut exec, &repo(&dir), Direction::Up, &RunOptions::to("Z")).unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::TargetNotFound);
    // Only the bootstrap script ran
    assert_eq!(exec.batches.len(), 1);
}
