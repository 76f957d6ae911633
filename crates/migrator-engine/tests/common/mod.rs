#![allow(dead_code)]

use std::collections::BTreeSet;
use std::fs;

use migrator_core::BOOTSTRAP_MIGRATION;
use migrator_store::ledger;
use migrator_store::FsScriptRepository;
use rusqlite::Connection;
use tempfile::TempDir;

/// Script folder holding three reversible migrations A, B, C
pub fn abc_folder() -> TempDir {
    folder_with(&[
        ("A.sql", "CREATE TABLE a (id INTEGER);"),
        ("A.down.sql", "DROP TABLE a;"),
        ("B.sql", "CREATE TABLE b (id INTEGER);"),
        ("B.down.sql", "DROP TABLE b;"),
        ("C.sql", "CREATE TABLE c (id INTEGER);"),
        ("C.down.sql", "DROP TABLE c;"),
    ])
}

pub fn folder_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, sql) in files {
        fs::write(dir.path().join(name), sql).unwrap();
    }
    dir
}

pub fn repo(dir: &TempDir) -> FsScriptRepository {
    FsScriptRepository::new(dir.path())
}

pub fn memory_db() -> Connection {
    Connection::open_in_memory().unwrap()
}

/// Applied names, bootstrap entry excluded
pub fn applied(conn: &mut Connection) -> Vec<String> {
    ledger::list_applied(conn)
        .unwrap()
        .into_iter()
        .filter(|n| !n.is_bootstrap())
        .map(|n| n.to_string())
        .collect()
}

/// Applied names, bootstrap entry included
pub fn applied_set(conn: &mut Connection) -> BTreeSet<String> {
    ledger::list_applied(conn)
        .unwrap()
        .into_iter()
        .map(|n| n.to_string())
        .collect()
}

pub fn bootstrap_only() -> BTreeSet<String> {
    [BOOTSTRAP_MIGRATION.to_string()].into_iter().collect()
}

pub fn table_exists(conn: &Connection, table: &str) -> bool {
    conn.query_row(
        "SELECT count(1) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get::<_, i64>(0),
    )
    .unwrap()
        > 0
}
