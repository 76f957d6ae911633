//! Reading and writing ledger entries

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use migrator_core::errors::MigratorError;
use migrator_core::{LedgerEntry, MigrationName};
use tracing::debug;

use crate::errors::{ledger_error, Result};
use crate::executor::{Row, SqlExecutor};

const SELECT_NAMES_SQL: &str = "SELECT name FROM migration_script";
const SELECT_ENTRIES_SQL: &str =
    "SELECT name, created_at, checksum FROM migration_script ORDER BY name";
const COUNT_NAME_SQL: &str = "SELECT count(1) FROM migration_script WHERE name = ?1";
const INSERT_SQL: &str =
    "INSERT INTO migration_script (name, created_at, checksum) VALUES (?1, ?2, ?3)";
const INSERT_NO_CHECKSUM_SQL: &str =
    "INSERT INTO migration_script (name, created_at) VALUES (?1, ?2)";
const DELETE_SQL: &str = "DELETE FROM migration_script WHERE name = ?1";

/// All names currently recorded, bootstrap entry included
pub fn list_applied(exec: &mut dyn SqlExecutor) -> Result<BTreeSet<MigrationName>> {
    let rows = exec.query(SELECT_NAMES_SQL, &[])?;
    rows.into_iter()
        .map(|row| {
            text_column(&row, 0)
                .map(MigrationName::new)
                .ok_or_else(|| ledger_error("list_applied", "ledger row without a name"))
        })
        .collect()
}

/// All entries, ordered by name
pub fn list_entries(exec: &mut dyn SqlExecutor) -> Result<Vec<LedgerEntry>> {
    let rows = exec.query(SELECT_ENTRIES_SQL, &[])?;
    rows.iter().map(parse_entry).collect()
}

/// Record `name` as applied at the current UTC time
///
/// # Errors
///
/// Returns a `Conflict` error when the ledger already holds `name`.
pub fn record_applied(
    exec: &mut dyn SqlExecutor,
    name: &str,
    checksum: Option<&str>,
) -> Result<()> {
    if contains(exec, name)? {
        return Err(MigratorError::AlreadyApplied {
            name: name.to_string(),
        }
        .into());
    }

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
    match checksum {
        Some(checksum) => exec.execute(INSERT_SQL, &[name, now.as_str(), checksum])?,
        None => exec.execute(INSERT_NO_CHECKSUM_SQL, &[name, now.as_str()])?,
    };

    debug!(migration = name, "recorded applied");
    Ok(())
}

/// Remove the entry for `name`; absent names are not an error
pub fn record_reverted(exec: &mut dyn SqlExecutor, name: &str) -> Result<()> {
    let removed = exec.execute(DELETE_SQL, &[name])?;
    debug!(migration = name, removed, "recorded reverted");
    Ok(())
}

fn contains(exec: &mut dyn SqlExecutor, name: &str) -> Result<bool> {
    let rows = exec.query(COUNT_NAME_SQL, &[name])?;
    Ok(rows
        .first()
        .and_then(|row| text_column(row, 0))
        .map(|count| count != "0")
        .unwrap_or(false))
}

fn text_column(row: &Row, index: usize) -> Option<String> {
    row.get(index).cloned().flatten()
}

fn parse_entry(row: &Row) -> Result<LedgerEntry> {
    let name =
        text_column(row, 0).ok_or_else(|| ledger_error("list_entries", "ledger row without a name"))?;
    let created_at = text_column(row, 1)
        .ok_or_else(|| ledger_error("list_entries", format!("{name} has no created_at")))?;
    let applied_at = parse_timestamp(&created_at).ok_or_else(|| {
        ledger_error(
            "list_entries",
            format!("{name} has unreadable created_at {created_at:?}"),
        )
    })?;

    Ok(LedgerEntry::new(
        MigrationName::new(name),
        applied_at,
        text_column(row, 2),
    ))
}

/// Parse RFC 3339, falling back to SQLite's `datetime('now')` format for
/// rows written by hand
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let ts = parse_timestamp("2024-01-02T03:04:05.000006Z").unwrap();
        assert_eq!(ts.to_rfc3339_opts(SecondsFormat::Secs, true), "2024-01-02T03:04:05Z");
    }

    #[test]
    fn test_parse_timestamp_sqlite_format() {
        assert!(parse_timestamp("2024-01-02 03:04:05").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
