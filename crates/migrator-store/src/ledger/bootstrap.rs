//! Ledger bootstrap
//!
//! The ledger table is created by an embedded script, then recorded in
//! itself under the reserved bootstrap name so it is never re-applied.

use migrator_core::BOOTSTRAP_MIGRATION;
use tracing::info;

use super::entries::record_applied;
use super::LEDGER_TABLE;
use crate::errors::{ledger_error, Result};
use crate::executor::SqlExecutor;

const TABLE_EXISTS_SQL: &str = "SELECT count(1) FROM sqlite_master WHERE type = 'table' AND name = ?1";

/// The embedded script creating the ledger table
pub fn bootstrap_sql() -> &'static str {
    include_str!("../../migrations/20210624-01-init-migration-scripts.sql")
}

/// Check the catalog for the ledger table
pub fn is_bootstrapped(exec: &mut dyn SqlExecutor) -> Result<bool> {
    let rows = exec.query(TABLE_EXISTS_SQL, &[LEDGER_TABLE])?;
    let count = rows
        .first()
        .and_then(|row| row.first())
        .and_then(|value| value.as_deref())
        .ok_or_else(|| ledger_error("is_bootstrapped", "catalog lookup returned no rows"))?;

    count
        .parse::<i64>()
        .map(|n| n > 0)
        .map_err(|_| ledger_error("is_bootstrapped", format!("unexpected count {count:?}")))
}

/// Create the ledger table if it does not exist yet
///
/// Returns `true` when this call created it. A second call on a
/// bootstrapped database is a no-op returning `false`.
pub fn ensure_bootstrapped(exec: &mut dyn SqlExecutor) -> Result<bool> {
    if is_bootstrapped(exec)? {
        return Ok(false);
    }

    info!(migration = BOOTSTRAP_MIGRATION, "enabling migrations");
    exec.execute_batch(bootstrap_sql())?;
    record_applied(exec, BOOTSTRAP_MIGRATION, None)?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_bootstrap_sql_creates_ledger_table() {
        assert!(bootstrap_sql().contains(LEDGER_TABLE));
    }

    #[test]
    fn test_fresh_database_is_not_bootstrapped() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert!(!is_bootstrapped(&mut conn).unwrap());
    }

    #[test]
    fn test_ensure_bootstrapped_reports_creation_once() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert!(ensure_bootstrapped(&mut conn).unwrap());
        assert!(!ensure_bootstrapped(&mut conn).unwrap());
        assert!(is_bootstrapped(&mut conn).unwrap());
    }
}
