use chrono::{DateTime, Utc};
use serde::Serialize;

use super::name::MigrationName;

/// A row of the ledger table: "this up-migration has been applied"
///
/// Down-scripts never get entries of their own; reverting deletes the
/// entry of the migration being reverted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    pub name: MigrationName,
    pub applied_at: DateTime<Utc>,
    /// Hex SHA-256 of the SQL that was applied; `None` for the bootstrap entry
    /// and for rows written by tools that did not record one
    pub checksum: Option<String>,
}

impl LedgerEntry {
    pub fn new(name: MigrationName, applied_at: DateTime<Utc>, checksum: Option<String>) -> Self {
        Self {
            name,
            applied_at,
            checksum,
        }
    }
}
