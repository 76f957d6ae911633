//! Fingerprints of applied SQL
//!
//! Each up-migration's SQL is hashed when it is recorded. `status` re-hashes
//! the file on disk and flags scripts edited after they were applied.

use sha2::{Digest, Sha256};

/// Hex SHA-256 of a script's SQL, as stored in `migration_script.checksum`
pub fn compute_checksum(sql: &str) -> String {
    hex::encode(Sha256::digest(sql.as_bytes()))
}

/// True when `sql` no longer hashes to the recorded checksum
///
/// Entries without a checksum (the bootstrap row, rows written by other
/// tools) never count as drifted.
pub fn has_drifted(recorded: Option<&str>, sql: &str) -> bool {
    recorded.is_some_and(|recorded| !recorded.eq_ignore_ascii_case(&compute_checksum(sql)))
}
