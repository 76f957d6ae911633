//! Error helpers for migrator-store
//!
//! Every store failure is an `ExError`; these helpers keep kinds, ops and
//! messages consistent across the transport, repository and ledger.

use std::path::Path;

use migrator_core::errors::{ExError, ExErrorKind, MigratorError};
use migrator_core::Direction;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    ExError::new(ExErrorKind::Database)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Create a ledger error for a named ledger operation
pub fn ledger_error(op: &str, reason: impl Into<String>) -> ExError {
    MigratorError::Database {
        op: op.to_string(),
        reason: reason.into(),
    }
    .into()
}

/// Wrap a transport failure raised while running a migration script
pub fn script_failed(name: &str, direction: Direction, cause: &ExError) -> ExError {
    MigratorError::ScriptFailed {
        name: name.to_string(),
        direction,
        reason: cause.message().to_string(),
    }
    .into()
}

/// Create an IO error for a script file or folder
pub fn io_error(path: &Path, err: std::io::Error) -> ExError {
    MigratorError::Io {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
    .into()
}
