//! Migrator Core - model and reconciliation kernel
//!
//! This crate provides the pure, I/O-free parts of the migrator:
//! - Migration names, directions, script files and ledger entries
//! - The Reconciler that turns (scripts, applied set, direction, target)
//!   into an ordered plan
//! - Script naming rules checked when a folder is loaded
//! - The canonical error and logging facilities shared by every crate

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod reconcile;
pub mod rules;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, MigratorError, Result};
pub use model::{
    Direction, LedgerEntry, MigrationName, Operation, Plan, ScriptFile, BOOTSTRAP_MIGRATION,
    DOWN_SUFFIX,
};
pub use reconcile::reconcile;
