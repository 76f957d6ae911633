//! Migrator Engine - Orchestration layer
//!
//! Drives a run end to end: validates inputs, acquires the connection,
//! bootstraps the ledger, reconciles and executes the plan. Also answers
//! read-only `status` queries.

pub mod commands;
pub mod config;

pub use commands::engine_command::{apply_migrate_command, MigrateCommand, MigrateCommandResult};
pub use commands::migrate::{run, RunOptions, RunOutcome, RunReport};
pub use commands::status::{status, MigrationState, StatusEntry, StatusReport};
pub use config::{validate_inputs, Inputs, ValidatedInputs};
