//! Execution ledger
//!
//! Provides:
//! - Lazy, idempotent bootstrap of the `migration_script` table from an
//!   embedded script
//! - Reading the applied set and full entries
//! - Recording applied / reverted migrations
//! - SQL checksums stored alongside each entry

mod bootstrap;
pub mod checksums;
mod entries;

pub use bootstrap::{bootstrap_sql, ensure_bootstrapped, is_bootstrapped};
pub use entries::{list_applied, list_entries, record_applied, record_reverted};

/// Name of the ledger table
pub const LEDGER_TABLE: &str = "migration_script";
