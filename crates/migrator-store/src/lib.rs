//! Migrator Store - SQL transport, script folder and ledger
//!
//! Provides:
//! - `SqlExecutor`, the narrow seam every database call goes through,
//!   implemented for `rusqlite::Connection`
//! - The script repository reading migration files from a folder
//! - The execution ledger (`migration_script` table) and its bootstrap

pub mod db;
pub mod errors;
pub mod executor;
pub mod ledger;
pub mod repository;

// Re-export key types
pub use errors::Result;
pub use executor::SqlExecutor;
pub use repository::{FsScriptRepository, ScriptRepository};
