pub mod ledger;
pub mod name;
pub mod plan;
pub mod script;

pub use ledger::LedgerEntry;
pub use name::{Direction, MigrationName, BOOTSTRAP_MIGRATION, DOWN_SUFFIX};
pub use plan::{Operation, Plan};
pub use script::ScriptFile;
