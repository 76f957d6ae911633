//! Engine-level commands that require I/O (database, script folder).

use migrator_core::Direction;
use migrator_store::errors::Result;
use migrator_store::{db, FsScriptRepository};

use crate::commands::migrate::{run, RunOptions, RunReport};
use crate::commands::status::{status, StatusReport};
use crate::config::{validate_inputs, Inputs};

/// Engine-level commands
#[derive(Debug, Clone)]
pub enum MigrateCommand {
    /// Apply pending migrations, up to and including the target
    Up(RunOptions),
    /// Revert applied migrations, down to but excluding the target
    Down(RunOptions),
    /// Report applied, pending and missing migrations
    Status,
}

/// Result of applying an engine command.
#[derive(Debug, Clone)]
pub enum MigrateCommandResult {
    Run(RunReport),
    Status(StatusReport),
}

/// Apply an engine command against the database and folder in `inputs`
///
/// Inputs are validated before the database is opened. The connection
/// lives for this call only and is closed when it returns, whatever the
/// outcome.
pub fn apply_migrate_command(cmd: MigrateCommand, inputs: &Inputs) -> Result<MigrateCommandResult> {
    let validated = validate_inputs(inputs)?;

    let mut conn = db::open(&validated.connection_string)?;
    let repo = FsScriptRepository::new(validated.folder);

    match cmd {
        MigrateCommand::Up(options) => {
            run(&mut conn, &repo, Direction::Up, &options).map(MigrateCommandResult::Run)
        }
        MigrateCommand::Down(options) => {
            run(&mut conn, &repo, Direction::Down, &options).map(MigrateCommandResult::Run)
        }
        MigrateCommand::Status => status(&mut conn, &repo).map(MigrateCommandResult::Status),
    }
}
