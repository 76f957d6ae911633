//! `sqlite` database family: up, down and status

use std::path::PathBuf;

use clap::{Args, Subcommand};
use migrator_core_types::Sensitive;
use migrator_engine::{apply_migrate_command, Inputs, MigrateCommand, MigrateCommandResult, RunOptions};

use super::output;

#[derive(Debug, Args)]
pub struct SqliteArgs {
    #[command(subcommand)]
    pub command: SqliteCommand,
}

#[derive(Debug, Subcommand)]
pub enum SqliteCommand {
    /// Apply pending migrations in ascending name order
    Up(RunArgs),
    /// Revert applied migrations in descending name order
    Down(RunArgs),
    /// Show applied, pending and missing migrations
    Status(StatusArgs),
}

/// Where to migrate
///
/// Both options are optional at parse time so that every missing one is
/// reported together.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// SQLite database path or `file:` URI
    #[arg(short = 'c', long, env = "MIGRATOR_CONNECTION_STRING", hide_env_values = true)]
    pub connection_string: Option<String>,

    /// Folder containing the migration scripts
    #[arg(short = 'f', long, env = "MIGRATOR_FOLDER")]
    pub folder: Option<PathBuf>,
}

impl From<ConnectionArgs> for Inputs {
    fn from(args: ConnectionArgs) -> Self {
        Inputs {
            connection_string: args.connection_string.map(Sensitive::new),
            folder: args.folder,
        }
    }
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Stop at this migration (inclusive for up, exclusive for down)
    #[arg(long)]
    pub to: Option<String>,

    /// Print the plan without executing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    fn split(self) -> (Inputs, RunOptions) {
        let options = RunOptions {
            target: self.to,
            dry_run: self.dry_run,
        };
        (self.connection.into(), options)
    }
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: SqliteArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        SqliteCommand::Up(run_args) => {
            let (inputs, options) = run_args.split();
            execute_command(MigrateCommand::Up(options), &inputs, false)
        }
        SqliteCommand::Down(run_args) => {
            let (inputs, options) = run_args.split();
            execute_command(MigrateCommand::Down(options), &inputs, false)
        }
        SqliteCommand::Status(status_args) => {
            let inputs = status_args.connection.into();
            execute_command(MigrateCommand::Status, &inputs, status_args.json)
        }
    }
}

fn execute_command(
    cmd: MigrateCommand,
    inputs: &Inputs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    match apply_migrate_command(cmd, inputs)? {
        MigrateCommandResult::Run(report) => output::print_run(&report),
        MigrateCommandResult::Status(report) if json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        MigrateCommandResult::Status(report) => output::print_status(&report),
    }
    Ok(())
}
