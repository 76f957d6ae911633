//! Human-readable summaries printed to stdout

use migrator_core::Direction;
use migrator_engine::{MigrationState, RunOutcome, RunReport, StatusReport};

pub fn print_run(report: &RunReport) {
    if report.bootstrapped {
        println!("Created migration table.");
    }

    let (verb, planned) = match report.direction {
        Direction::Up => ("Upgraded", "Would upgrade"),
        Direction::Down => ("Downgraded", "Would downgrade"),
    };

    match &report.outcome {
        RunOutcome::NothingToDo => println!("Nothing to do!"),
        RunOutcome::Completed { migrations } => {
            for name in migrations {
                println!("{}: {}", verb, name);
            }
            println!("Done! {} migration(s) {}.", migrations.len(), past_tense(report.direction));
        }
        RunOutcome::Planned { plan } => {
            for name in plan.names() {
                println!("{}: {}", planned, name);
            }
            println!("Dry run: {} migration(s) would be {}.", plan.len(), past_tense(report.direction));
        }
    }
}

pub fn print_status(report: &StatusReport) {
    if !report.ledger_present {
        println!("Database does not contain a migration table yet.");
    }

    for entry in &report.migrations {
        let state = match entry.state {
            MigrationState::Applied => "applied",
            MigrationState::Pending => "pending",
            MigrationState::Missing => "missing",
        };
        let applied_at = entry
            .applied_at
            .map(|at| at.to_rfc3339())
            .unwrap_or_default();
        let drift = if entry.drifted { "  (changed since applied)" } else { "" };
        println!("{:<8} {}  {}{}", state, entry.name, applied_at, drift);
    }

    println!(
        "{} applied, {} pending, {} missing",
        report.count(MigrationState::Applied),
        report.count(MigrationState::Pending),
        report.count(MigrationState::Missing)
    );
}

fn past_tense(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "applied",
        Direction::Down => "reverted",
    }
}
