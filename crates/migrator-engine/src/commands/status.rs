//! Read-only migration status
//!
//! Joins the scripts on disk with the ledger. Never bootstraps: a database
//! without a ledger simply has every migration pending.

use std::collections::BTreeMap;
use std::time::Instant;

use chrono::{DateTime, Utc};
use migrator_core::{log_op_end, log_op_error, log_op_start, MigrationName, ScriptFile};
use migrator_core_types::schema::OP_STATUS;
use migrator_store::errors::Result;
use migrator_store::ledger::{self, checksums::has_drifted};
use migrator_store::{ScriptRepository, SqlExecutor};
use serde::Serialize;

/// Where a migration stands relative to the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MigrationState {
    Applied,
    Pending,
    /// Recorded in the ledger but no up-script on disk
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusEntry {
    pub name: MigrationName,
    pub state: MigrationState,
    pub applied_at: Option<DateTime<Utc>>,
    /// A down-script exists for this migration
    pub reversible: bool,
    /// The up-script changed since it was applied
    pub drifted: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    /// Whether the ledger table exists at all
    pub ledger_present: bool,
    /// Ordered by name; the bootstrap entry is not listed
    pub migrations: Vec<StatusEntry>,
}

impl StatusReport {
    pub fn count(&self, state: MigrationState) -> usize {
        self.migrations.iter().filter(|m| m.state == state).count()
    }

    pub fn drifted(&self) -> impl Iterator<Item = &StatusEntry> {
        self.migrations.iter().filter(|m| m.drifted)
    }
}

/// Report the state of every known migration
///
/// # Errors
///
/// Fails when the folder cannot be loaded or the ledger cannot be read.
pub fn status(exec: &mut dyn SqlExecutor, repo: &dyn ScriptRepository) -> Result<StatusReport> {
    log_op_start!(OP_STATUS);
    let start = Instant::now();

    let report = status_impl(exec, repo).map_err(|e| {
        log_op_error!(
            OP_STATUS,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        OP_STATUS,
        duration_ms = start.elapsed().as_millis() as u64,
        script_count = report.migrations.len()
    );

    Ok(report)
}

fn status_impl(exec: &mut dyn SqlExecutor, repo: &dyn ScriptRepository) -> Result<StatusReport> {
    let scripts = repo.load()?;

    let ledger_present = ledger::is_bootstrapped(exec)?;
    let entries = if ledger_present {
        ledger::list_entries(exec)?
    } else {
        Vec::new()
    };

    let ups: BTreeMap<&MigrationName, &ScriptFile> = scripts
        .iter()
        .filter(|s| s.is_up())
        .map(|s| (s.name(), s))
        .collect();
    let is_reversible =
        |name: &MigrationName| scripts.iter().any(|s| s.is_down() && s.name() == name);

    let mut migrations: BTreeMap<MigrationName, StatusEntry> = ups
        .keys()
        .map(|&name| {
            (
                name.clone(),
                StatusEntry {
                    name: name.clone(),
                    state: MigrationState::Pending,
                    applied_at: None,
                    reversible: is_reversible(name),
                    drifted: false,
                },
            )
        })
        .collect();

    for entry in entries.into_iter().filter(|e| !e.name.is_bootstrap()) {
        let script = ups.get(&entry.name);
        let drifted = script
            .map(|script| has_drifted(entry.checksum.as_deref(), script.sql()))
            .unwrap_or(false);

        migrations.insert(
            entry.name.clone(),
            StatusEntry {
                reversible: is_reversible(&entry.name),
                state: if script.is_some() {
                    MigrationState::Applied
                } else {
                    MigrationState::Missing
                },
                applied_at: Some(entry.applied_at),
                drifted,
                name: entry.name,
            },
        );
    }

    Ok(StatusReport {
        ledger_present,
        migrations: migrations.into_values().collect(),
    })
}
