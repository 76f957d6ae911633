//! Migration runner
//!
//! ## Run pipeline (in order):
//! 1. Bootstrap the ledger (up only; down requires an existing ledger)
//! 2. Read the applied set
//! 3. Load and validate scripts
//! 4. Reconcile into a plan (empty plan ends the run: nothing to do)
//! 5. dry_run short-circuit (no writes)
//! 6. Execute each step: run its SQL, then record or revert it
//!
//! Steps are not wrapped in a transaction. The first failure aborts the run;
//! earlier steps stay applied and recorded, so a re-run resumes at the
//! failed step.

use std::collections::BTreeSet;
use std::time::Instant;

use migrator_core::errors::MigratorError;
use migrator_core::{
    log_op_end, log_op_error, log_op_start, reconcile, Direction, MigrationName, Operation, Plan,
};
use migrator_core_types::schema::{
    OP_MIGRATE_DOWN, OP_MIGRATE_UP, OP_RUN_SCRIPT, SPAN_MIGRATION_RUN,
};
use migrator_core_types::RunId;
use migrator_store::errors::{script_failed, Result};
use migrator_store::ledger::{self, checksums::compute_checksum};
use migrator_store::{ScriptRepository, SqlExecutor};
use serde::Serialize;
use tracing::{info, info_span};

/// Options for a single up or down run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Stop at this migration; accepts the base name or its `.down` stem
    pub target: Option<String>,
    /// If true, compute the plan but execute and record nothing
    pub dry_run: bool,
}

impl RunOptions {
    pub fn to(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            dry_run: false,
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RunOutcome {
    /// The plan was empty
    NothingToDo,
    /// Every step of the plan ran, in this order
    Completed { migrations: Vec<MigrationName> },
    /// Dry run: the plan that would have run
    Planned { plan: Plan },
}

/// Report of a successful run
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub run_id: RunId,
    pub direction: Direction,
    /// Whether this run created the ledger table
    pub bootstrapped: bool,
    #[serde(flatten)]
    pub outcome: RunOutcome,
}

impl RunReport {
    /// Names executed (or planned, for a dry run), in execution order
    pub fn names(&self) -> Vec<&str> {
        match &self.outcome {
            RunOutcome::NothingToDo => Vec::new(),
            RunOutcome::Completed { migrations } => {
                migrations.iter().map(|n| n.as_str()).collect()
            }
            RunOutcome::Planned { plan } => plan.names(),
        }
    }

    pub fn count(&self) -> usize {
        self.names().len()
    }

    pub fn is_nothing_to_do(&self) -> bool {
        self.outcome == RunOutcome::NothingToDo
    }
}

/// Migrate the database behind `exec` in `direction`
///
/// # Errors
///
/// - `NotFound` when migrating down a database without a ledger, or when
///   the script folder is gone
/// - `Validation` for ambiguous or reserved script names
/// - `TargetNotFound` when the target is not eligible; nothing is executed
/// - `Database` when a script or a ledger write fails
/// - `Conflict` when the ledger already records a planned migration
pub fn run(
    exec: &mut dyn SqlExecutor,
    repo: &dyn ScriptRepository,
    direction: Direction,
    options: &RunOptions,
) -> Result<RunReport> {
    let run_id = RunId::new();
    let span = info_span!(SPAN_MIGRATION_RUN, run_id = %run_id, direction = direction.as_str());
    let _guard = span.enter();

    let op = op_name(direction);
    log_op_start!(
        op,
        target = options.target.as_deref(),
        dry_run = options.dry_run
    );
    let start = Instant::now();

    let (bootstrapped, outcome) = run_impl(exec, repo, direction, options).map_err(|e| {
        log_op_error!(
            op,
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let report = RunReport {
        run_id,
        direction,
        bootstrapped,
        outcome,
    };

    log_op_end!(
        op,
        duration_ms = start.elapsed().as_millis() as u64,
        applied_count = report.count()
    );

    Ok(report)
}

fn run_impl(
    exec: &mut dyn SqlExecutor,
    repo: &dyn ScriptRepository,
    direction: Direction,
    options: &RunOptions,
) -> Result<(bool, RunOutcome)> {
    let (bootstrapped, applied) = load_applied(exec, direction, options.dry_run)?;

    let scripts = repo.load()?;
    let plan = reconcile(&scripts, &applied, direction, options.target.as_deref())?;

    if plan.is_empty() {
        info!("nothing to do");
        return Ok((bootstrapped, RunOutcome::NothingToDo));
    }

    if options.dry_run {
        info!(plan_len = plan.len(), "dry run, nothing executed");
        return Ok((bootstrapped, RunOutcome::Planned { plan }));
    }

    let mut migrations = Vec::with_capacity(plan.len());
    for operation in plan.iter() {
        execute_step(exec, operation)?;
        migrations.push(operation.name.clone());
    }

    Ok((bootstrapped, RunOutcome::Completed { migrations }))
}

/// Bootstrap as needed and read the applied set
///
/// A dry run never bootstraps; an absent ledger then means nothing applied.
fn load_applied(
    exec: &mut dyn SqlExecutor,
    direction: Direction,
    dry_run: bool,
) -> Result<(bool, BTreeSet<MigrationName>)> {
    match direction {
        Direction::Up if dry_run => {
            if ledger::is_bootstrapped(exec)? {
                Ok((false, ledger::list_applied(exec)?))
            } else {
                Ok((false, BTreeSet::new()))
            }
        }
        Direction::Up => {
            let bootstrapped = ledger::ensure_bootstrapped(exec)?;
            Ok((bootstrapped, ledger::list_applied(exec)?))
        }
        Direction::Down => {
            if !ledger::is_bootstrapped(exec)? {
                return Err(MigratorError::LedgerMissing.into());
            }
            Ok((false, ledger::list_applied(exec)?))
        }
    }
}

fn execute_step(exec: &mut dyn SqlExecutor, operation: &Operation) -> Result<()> {
    let name = operation.name.as_str();
    log_op_start!(
        OP_RUN_SCRIPT,
        migration = name,
        direction = operation.direction.as_str()
    );
    let start = Instant::now();

    let result = apply_step(exec, operation);
    match &result {
        Ok(()) => {
            log_op_end!(
                OP_RUN_SCRIPT,
                duration_ms = start.elapsed().as_millis() as u64,
                migration = name
            );
        }
        Err(e) => {
            log_op_error!(
                OP_RUN_SCRIPT,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                migration = name
            );
        }
    }
    result
}

fn apply_step(exec: &mut dyn SqlExecutor, operation: &Operation) -> Result<()> {
    let name = operation.name.as_str();

    exec.execute_batch(&operation.sql)
        .map_err(|e| script_failed(name, operation.direction, &e))?;

    match operation.direction {
        Direction::Up => {
            let checksum = compute_checksum(&operation.sql);
            ledger::record_applied(exec, name, Some(checksum.as_str()))
        }
        Direction::Down => ledger::record_reverted(exec, name),
    }
}

fn op_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => OP_MIGRATE_UP,
        Direction::Down => OP_MIGRATE_DOWN,
    }
}
