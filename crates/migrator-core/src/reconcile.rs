//! Migration-state reconciliation
//!
//! Computes, from the scripts on disk and the names recorded in the ledger,
//! the ordered list of scripts to run for a requested direction and
//! optional target. Pure: no I/O, no clock, no logging side effects beyond
//! a debug event.
//!
//! Up: every up-script not yet applied, bounded above by the target
//! (inclusive), ascending by name.
//!
//! Down: every down-script whose migration is applied, bounded below by the
//! target (exclusive, the target stays applied), descending by name.

use std::collections::BTreeSet;

use crate::errors::{MigratorError, Result};
use crate::model::{Direction, MigrationName, Operation, Plan, ScriptFile};

/// Compute the ordered plan for `direction`
///
/// `target` may be given as the migration's base name or as its down-script
/// stem (`<name>.down`); both resolve to the same migration. A blank
/// target is the same as no target.
///
/// # Errors
///
/// Returns `TargetNotFound` when an up target is neither applicable nor
/// applied, or when a down target is not applied.
pub fn reconcile(
    scripts: &[ScriptFile],
    applied: &BTreeSet<MigrationName>,
    direction: Direction,
    target: Option<&str>,
) -> Result<Plan> {
    let target = target
        .filter(|t| !t.trim().is_empty())
        .map(MigrationName::from_target);

    let operations = match direction {
        Direction::Up => plan_up(scripts, applied, target.as_ref())?,
        Direction::Down => plan_down(scripts, applied, target.as_ref())?,
    };

    tracing::debug!(
        direction = direction.as_str(),
        plan_len = operations.len(),
        "reconciled"
    );

    Ok(Plan::new(direction, operations))
}

fn plan_up(
    scripts: &[ScriptFile],
    applied: &BTreeSet<MigrationName>,
    target: Option<&MigrationName>,
) -> Result<Vec<Operation>> {
    let mut candidates: Vec<&ScriptFile> = scripts
        .iter()
        .filter(|s| s.is_up() && !applied.contains(s.name()))
        .collect();

    if let Some(target) = target {
        let known = applied.contains(target) || candidates.iter().any(|s| s.name() == target);
        if !known {
            return Err(MigratorError::TargetNotFound {
                target: target.to_string(),
                direction: Direction::Up,
            });
        }
        candidates.retain(|s| s.name() <= target);
    }

    candidates.sort_by(|a, b| a.name().cmp(b.name()));
    Ok(candidates.into_iter().map(Operation::from).collect())
}

fn plan_down(
    scripts: &[ScriptFile],
    applied: &BTreeSet<MigrationName>,
    target: Option<&MigrationName>,
) -> Result<Vec<Operation>> {
    let mut candidates: Vec<&ScriptFile> = scripts
        .iter()
        .filter(|s| s.is_down() && applied.contains(s.name()))
        .collect();

    if let Some(target) = target {
        if !applied.contains(target) {
            return Err(MigratorError::TargetNotFound {
                target: target.to_string(),
                direction: Direction::Down,
            });
        }
        candidates.retain(|s| s.name() > target);
    }

    candidates.sort_by(|a, b| b.name().cmp(a.name()));
    Ok(candidates.into_iter().map(Operation::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(names: &[&str]) -> BTreeSet<MigrationName> {
        names.iter().map(|n| MigrationName::from(*n)).collect()
    }

    #[test]
    fn test_up_skips_down_scripts() {
        let scripts = vec![
            ScriptFile::from_stem("A", "up a"),
            ScriptFile::from_stem("A.down", "down a"),
        ];

        let plan = reconcile(&scripts, &applied(&[]), Direction::Up, None).unwrap();
        assert_eq!(plan.names(), vec!["A"]);
        assert_eq!(plan.operations[0].sql, "up a");
    }

    #[test]
    fn test_down_requires_matching_down_script() {
        let scripts = vec![
            ScriptFile::from_stem("A", "up a"),
            ScriptFile::from_stem("B", "up b"),
            ScriptFile::from_stem("B.down", "down b"),
        ];

        let plan = reconcile(&scripts, &applied(&["A", "B"]), Direction::Down, None).unwrap();
        assert_eq!(plan.names(), vec!["B"]);
        assert_eq!(plan.operations[0].direction, Direction::Down);
    }

    #[test]
    fn test_down_target_accepts_down_stem() {
        let scripts = vec![
            ScriptFile::from_stem("A.down", ""),
            ScriptFile::from_stem("B.down", ""),
        ];

        let plan =
            reconcile(&scripts, &applied(&["A", "B"]), Direction::Down, Some("A.down")).unwrap();
        assert_eq!(plan.names(), vec!["B"]);
    }
}
