use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Direction, MigrationName, ScriptFile};

/// Find (name, direction) pairs claimed by more than one script file
///
/// `001-init.sql` and `001-init.txt` both resolve to the up-script
/// `001-init`; the migrator cannot tell which one is meant.
pub fn find_ambiguous_names(scripts: &[ScriptFile]) -> Vec<(MigrationName, Direction)> {
    let mut counts: BTreeMap<(&MigrationName, Direction), usize> = BTreeMap::new();

    for script in scripts {
        *counts.entry((script.name(), script.direction())).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|((name, direction), _)| (name.clone(), direction))
        .collect()
}

/// Find scripts using the reserved bootstrap name
pub fn find_reserved_names(scripts: &[ScriptFile]) -> Vec<MigrationName> {
    let reserved: BTreeSet<&MigrationName> = scripts
        .iter()
        .filter(|s| s.name().is_bootstrap())
        .map(|s| s.name())
        .collect();

    reserved.into_iter().cloned().collect()
}

/// Find down-scripts with no up-script of the same name
///
/// These can still run if the ledger records the name (the up-script may
/// have been deleted after it was applied), so they are reported, not rejected.
pub fn find_orphan_down_scripts(scripts: &[ScriptFile]) -> Vec<MigrationName> {
    let ups: BTreeSet<&MigrationName> = scripts
        .iter()
        .filter(|s| s.is_up())
        .map(|s| s.name())
        .collect();

    let orphans: BTreeSet<&MigrationName> = scripts
        .iter()
        .filter(|s| s.is_down() && !ups.contains(s.name()))
        .map(|s| s.name())
        .collect();

    orphans.into_iter().cloned().collect()
}
