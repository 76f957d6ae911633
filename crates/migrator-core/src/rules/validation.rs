use crate::errors::{MigratorError, Result};
use crate::model::ScriptFile;

use super::invariants;

/// Validate the naming of a freshly loaded script set
///
/// Lexical order is only a convention, so the set is checked once at load
/// time instead of being trusted:
///
/// 1. No two files resolve to the same (name, direction)
/// 2. No script uses the reserved bootstrap name
/// 3. Down-scripts without an up-script are logged as warnings only
///
/// # Errors
///
/// Returns `AmbiguousScriptNames` listing every ambiguous name, or
/// `ReservedScriptName` for the first script using the bootstrap name.
pub fn validate_scripts(scripts: &[ScriptFile]) -> Result<()> {
    let ambiguous = invariants::find_ambiguous_names(scripts);
    if !ambiguous.is_empty() {
        return Err(MigratorError::AmbiguousScriptNames {
            names: ambiguous
                .iter()
                .map(|(name, direction)| format!("{} ({})", name, direction))
                .collect(),
        });
    }

    if let Some(name) = invariants::find_reserved_names(scripts).first() {
        return Err(MigratorError::ReservedScriptName {
            name: name.to_string(),
        });
    }

    for name in invariants::find_orphan_down_scripts(scripts) {
        tracing::warn!(migration = name.as_str(), "down-script has no matching up-script");
    }

    Ok(())
}
