//! Script repository
//!
//! Reads migration scripts from a folder: one regular file per script,
//! non-recursive, hidden files skipped. File names must be UTF-8. The file
//! stem is the migration name, with an optional `.down` suffix marking a
//! down-script; the extension is stripped and never inspected.

use std::fs;
use std::path::{Path, PathBuf};

use migrator_core::errors::MigratorError;
use migrator_core::rules::validation::validate_scripts;
use migrator_core::ScriptFile;
use tracing::debug;

use crate::errors::{io_error, Result};

/// Source of migration scripts
pub trait ScriptRepository {
    /// Load every script, in no particular order
    fn load(&self) -> Result<Vec<ScriptFile>>;
}

/// Filesystem-backed script repository
#[derive(Debug, Clone)]
pub struct FsScriptRepository {
    folder: PathBuf,
}

impl FsScriptRepository {
    /// Create a repository reading scripts from `folder`
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }
}

impl ScriptRepository for FsScriptRepository {
    fn load(&self) -> Result<Vec<ScriptFile>> {
        if !self.folder.is_dir() {
            return Err(MigratorError::FolderNotFound {
                path: self.folder.display().to_string(),
            }
            .into());
        }

        let entries = fs::read_dir(&self.folder).map_err(|e| io_error(&self.folder, e))?;

        let mut scripts = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(&self.folder, e))?;
            let path = entry.path();

            if !path.is_file() || is_hidden(&path) {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                return Err(MigratorError::NonUtf8ScriptName {
                    path: path.display().to_string(),
                }
                .into());
            };

            let sql = fs::read_to_string(&path).map_err(|e| io_error(&path, e))?;
            scripts.push(ScriptFile::from_stem(stem, sql));
        }

        validate_scripts(&scripts)?;

        debug!(
            folder = %self.folder.display(),
            script_count = scripts.len(),
            "loaded scripts"
        );

        Ok(scripts)
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(Path::new("/scripts/.keep")));
        assert!(!is_hidden(Path::new("/scripts/001-init.sql")));
    }
}
