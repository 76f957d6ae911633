//! Run inputs and their validation
//!
//! Inputs arrive optional so that every missing or invalid one can be
//! reported in a single error, before the database is touched.

use std::path::PathBuf;

use migrator_core::errors::MigratorError;
use migrator_core::ExError;
use migrator_core_types::Sensitive;

/// Raw inputs as supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct Inputs {
    pub connection_string: Option<Sensitive<String>>,
    pub folder: Option<PathBuf>,
}

impl Inputs {
    pub fn new(connection_string: impl Into<String>, folder: impl Into<PathBuf>) -> Self {
        Self {
            connection_string: Some(Sensitive::new(connection_string.into())),
            folder: Some(folder.into()),
        }
    }
}

/// Inputs that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedInputs {
    pub connection_string: Sensitive<String>,
    pub folder: PathBuf,
}

/// Check that both inputs are present and the folder exists
///
/// # Errors
///
/// Returns a `Validation` error whose message lists every violation, one
/// per line.
pub fn validate_inputs(inputs: &Inputs) -> Result<ValidatedInputs, ExError> {
    let mut errors = Vec::new();

    let connection_string = inputs
        .connection_string
        .as_ref()
        .filter(|c| !c.is_blank());
    if connection_string.is_none() {
        errors.push("--connection-string is required.".to_string());
    }

    let folder = inputs
        .folder
        .as_ref()
        .filter(|f| !f.as_os_str().is_empty());
    match folder {
        None => errors.push("--folder is required.".to_string()),
        Some(folder) if !folder.is_dir() => errors.push(
            MigratorError::FolderNotFound {
                path: folder.display().to_string(),
            }
            .to_string(),
        ),
        Some(_) => {}
    }

    match (connection_string, folder) {
        (Some(connection_string), Some(folder)) if errors.is_empty() => Ok(ValidatedInputs {
            connection_string: connection_string.clone(),
            folder: folder.clone(),
        }),
        _ => Err(MigratorError::InvalidInput { errors }.into()),
    }
}
