use crate::model::Direction;
use thiserror::Error;

/// Result type alias using MigratorError
pub type Result<T> = std::result::Result<T, MigratorError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure the migrator can surface falls into one of these kinds.
/// Each kind maps to a stable error code usable by scripts wrapping the CLI
/// and by tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Missing or invalid inputs, ambiguous script names
    Validation,
    /// Script folder or ledger table absent
    NotFound,
    /// `--to` names no eligible migration
    TargetNotFound,
    /// Any failure executing SQL or touching the ledger
    Database,
    /// Ledger already holds a name the Reconciler thought was absent
    Conflict,
    /// Reading a script file failed
    Io,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::TargetNotFound => "ERR_TARGET_NOT_FOUND",
            ExErrorKind::Database => "ERR_DATABASE",
            ExErrorKind::Conflict => "ERR_CONFLICT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a kind for programmatic handling plus the operation and
/// migration it happened in, for humans reading the CLI output.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    migration: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            migration: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the migration the error relates to
    pub fn with_migration(mut self, name: impl Into<String>) -> Self {
        self.migration = Some(name.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn migration(&self) -> Option<&str> {
        self.migration.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(migration) = &self.migration {
            write!(f, " (migration: {})", migration)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain failures raised by the migrator
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MigratorError {
    // ===== Validation Errors =====
    /// One or more required inputs are missing or invalid; all are reported together
    #[error("{}", errors.join("\n"))]
    InvalidInput { errors: Vec<String> },

    /// Several script files resolve to the same name and direction
    #[error("Ambiguous migration names: {}", names.join(", "))]
    AmbiguousScriptNames { names: Vec<String> },

    /// A script uses the name reserved for the ledger bootstrap
    #[error("Migration name {name} is reserved for the ledger bootstrap")]
    ReservedScriptName { name: String },

    /// A script file name is not valid UTF-8
    #[error("Script file name {path} is not valid UTF-8")]
    NonUtf8ScriptName { path: String },

    // ===== Lookup Errors =====
    /// Script folder does not exist
    #[error("Folder {path} does not exist.")]
    FolderNotFound { path: String },

    /// Down was requested against a database that was never bootstrapped
    #[error("Database does not contain a migration table.")]
    LedgerMissing,

    /// `--to` names neither an applicable nor an applied migration
    #[error("Migration \"{target}\" does not exist.")]
    TargetNotFound {
        target: String,
        direction: Direction,
    },

    // ===== Ledger Errors =====
    /// Ledger already records the migration
    #[error("Migration {name} is already recorded as applied")]
    AlreadyApplied { name: String },

    // ===== Execution Errors =====
    /// A migration script failed to execute
    #[error("Migration {name} failed while migrating {direction}: {reason}")]
    ScriptFailed {
        name: String,
        direction: Direction,
        reason: String,
    },

    /// Any other database failure
    #[error("Database error during {op}: {reason}")]
    Database { op: String, reason: String },

    /// Reading a script from disk failed
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },
}

/// Conversion from MigratorError to the canonical ExError
impl From<MigratorError> for ExError {
    fn from(err: MigratorError) -> Self {
        let message = err.to_string();
        match err {
            MigratorError::InvalidInput { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("validate_inputs")
                .with_message(message),

            MigratorError::AmbiguousScriptNames { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("load_scripts")
                .with_message(message),

            MigratorError::ReservedScriptName { name } => ExError::new(ExErrorKind::Validation)
                .with_op("load_scripts")
                .with_migration(name)
                .with_message(message),

            MigratorError::NonUtf8ScriptName { .. } => ExError::new(ExErrorKind::Validation)
                .with_op("load_scripts")
                .with_message(message),

            MigratorError::FolderNotFound { .. } => ExError::new(ExErrorKind::NotFound)
                .with_op("load_scripts")
                .with_message(message),

            MigratorError::LedgerMissing => ExError::new(ExErrorKind::NotFound)
                .with_op("list_applied")
                .with_message(message),

            MigratorError::TargetNotFound { target, .. } => {
                ExError::new(ExErrorKind::TargetNotFound)
                    .with_op("reconcile")
                    .with_migration(target)
                    .with_message(message)
            }

            MigratorError::AlreadyApplied { name } => ExError::new(ExErrorKind::Conflict)
                .with_op("record_applied")
                .with_migration(name)
                .with_message(message),

            MigratorError::ScriptFailed {
                name, direction, ..
            } => ExError::new(ExErrorKind::Database)
                .with_op(format!("migrate_{}", direction))
                .with_migration(name)
                .with_message(message),

            MigratorError::Database { op, .. } => ExError::new(ExErrorKind::Database)
                .with_op(op)
                .with_message(message),

            MigratorError::Io { .. } => ExError::new(ExErrorKind::Io)
                .with_op("read_script")
                .with_message(message),
        }
    }
}
