//! Operation logging macros
//!
//! Every op logs a `start`, then exactly one of `end` or `end_error`. Extra
//! `key = value` fields are passed through to `tracing` unchanged.

/// Log the start of an operation
///
/// ```
/// # use migrator_core::log_op_start;
/// log_op_start!("migrate_up");
/// log_op_start!("run_script", migration = "20240101-users", direction = "up");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START
            $(, $($field)+)?
        )
    };
}

/// Log the successful end of an operation
///
/// ```
/// # use migrator_core::log_op_end;
/// log_op_end!("migrate_up", duration_ms = 42, applied_count = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)+)?
        )
    };
}

/// Log a failed operation with the error's kind, stable code and migration
///
/// `$err` is anything convertible into `ExError`.
///
/// ```
/// # use migrator_core::log_op_error;
/// # use migrator_core::errors::MigratorError;
/// log_op_error!("migrate_down", MigratorError::LedgerMissing, duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)+)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            err.migration = ex_err.migration()
            $(, $($field)+)?
        );
    }};
}
