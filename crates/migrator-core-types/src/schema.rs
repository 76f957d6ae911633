//! Canonical names for structured log output
//!
//! Field keys, event names and op names shared by the logging macros, the
//! runner and the tests that assert on captured events. JSON log consumers
//! can rely on these staying stable.

// Fields every op event carries
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

/// Set on the `migration_run` span, inherited by every event inside it
pub const FIELD_RUN_ID: &str = "run_id";

/// Set on `run_script` events
pub const FIELD_MIGRATION: &str = "migration";

/// Set on the end event of an up or down run
pub const FIELD_APPLIED_COUNT: &str = "applied_count";

// Added by `log_op_error!`
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";
pub const FIELD_ERR_MIGRATION: &str = "err.migration";

// Event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Op names
pub const OP_MIGRATE_UP: &str = "migrate_up";
pub const OP_MIGRATE_DOWN: &str = "migrate_down";
pub const OP_RUN_SCRIPT: &str = "run_script";
pub const OP_STATUS: &str = "status";

/// Name of the span wrapping one up or down run
pub const SPAN_MIGRATION_RUN: &str = "migration_run";
