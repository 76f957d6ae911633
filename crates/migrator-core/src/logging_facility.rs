//! Structured logging for the migrator
//!
//! `init(profile)` installs the subscriber once per process. The `log_op_*`
//! macros emit the canonical `op`/`event` fields named in [`schema`], and
//! `test_capture` lets tests assert on what a run logged.
//!
//! Log output always goes to stderr; stdout is reserved for the CLI summary.
//!
//! # Usage
//!
//! ```rust
//! use migrator_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use migrator_core_types::schema;
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
