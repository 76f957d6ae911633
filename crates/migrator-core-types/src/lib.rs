//! Leaf types every migrator crate agrees on
//!
//! [`RunId`] tags the events of one invocation, [`Sensitive`] keeps
//! connection strings out of output, and [`schema`] names the log fields.

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RunId;
pub use sensitive::Sensitive;
