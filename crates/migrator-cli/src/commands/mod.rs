pub mod output;
pub mod sqlite;
