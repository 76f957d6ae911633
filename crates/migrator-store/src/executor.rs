//! The SQL executor seam
//!
//! Ledger and runner never hold a connection type directly; they are handed
//! an explicit `&mut dyn SqlExecutor` for the duration of a run. Values
//! cross the seam as text so that any transport can implement it.

use crate::errors::{from_rusqlite, Result};
use rusqlite::types::ValueRef;
use rusqlite::{params_from_iter, Connection};

/// One result row, columns as optional text
pub type Row = Vec<Option<String>>;

/// Opaque executor of SQL text and simple parameterised queries
pub trait SqlExecutor {
    /// Run a script of zero or more statements
    fn execute_batch(&mut self, sql: &str) -> Result<()>;

    /// Run one parameterised statement, returning the number of affected rows
    fn execute(&mut self, sql: &str, params: &[&str]) -> Result<usize>;

    /// Run a parameterised query and return every row
    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<Row>>;
}

impl SqlExecutor for Connection {
    fn execute_batch(&mut self, sql: &str) -> Result<()> {
        Connection::execute_batch(self, sql).map_err(from_rusqlite)
    }

    fn execute(&mut self, sql: &str, params: &[&str]) -> Result<usize> {
        Connection::execute(self, sql, params_from_iter(params.iter())).map_err(from_rusqlite)
    }

    fn query(&mut self, sql: &str, params: &[&str]) -> Result<Vec<Row>> {
        let mut stmt = self.prepare(sql).map_err(from_rusqlite)?;
        let column_count = stmt.column_count();

        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                (0..column_count)
                    .map(|i| row.get_ref(i).map(value_to_text))
                    .collect::<rusqlite::Result<Row>>()
            })
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(rows)
    }
}

fn value_to_text(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    }
}
