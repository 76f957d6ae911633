//! Database connection management
//!
//! Opens the SQLite database named by a connection string. Plain paths,
//! `file:` URIs and `:memory:` are all accepted.

use crate::errors::{from_rusqlite, Result};
use migrator_core_types::Sensitive;
use rusqlite::Connection;
use std::time::Duration;

/// Wait this long for a lock held by another connection before failing
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Open the database behind a connection string
///
/// The returned connection is the single connection of a run; dropping it
/// closes the database whatever the run's outcome.
pub fn open(connection_string: &Sensitive<String>) -> Result<Connection> {
    let conn = Connection::open(connection_string.expose()).map_err(from_rusqlite)?;
    configure(&conn)?;
    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.busy_timeout(BUSY_TIMEOUT).map_err(from_rusqlite)?;
    Ok(())
}
