use serde::Serialize;

use super::name::{Direction, MigrationName};

/// One migration script as read from the script folder
///
/// Immutable once read; the direction is decided at read time from the
/// file stem and never re-derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptFile {
    name: MigrationName,
    direction: Direction,
    sql: String,
}

impl ScriptFile {
    pub fn new(name: impl Into<MigrationName>, direction: Direction, sql: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction,
            sql: sql.into(),
        }
    }

    /// Build a script from a file stem, deriving the direction from the `.down` suffix
    pub fn from_stem(stem: &str, sql: impl Into<String>) -> Self {
        let (name, direction) = MigrationName::from_stem(stem);
        Self::new(name, direction, sql)
    }

    pub fn name(&self) -> &MigrationName {
        &self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn is_up(&self) -> bool {
        self.direction == Direction::Up
    }

    pub fn is_down(&self) -> bool {
        self.direction == Direction::Down
    }
}
