use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// File-stem suffix marking a down-script
pub const DOWN_SUFFIX: &str = ".down";

/// Reserved name recorded in the ledger when the ledger table itself is created
pub const BOOTSTRAP_MIGRATION: &str = "20210624-01-init-migration-scripts";

/// Opaque migration identifier, ordered by plain string comparison
///
/// Lexical order is the only ordering the migrator knows about, so names
/// must be chosen (usually date-prefixed) such that string order equals the
/// intended chronological order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MigrationName(String);

impl MigrationName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Normalize a user-supplied target
    ///
    /// A trailing `.down` is stripped so callers may name either the
    /// migration itself or its down-script.
    pub fn from_target(raw: &str) -> Self {
        let trimmed = raw.trim();
        Self(
            trimmed
                .strip_suffix(DOWN_SUFFIX)
                .unwrap_or(trimmed)
                .to_string(),
        )
    }

    /// Split a file stem into its base name and direction
    ///
    /// `20240101-users.down` becomes (`20240101-users`, Down); anything
    /// without the suffix is an up-script.
    pub fn from_stem(stem: &str) -> (Self, Direction) {
        match stem.strip_suffix(DOWN_SUFFIX) {
            Some(base) => (Self(base.to_string()), Direction::Down),
            None => (Self(stem.to_string()), Direction::Up),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_bootstrap(&self) -> bool {
        self.0 == BOOTSTRAP_MIGRATION
    }
}

impl fmt::Display for MigrationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for MigrationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MigrationName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for MigrationName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Which way a script moves the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stem_detects_down_suffix() {
        let (name, direction) = MigrationName::from_stem("20240101-users.down");
        assert_eq!(name.as_str(), "20240101-users");
        assert_eq!(direction, Direction::Down);
    }

    #[test]
    fn test_from_stem_defaults_to_up() {
        let (name, direction) = MigrationName::from_stem("20240101-users");
        assert_eq!(name.as_str(), "20240101-users");
        assert_eq!(direction, Direction::Up);
    }

    #[test]
    fn test_from_stem_only_strips_trailing_suffix() {
        let (name, direction) = MigrationName::from_stem("a.down.b");
        assert_eq!(name.as_str(), "a.down.b");
        assert_eq!(direction, Direction::Up);
    }

    #[test]
    fn test_from_target_normalizes_down_suffix() {
        assert_eq!(MigrationName::from_target("B.down").as_str(), "B");
        assert_eq!(MigrationName::from_target(" B ").as_str(), "B");
        assert_eq!(MigrationName::from_target("B").as_str(), "B");
    }

    #[test]
    fn test_ordering_is_lexical() {
        let mut names = vec![
            MigrationName::from("20240110-c"),
            MigrationName::from("20240101-a"),
            MigrationName::from("20240102-b"),
        ];
        names.sort();
        let sorted: Vec<&str> = names.iter().map(|n| n.as_str()).collect();
        assert_eq!(sorted, vec!["20240101-a", "20240102-b", "20240110-c"]);

        // Pure string order: "10" sorts before "9"
        assert!(MigrationName::from("10-x") < MigrationName::from("9-x"));
    }

    #[test]
    fn test_bootstrap_detection() {
        assert!(MigrationName::from(BOOTSTRAP_MIGRATION).is_bootstrap());
        assert!(!MigrationName::from("20240101-a").is_bootstrap());
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}
