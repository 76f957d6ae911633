use serde::Serialize;

use super::name::{Direction, MigrationName};
use super::script::ScriptFile;

/// A single step the runner executes: run `sql`, then update the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operation {
    pub name: MigrationName,
    pub direction: Direction,
    #[serde(skip)]
    pub sql: String,
}

impl From<&ScriptFile> for Operation {
    fn from(script: &ScriptFile) -> Self {
        Self {
            name: script.name().clone(),
            direction: script.direction(),
            sql: script.sql().to_string(),
        }
    }
}

/// Ordered list of operations produced by the Reconciler
///
/// An empty plan is the "nothing to do" outcome, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub direction: Direction,
    pub operations: Vec<Operation>,
}

impl Plan {
    pub fn new(direction: Direction, operations: Vec<Operation>) -> Self {
        Self {
            direction,
            operations,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Names in execution order
    pub fn names(&self) -> Vec<&str> {
        self.operations.iter().map(|op| op.name.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }
}
