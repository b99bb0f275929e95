use strata_core::{schema::DiffContext, MigrationStep};
use strata_sql::Statement;

/// A planned migration: the inferred steps, their DDL, and the serialized
/// SQL, along with the schemas they were computed from.
#[derive(Debug)]
pub struct Plan<'s> {
    pub(super) cx: DiffContext<'s>,
    pub(super) steps: Vec<MigrationStep>,
    pub(super) statements: Vec<Statement>,
    pub(super) sql: Vec<String>,
}

impl<'s> Plan<'s> {
    pub fn context(&self) -> &DiffContext<'s> {
        &self.cx
    }

    pub fn steps(&self) -> &[MigrationStep] {
        &self.steps
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// One serialized statement per entry, each terminated by `;`.
    pub fn sql(&self) -> &[String] {
        &self.sql
    }

    /// True when the schemas are equivalent.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
