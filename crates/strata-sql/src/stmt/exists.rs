use super::{Name, Statement, Value};

/// `SELECT EXISTS(SELECT 1 FROM ...)`, answering a yes/no question about
/// the rows of one table.
#[derive(Debug, Clone, PartialEq)]
pub struct Exists {
    pub from: Name,
    pub filter: Option<ExistsFilter>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExistsFilter {
    /// A row holds `NULL` in the column.
    IsNull(String),

    /// Two rows hold the same non-null values in the columns.
    Duplicates(Vec<String>),

    /// A row holds the value in the column.
    Equals(String, Value),
}

impl Statement {
    pub fn exists(from: Name, filter: Option<ExistsFilter>) -> Self {
        Exists { from, filter }.into()
    }
}

impl From<Exists> for Statement {
    fn from(value: Exists) -> Self {
        Self::Exists(value)
    }
}
