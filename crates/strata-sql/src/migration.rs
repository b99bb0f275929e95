/// Marker placed between statements so a driver can split a migration back
/// into statements.
pub const BREAKPOINT: &str = "\n-- #[strata::breakpoint]\n";

/// A serialized migration, handed to a schema executor as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Migration {
    Sql(String),
}

impl Migration {
    /// Create a new SQL migration from a single SQL string.
    pub fn new_sql(sql: String) -> Self {
        Migration::Sql(sql)
    }

    /// Create a new SQL migration from multiple SQL statements.
    /// Statements are joined with breakpoint markers.
    pub fn new_sql_with_breakpoints<S: AsRef<str>>(statements: &[S]) -> Self {
        Self::new_sql_with_marker(statements, BREAKPOINT)
    }

    /// Like [`Migration::new_sql_with_breakpoints`], with a custom marker.
    pub fn new_sql_with_marker<S: AsRef<str>>(statements: &[S], marker: &str) -> Self {
        let sql = statements
            .iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(marker);
        Migration::Sql(sql)
    }

    /// Get individual SQL statements by splitting on breakpoint markers.
    pub fn statements(&self) -> Vec<&str> {
        self.statements_split_by(BREAKPOINT)
    }

    pub fn statements_split_by(&self, marker: &str) -> Vec<&str> {
        match self {
            Migration::Sql(sql) if sql.is_empty() => vec![],
            Migration::Sql(sql) => sql.split(marker).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Migration::Sql(sql) => sql.is_empty(),
        }
    }
}
