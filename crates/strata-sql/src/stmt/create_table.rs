use super::{ColumnDef, ForeignKey, Name, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTable {
    /// Name of the table
    pub name: Name,

    /// Column definitions
    pub columns: Vec<ColumnDef>,

    /// Primary key columns
    pub primary_key: Vec<String>,

    /// Foreign keys declared inline
    pub foreign_keys: Vec<ForeignKey>,
}

impl Statement {
    pub fn create_table(
        name: Name,
        columns: Vec<ColumnDef>,
        primary_key: Vec<String>,
        foreign_keys: Vec<ForeignKey>,
    ) -> Self {
        CreateTable {
            name,
            columns,
            primary_key,
            foreign_keys,
        }
        .into()
    }
}

impl From<CreateTable> for Statement {
    fn from(value: CreateTable) -> Self {
        Self::CreateTable(value)
    }
}
