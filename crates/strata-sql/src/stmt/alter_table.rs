use super::{AlterColumn, ColumnChange, ColumnDef, ForeignKey, Name, Statement};

/// A statement to alter a SQL table.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterTable {
    /// Current name of the table.
    pub name: Name,

    /// The alteration to apply.
    pub action: AlterTableAction,
}

/// The action to perform in an ALTER TABLE statement.
#[derive(Debug, Clone, PartialEq)]
pub enum AlterTableAction {
    /// Rename the table, keeping its namespace.
    RenameTo(String),

    AddColumn(ColumnDef),

    DropColumn(String),

    RenameColumn { from: String, to: String },

    AlterColumn(AlterColumn),

    /// Add a foreign key to an existing table.
    AddConstraint(ForeignKey),
}

impl Statement {
    /// Renames a table.
    pub fn rename_table(name: Name, new_name: impl Into<String>) -> Self {
        AlterTable {
            name,
            action: AlterTableAction::RenameTo(new_name.into()),
        }
        .into()
    }

    pub fn add_column(name: Name, column: ColumnDef) -> Self {
        AlterTable {
            name,
            action: AlterTableAction::AddColumn(column),
        }
        .into()
    }

    pub fn drop_column(name: Name, column: impl Into<String>) -> Self {
        AlterTable {
            name,
            action: AlterTableAction::DropColumn(column.into()),
        }
        .into()
    }

    pub fn rename_column(name: Name, from: impl Into<String>, to: impl Into<String>) -> Self {
        AlterTable {
            name,
            action: AlterTableAction::RenameColumn {
                from: from.into(),
                to: to.into(),
            },
        }
        .into()
    }

    /// Changes one property of a column. `column` is the definition the
    /// column has once the change is applied.
    pub fn alter_column(name: Name, column: ColumnDef, change: ColumnChange) -> Self {
        AlterTable {
            name,
            action: AlterTableAction::AlterColumn(AlterColumn { column, change }),
        }
        .into()
    }

    pub fn add_constraint(name: Name, foreign_key: ForeignKey) -> Self {
        AlterTable {
            name,
            action: AlterTableAction::AddConstraint(foreign_key),
        }
        .into()
    }
}

impl From<AlterTable> for Statement {
    fn from(value: AlterTable) -> Self {
        Self::AlterTable(value)
    }
}
