mod alter_column;
pub use alter_column::{AlterColumn, ColumnChange};

mod alter_table;
pub use alter_table::{AlterTable, AlterTableAction};

mod column_def;
pub use column_def::{ColumnDef, Value};

mod copy_table;
pub use copy_table::CopyTable;

mod create_index;
pub use create_index::CreateIndex;

mod create_table;
pub use create_table::CreateTable;

mod drop_index;
pub use drop_index::DropIndex;

mod drop_table;
pub use drop_table::DropTable;

mod exists;
pub use exists::{Exists, ExistsFilter};

mod foreign_key;
pub use foreign_key::ForeignKey;

mod name;
pub use name::Name;

mod pragma;
pub use pragma::Pragma;

mod rename_index;
pub use rename_index::RenameIndex;

/// A primitive schema action, or a read-only probe.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    AlterTable(AlterTable),
    CopyTable(CopyTable),
    CreateIndex(CreateIndex),
    CreateTable(CreateTable),
    DropIndex(DropIndex),
    DropTable(DropTable),
    Exists(Exists),
    Pragma(Pragma),
    RenameIndex(RenameIndex),
}

impl Statement {
    /// True for statements that change the schema.
    pub fn is_ddl(&self) -> bool {
        !matches!(self, Statement::Exists(_) | Statement::Pragma(_))
    }

    /// Every identifier the statement introduces or refers to, excluding the
    /// namespace qualifier.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut idents: Vec<&str> = vec![];
        match self {
            Statement::AlterTable(stmt) => {
                idents.push(stmt.name.table());
                match &stmt.action {
                    AlterTableAction::RenameTo(name) => idents.push(name.as_str()),
                    AlterTableAction::AddColumn(column) => idents.push(column.name.as_str()),
                    AlterTableAction::DropColumn(name) => idents.push(name.as_str()),
                    AlterTableAction::RenameColumn { from, to } => {
                        idents.extend([from.as_str(), to.as_str()]);
                    }
                    AlterTableAction::AlterColumn(alter) => idents.push(alter.column.name.as_str()),
                    AlterTableAction::AddConstraint(fk) => fk.identifiers(&mut idents),
                }
            }
            Statement::CopyTable(stmt) => {
                idents.extend([stmt.source.table(), stmt.target.table()]);
                for (target, source) in &stmt.columns {
                    idents.extend([target.as_str(), source.as_str()]);
                }
            }
            Statement::CreateIndex(stmt) => {
                idents.extend([stmt.name.as_str(), stmt.on.table()]);
                idents.extend(stmt.columns.iter().map(String::as_str));
            }
            Statement::CreateTable(stmt) => {
                idents.push(stmt.name.table());
                idents.extend(stmt.columns.iter().map(|column| column.name.as_str()));
                for fk in &stmt.foreign_keys {
                    fk.identifiers(&mut idents);
                }
            }
            Statement::DropIndex(stmt) => idents.extend([stmt.name.as_str(), stmt.on.table()]),
            Statement::DropTable(stmt) => idents.push(stmt.name.table()),
            Statement::Exists(stmt) => idents.push(stmt.from.table()),
            Statement::Pragma(_) => {}
            Statement::RenameIndex(stmt) => {
                idents.extend([stmt.on.table(), stmt.from.as_str(), stmt.to.as_str()]);
            }
        }
        idents
    }
}
