use crate::stmt::{AlterTableAction, ColumnDef, ForeignKey, Statement};

use indexmap::IndexMap;

/// The live layout of every table, kept current as statements are emitted.
#[derive(Debug, Default)]
pub(super) struct Shapes {
    tables: IndexMap<String, TableShape>,
}

#[derive(Debug, Clone)]
pub(super) struct TableShape {
    pub(super) columns: Vec<ColumnDef>,
    pub(super) primary_key: Vec<String>,
    pub(super) foreign_keys: Vec<ForeignKey>,
    pub(super) indexes: Vec<IndexShape>,
}

#[derive(Debug, Clone)]
pub(super) struct IndexShape {
    pub(super) name: String,
    pub(super) columns: Vec<String>,
    pub(super) unique: bool,
}

impl Shapes {
    pub(super) fn contains(&self, table: &str) -> bool {
        self.tables.contains_key(table)
    }

    pub(super) fn table(&self, table: &str) -> Option<&TableShape> {
        self.tables.get(table)
    }

    pub(super) fn column(&self, table: &str, column: &str) -> Option<&ColumnDef> {
        self.table(table)?
            .columns
            .iter()
            .find(|def| def.name == column)
    }

    pub(super) fn index(&self, table: &str, index: &str) -> Option<&IndexShape> {
        self.table(table)?
            .indexes
            .iter()
            .find(|shape| shape.name == index)
    }

    /// Updates the layout with the effect of `stmt`.
    pub(super) fn apply(&mut self, stmt: &Statement) {
        match stmt {
            Statement::CreateTable(stmt) => {
                self.tables.insert(
                    stmt.name.table().to_string(),
                    TableShape {
                        columns: stmt.columns.clone(),
                        primary_key: stmt.primary_key.clone(),
                        foreign_keys: stmt.foreign_keys.clone(),
                        indexes: vec![],
                    },
                );
            }
            Statement::DropTable(stmt) => {
                self.tables.shift_remove(stmt.name.table());
            }
            Statement::AlterTable(stmt) => {
                let table = stmt.name.table();
                if let AlterTableAction::RenameTo(new_name) = &stmt.action {
                    self.rename_table(table, new_name);
                    return;
                }

                let Some(shape) = self.tables.get_mut(table) else {
                    return;
                };
                match &stmt.action {
                    AlterTableAction::RenameTo(_) => {}
                    AlterTableAction::AddColumn(column) => shape.columns.push(column.clone()),
                    AlterTableAction::DropColumn(column) => {
                        shape.columns.retain(|def| def.name != *column);
                        shape
                            .indexes
                            .retain(|index| !index.columns.contains(column));
                    }
                    AlterTableAction::RenameColumn { from, to } => {
                        shape.rename_column(from, to);
                    }
                    AlterTableAction::AlterColumn(alter) => {
                        for def in &mut shape.columns {
                            if def.name == alter.column.name {
                                *def = alter.column.clone();
                            }
                        }
                    }
                    AlterTableAction::AddConstraint(foreign_key) => {
                        shape.foreign_keys.push(foreign_key.clone());
                    }
                }
            }
            Statement::CreateIndex(stmt) => {
                if let Some(shape) = self.tables.get_mut(stmt.on.table()) {
                    shape.indexes.push(IndexShape {
                        name: stmt.name.clone(),
                        columns: stmt.columns.clone(),
                        unique: stmt.unique,
                    });
                }
            }
            Statement::DropIndex(stmt) => {
                if let Some(shape) = self.tables.get_mut(stmt.on.table()) {
                    shape.indexes.retain(|index| index.name != stmt.name);
                }
            }
            Statement::RenameIndex(stmt) => {
                if let Some(shape) = self.tables.get_mut(stmt.on.table()) {
                    for index in &mut shape.indexes {
                        if index.name == stmt.from {
                            index.name = stmt.to.clone();
                        }
                    }
                }
            }
            Statement::CopyTable(_) | Statement::Exists(_) | Statement::Pragma(_) => {}
        }
    }

    fn rename_table(&mut self, from: &str, to: &str) {
        if let Some(shape) = self.tables.shift_remove(from) {
            self.tables.insert(to.to_string(), shape);
        }

        for shape in self.tables.values_mut() {
            for foreign_key in &mut shape.foreign_keys {
                if foreign_key.references.table() == from {
                    foreign_key.references = foreign_key.references.with_table(to);
                }
            }
        }
    }
}

impl TableShape {
    fn rename_column(&mut self, from: &str, to: &str) {
        let rename = |name: &mut String| {
            if name == from {
                *name = to.to_string();
            }
        };

        self.columns.iter_mut().for_each(|def| rename(&mut def.name));
        self.primary_key.iter_mut().for_each(rename);
        for index in &mut self.indexes {
            index.columns.iter_mut().for_each(rename);
        }
        for foreign_key in &mut self.foreign_keys {
            foreign_key.columns.iter_mut().for_each(rename);
        }
    }
}
