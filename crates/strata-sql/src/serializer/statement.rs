use super::{column_def::ColumnType, Comma, Delimited, Flavor, Formatter, Ident, ToSql};

use crate::stmt::{self, AlterTableAction, ColumnChange, ExistsFilter};

impl ToSql for &stmt::Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Statement::AlterTable(stmt) => stmt.to_sql(f),
            stmt::Statement::CopyTable(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateIndex(stmt) => stmt.to_sql(f),
            stmt::Statement::CreateTable(stmt) => stmt.to_sql(f),
            stmt::Statement::DropIndex(stmt) => stmt.to_sql(f),
            stmt::Statement::DropTable(stmt) => stmt.to_sql(f),
            stmt::Statement::Exists(stmt) => stmt.to_sql(f),
            stmt::Statement::Pragma(stmt) => stmt.to_sql(f),
            stmt::Statement::RenameIndex(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::AlterTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match &self.action {
            AlterTableAction::RenameTo(new_name) => {
                if f.serializer.is_mysql() {
                    // An unqualified target would move the table to the
                    // connection's default database.
                    let qualified = self.name.with_table(new_name);
                    let new_name = &qualified;
                    fmt!(f, "ALTER TABLE " self.name " RENAME TO " new_name);
                } else {
                    fmt!(f, "ALTER TABLE " self.name " RENAME TO " Ident(new_name));
                }
            }
            AlterTableAction::AddColumn(column) => {
                fmt!(f, "ALTER TABLE " self.name " ADD COLUMN " column);
            }
            AlterTableAction::DropColumn(column) => {
                fmt!(f, "ALTER TABLE " self.name " DROP COLUMN " Ident(column));
            }
            AlterTableAction::RenameColumn { from, to } => {
                fmt!(f, "ALTER TABLE " self.name " RENAME COLUMN " Ident(from) " TO " Ident(to));
            }
            AlterTableAction::AlterColumn(alter) => {
                let column = &alter.column;
                let column_name = Ident(&column.name);

                match f.serializer.flavor {
                    Flavor::Mysql => {
                        fmt!(f, "ALTER TABLE " self.name " MODIFY COLUMN " column);
                    }
                    Flavor::Postgresql | Flavor::Sqlite => match alter.change {
                        ColumnChange::Type => {
                            let ty = ColumnType(column);
                            let cast = ColumnType(column);
                            let using = Ident(&column.name);
                            fmt!(f, "ALTER TABLE " self.name " ALTER COLUMN " column_name " TYPE " ty " USING " using "::" cast);
                        }
                        ColumnChange::SetNotNull => {
                            fmt!(f, "ALTER TABLE " self.name " ALTER COLUMN " column_name " SET NOT NULL");
                        }
                        ColumnChange::DropNotNull => {
                            fmt!(f, "ALTER TABLE " self.name " ALTER COLUMN " column_name " DROP NOT NULL");
                        }
                    },
                }
            }
            AlterTableAction::AddConstraint(foreign_key) => {
                fmt!(f, "ALTER TABLE " self.name " ADD " foreign_key);
            }
        }
    }
}

impl ToSql for &stmt::ForeignKey {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);
        let columns = Comma(self.columns.iter().map(Ident));
        let referenced_columns = Comma(self.referenced_columns.iter().map(Ident));
        let on_delete = if self.on_delete_cascade {
            " ON DELETE CASCADE"
        } else {
            ""
        };

        fmt!(f, "CONSTRAINT " name " FOREIGN KEY (" columns ") REFERENCES ");
        // SQLite only resolves references within the referencing table's
        // database, and rejects a qualified name.
        if f.serializer.is_sqlite() {
            fmt!(f, Ident(self.references.table()));
        } else {
            fmt!(f, self.references);
        }
        fmt!(f, " (" referenced_columns ")" on_delete);
    }
}

impl ToSql for &stmt::CopyTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let target_cols = Comma(self.columns.iter().map(|(target, _)| Ident(target)));
        let source_cols = Comma(self.columns.iter().map(|(_, source)| Ident(source)));
        fmt!(f, "INSERT INTO " self.target " (" target_cols ") SELECT " source_cols " FROM " self.source);
    }
}

impl ToSql for &stmt::CreateIndex {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let unique = if self.unique { "UNIQUE " } else { "" };
        let columns = Comma(self.columns.iter().map(Ident));

        if f.serializer.is_sqlite() {
            // SQLite qualifies the index, never the table.
            let index_name = self.on.with_table(&self.name);
            let index_name = &index_name;
            let table_name = Ident(self.on.table());
            fmt!(f, "CREATE " unique "INDEX " index_name " ON " table_name " (" columns ")");
        } else {
            let index_name = Ident(&self.name);
            fmt!(f, "CREATE " unique "INDEX " index_name " ON " self.on " (" columns ")");
        }
    }
}

impl ToSql for &stmt::CreateTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let columns = Comma(&self.columns);
        let primary_key = (!self.primary_key.is_empty()).then(|| {
            (
                ", PRIMARY KEY (",
                Comma(self.primary_key.iter().map(Ident)),
                ")",
            )
        });

        fmt!(f, "CREATE TABLE " self.name " (" columns primary_key);
        for foreign_key in &self.foreign_keys {
            fmt!(f, ", " foreign_key);
        }
        fmt!(f, ")");
    }
}

impl ToSql for &stmt::DropIndex {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if f.serializer.is_mysql() {
            let index_name = Ident(&self.name);
            fmt!(f, "DROP INDEX " index_name " ON " self.on);
        } else {
            let index_name = self.on.with_table(&self.name);
            let index_name = &index_name;
            fmt!(f, "DROP INDEX " index_name);
        }
    }
}

impl ToSql for &stmt::DropTable {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let if_exists = if self.if_exists { "IF EXISTS " } else { "" };
        fmt!(f, "DROP TABLE " if_exists self.name);
    }
}

impl ToSql for &stmt::Exists {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, "SELECT EXISTS(SELECT 1 FROM " self.from);

        match &self.filter {
            None => {}
            Some(ExistsFilter::IsNull(column)) => {
                fmt!(f, " WHERE " Ident(column) " IS NULL");
            }
            Some(ExistsFilter::Equals(column, value)) => {
                fmt!(f, " WHERE " Ident(column) " = " value);
            }
            Some(ExistsFilter::Duplicates(columns)) => {
                let not_null = Delimited(
                    columns.iter().map(|column| (Ident(column), " IS NOT NULL")),
                    " AND ",
                );
                let group_by = Comma(columns.iter().map(Ident));
                fmt!(f, " WHERE " not_null " GROUP BY " group_by " HAVING COUNT(*) > 1");
            }
        }

        fmt!(f, ")");
    }
}

impl ToSql for &stmt::Pragma {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let namespace = self
            .namespace
            .as_ref()
            .map(|namespace| (Ident(namespace), "."));

        match &self.value {
            Some(value) => fmt!(f, "PRAGMA " namespace self.name.as_str() " = " value.as_str()),
            None => fmt!(f, "PRAGMA " namespace self.name.as_str()),
        }
    }
}

impl ToSql for &stmt::RenameIndex {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let to = Ident(&self.to);

        if f.serializer.is_mysql() {
            let from = Ident(&self.from);
            fmt!(f, "ALTER TABLE " self.on " RENAME INDEX " from " TO " to);
        } else {
            let from = self.on.with_table(&self.from);
            let from = &from;
            fmt!(f, "ALTER INDEX " from " RENAME TO " to);
        }
    }
}
