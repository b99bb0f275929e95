#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod flavor;
use flavor::Flavor;

mod ident;
use ident::Ident;

// Fragment serializers
mod column_def;
mod name;
mod statement;
mod ty;
mod value;

use crate::stmt::{AlterTable, AlterTableAction, Statement};

use strata_core::{Error, Result};

/// Serialize a statement to a SQL string
#[derive(Debug, Clone, Copy)]
pub struct Serializer {
    /// The database flavor handles the differences between SQL dialects and
    /// supported features.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    /// Serializes one statement, terminated by `;`.
    ///
    /// Fails when the statement has no equivalent in this SQL flavor.
    pub fn serialize(&self, stmt: &Statement) -> Result<String> {
        self.verify(stmt)?;

        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        ret.push(';');
        Ok(ret)
    }

    /// Serializes every statement, in order.
    pub fn serialize_all(&self, stmts: &[Statement]) -> Result<Vec<String>> {
        stmts.iter().map(|stmt| self.serialize(stmt)).collect()
    }

    fn verify(&self, stmt: &Statement) -> Result<()> {
        let unsupported = match (stmt, self.flavor) {
            (
                Statement::AlterTable(AlterTable {
                    action: AlterTableAction::AlterColumn(_),
                    ..
                }),
                Flavor::Sqlite,
            ) => Some("altering a column in place"),
            (
                Statement::AlterTable(AlterTable {
                    action: AlterTableAction::AddConstraint(_),
                    ..
                }),
                Flavor::Sqlite,
            ) => Some("adding a foreign key to an existing table"),
            (Statement::RenameIndex(_), Flavor::Sqlite) => Some("renaming an index"),
            (Statement::Pragma(_), Flavor::Postgresql | Flavor::Mysql) => Some("PRAGMA"),
            _ => None,
        };

        match unsupported {
            Some(what) => Err(Error::unsupported_feature(format!(
                "{what} is not supported by {}",
                self.flavor
            ))),
            None => Ok(()),
        }
    }

    fn is_sqlite(&self) -> bool {
        matches!(self.flavor, Flavor::Sqlite)
    }

    fn is_mysql(&self) -> bool {
        matches!(self.flavor, Flavor::Mysql)
    }
}
