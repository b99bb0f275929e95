use super::{Formatter, Ident, ToSql};

use crate::stmt;

impl ToSql for &stmt::ColumnDef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let name = Ident(&self.name);
        let ty = ColumnType(self);
        let not_null = if self.not_null { " NOT NULL" } else { "" };
        let default = self.default.as_ref().map(|value| (" DEFAULT ", value));

        fmt!(f, name " " ty not_null default)
    }
}

/// The column's type, including the array suffix.
pub(super) struct ColumnType<'a>(pub(super) &'a stmt::ColumnDef);

impl ToSql for ColumnType<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let array = self.0.array.then_some("[]");
        fmt!(f, self.0.ty array)
    }
}
