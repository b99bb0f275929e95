use super::MutationBuilder;
use crate::{
    naming,
    stmt::{ColumnDef, Statement},
};

use strata_core::{err, Result};

impl MutationBuilder<'_> {
    /// Recreates `table` with `column` replacing the column of the same name,
    /// for databases that cannot alter columns in place.
    ///
    /// Rows are copied into a new table which then takes the old table's
    /// place. Foreign key enforcement is off while the tables are swapped and
    /// the namespace is checked for dangling references afterwards.
    pub(super) fn rebuild_table(
        &mut self,
        out: &mut Vec<Statement>,
        table: &str,
        column: ColumnDef,
    ) -> Result<()> {
        let shape = self
            .shapes
            .table(table)
            .cloned()
            .ok_or_else(|| err!("table `{table}` does not exist"))?;

        let copied = shape
            .columns
            .iter()
            .map(|def| (def.name.clone(), def.name.clone()))
            .collect();
        let columns = shape
            .columns
            .iter()
            .map(|def| {
                if def.name == column.name {
                    column.clone()
                } else {
                    def.clone()
                }
            })
            .collect();
        let temporary = naming::rebuild_table(table);

        tracing::debug!(table, column = %column.name, "rebuilding table");

        self.emit(out, Statement::pragma_disable_foreign_keys())?;
        self.emit(
            out,
            Statement::create_table(
                self.name(&temporary),
                columns,
                shape.primary_key.clone(),
                shape.foreign_keys.clone(),
            ),
        )?;
        self.emit(
            out,
            Statement::copy_table(self.name(table), self.name(&temporary), copied),
        )?;
        self.emit(out, Statement::drop_table(self.name(table)))?;
        self.emit(out, Statement::rename_table(self.name(&temporary), table))?;

        for index in &shape.indexes {
            self.emit(
                out,
                Statement::create_index(
                    &index.name,
                    self.name(table),
                    index.columns.clone(),
                    index.unique,
                ),
            )?;
        }

        self.emit(
            out,
            Statement::pragma_foreign_key_check(self.namespace.clone()),
        )?;
        self.emit(out, Statement::pragma_enable_foreign_keys())
    }
}
