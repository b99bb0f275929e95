use super::{field, MutationBuilder};
use crate::stmt::Statement;

use strata_core::{
    err,
    migration::{AlterIndex, CreateIndex, DeleteIndex},
    Result,
};

impl MutationBuilder<'_> {
    pub(super) fn create_index(&mut self, step: &CreateIndex) -> Result<Vec<Statement>> {
        let model = self.next_model(&step.model)?;
        let index = model
            .index_by_name(&step.name)
            .ok_or_else(|| err!("index `{}.{}` does not exist", step.model, step.name))?;

        let columns = index
            .fields
            .iter()
            .map(|name| Ok(field(model, name)?.column_name().to_string()))
            .collect::<Result<Vec<_>>>()?;

        let stmt = Statement::create_index(
            &index.name,
            self.name(model.table_name()),
            columns,
            index.unique,
        );
        self.emit_all(vec![stmt])
    }

    pub(super) fn delete_index(&mut self, step: &DeleteIndex) -> Result<Vec<Statement>> {
        let model = self.previous_model(&step.model)?;
        let stmt = Statement::drop_index(&step.name, self.name(model.table_name()));
        self.emit_all(vec![stmt])
    }

    pub(super) fn alter_index(&mut self, step: &AlterIndex) -> Result<Vec<Statement>> {
        let model = self.next_model(&step.model)?;
        let mut out = vec![];
        self.rename_index(&mut out, model.table_name(), &step.name, &step.new_name)?;
        Ok(out)
    }

    /// Renames index `from` of `table` when the table has it. Databases
    /// without in-place index renames drop and recreate the index.
    pub(super) fn rename_index(
        &mut self,
        out: &mut Vec<Statement>,
        table: &str,
        from: &str,
        to: &str,
    ) -> Result<()> {
        if from == to {
            return Ok(());
        }
        let Some(index) = self.shapes.index(table, from).cloned() else {
            return Ok(());
        };

        if self.capability.schema_mutations.rename_index {
            return self.emit(out, Statement::rename_index(self.name(table), from, to));
        }

        self.emit(out, Statement::drop_index(from, self.name(table)))?;
        self.emit(
            out,
            Statement::create_index(to, self.name(table), index.columns, index.unique),
        )
    }

    /// Drops every index of `table` covering `column`.
    pub(super) fn drop_indexes_on(
        &mut self,
        out: &mut Vec<Statement>,
        table: &str,
        column: &str,
    ) -> Result<()> {
        let names: Vec<String> = self
            .shapes
            .table(table)
            .map(|shape| {
                shape
                    .indexes
                    .iter()
                    .filter(|index| index.columns.iter().any(|name| name == column))
                    .map(|index| index.name.clone())
                    .collect()
            })
            .unwrap_or_default();

        for name in names {
            self.emit(out, Statement::drop_index(name, self.name(table)))?;
        }
        Ok(())
    }
}
