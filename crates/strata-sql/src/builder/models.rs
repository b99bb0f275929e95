use super::{MutationBuilder, PendingModel};
use crate::{naming, stmt::Statement};

use strata_core::{
    err,
    migration::{CreateModel, DeleteModel, UpdateModel},
    schema::Model,
    Result,
};

impl<'a> MutationBuilder<'a> {
    pub(super) fn create_model(&mut self, step: &CreateModel) -> Result<Vec<Statement>> {
        let model = self.next_model(&step.name)?;
        if model.is_embedded {
            return Ok(vec![]);
        }

        let stmts = self.create_model_table(model)?;
        self.emit_all(stmts)
    }

    pub(super) fn delete_model(&mut self, step: &DeleteModel) -> Result<Vec<Statement>> {
        let model = self.previous_model(&step.name)?;
        let mut out = vec![];
        if model.is_embedded {
            return Ok(out);
        }

        let table = model.table_name();
        for field in model.list_table_fields() {
            let list_table = naming::list_table(table, field.column_name());
            if self.shapes.contains(&list_table) {
                self.emit(&mut out, Statement::drop_table(self.name(&list_table)))?;
            }
        }
        self.emit(&mut out, Statement::drop_table(self.name(table)))?;

        Ok(out)
    }

    /// Moves a model's tables to a new name.
    ///
    /// The first phase of a rename finds the model under its previous name
    /// and moves it to the transient name; the second phase moves it from
    /// the transient name to the name of the next schema. When both schemas
    /// pin the model to the same table, neither phase touches the database.
    pub(super) fn update_model(&mut self, step: &UpdateModel) -> Result<Vec<Statement>> {
        if let Some(pending) = self.pending_models.remove(&step.name) {
            let next = self.next_model(&step.new_name)?;
            return self.rename_model_tables(pending.previous, &pending.table, next.table_name());
        }

        let previous = self.previous_model(&step.name)?;
        let next = self
            .cx
            .next_model_for(previous)
            .ok_or_else(|| err!("model `{}` has no counterpart in the next schema", step.name))?;

        if step.new_name == next.name {
            return self.rename_model_tables(previous, previous.table_name(), next.table_name());
        }

        let table = if previous.table_name() == next.table_name() {
            previous.table_name()
        } else {
            step.new_name.as_str()
        };
        let out = self.rename_model_tables(previous, previous.table_name(), table)?;
        self.pending_models.insert(
            step.new_name.clone(),
            PendingModel {
                table: table.to_string(),
                previous,
            },
        );

        Ok(out)
    }

    /// Renames table `from` to `to` along with the list tables and unique
    /// indexes named after it.
    fn rename_model_tables(
        &mut self,
        previous: &'a Model,
        from: &str,
        to: &str,
    ) -> Result<Vec<Statement>> {
        let mut out = vec![];
        if previous.is_embedded || from == to {
            return Ok(out);
        }

        self.emit(&mut out, Statement::rename_table(self.name(from), to))?;

        for field in previous.list_table_fields() {
            let column = field.column_name();
            let list_table = naming::list_table(from, column);
            if self.shapes.contains(&list_table) {
                self.emit(
                    &mut out,
                    Statement::rename_table(
                        self.name(&list_table),
                        naming::list_table(to, column),
                    ),
                )?;
            }
        }

        let columns: Vec<String> = self
            .shapes
            .table(to)
            .map(|shape| shape.columns.iter().map(|def| def.name.clone()).collect())
            .unwrap_or_default();
        for column in columns {
            self.rename_index(
                &mut out,
                to,
                &naming::unique_index(from, &column),
                &naming::unique_index(to, &column),
            )?;
        }

        Ok(out)
    }
}
