use super::{field, layout::id_field, MutationBuilder};
use crate::{
    naming,
    stmt::{ColumnChange, ColumnDef, Statement},
};

use strata_core::{
    bail, err,
    migration::{CreateField, DeleteField, FieldCorrelation, UpdateField},
    schema::{Field, Model},
    Result,
};

impl MutationBuilder<'_> {
    /// Adds storage for a field of an existing model. Fields of new models
    /// were created along with their table.
    pub(super) fn create_field(&mut self, step: &CreateField) -> Result<Vec<Statement>> {
        let model = self.next_model(&step.model)?;
        let field = field(model, &step.name)?;
        let mut out = vec![];
        if model.is_embedded || self.cx.previous_model_for(model).is_none() {
            return Ok(out);
        }

        self.add_field_storage(&mut out, model, field, field.column_name())?;
        Ok(out)
    }

    pub(super) fn delete_field(&mut self, step: &DeleteField) -> Result<Vec<Statement>> {
        let model = self.previous_model(&step.model)?;
        let field = field(model, &step.name)?;
        let mut out = vec![];
        if model.is_embedded {
            return Ok(out);
        }

        self.drop_field_storage(&mut out, model.table_name(), field, field.column_name())?;
        Ok(out)
    }

    pub(super) fn update_field(&mut self, step: &UpdateField) -> Result<Vec<Statement>> {
        match &step.correlation {
            Some(correlation) => self.alter_field(step, correlation),
            None => self.finish_field_rename(step),
        }
    }

    /// Applies attribute changes and the first phase of a rename.
    fn alter_field(
        &mut self,
        step: &UpdateField,
        correlation: &FieldCorrelation,
    ) -> Result<Vec<Statement>> {
        let (_, previous) = self
            .cx
            .previous_field(&correlation.previous)
            .ok_or_else(|| err!("field `{}` is not in the previous schema", correlation.previous))?;
        let (model, next) = self
            .cx
            .next_field(&correlation.next)
            .ok_or_else(|| err!("field `{}` is not in the next schema", correlation.next))?;

        let table = model.table_name();
        let current = previous.column_name();

        // A rename to anything but the final name parks the field under a
        // transient name, completed by a second step without correlation.
        let transient = step.new_name.as_deref().filter(|name| *name != next.name);
        let target = match transient {
            Some(transient) if previous.column_name() != next.column_name() => transient,
            _ => next.column_name(),
        };
        if let Some(transient) = transient {
            self.pending_columns
                .insert((table.to_string(), transient.to_string()), target.to_string());
        }

        let mut out = vec![];
        if model.is_embedded || (next.is_relation() && previous.is_relation()) {
            return Ok(out);
        }

        let storage_changed = previous.kind() != next.kind()
            || previous.is_column() != next.is_column()
            || previous.is_list_table() != next.is_list_table()
            || (next.is_list_table() && previous.type_name() != next.type_name());
        if storage_changed {
            self.drop_field_storage(&mut out, table, previous, current)?;
            self.add_field_storage(&mut out, model, next, target)?;
            return Ok(out);
        }

        if next.is_list_table() {
            self.rename_list_table(&mut out, table, current, target)?;
            return Ok(out);
        }

        self.rename_column(&mut out, table, current, target)?;

        let current_def = self
            .shapes
            .column(table, target)
            .cloned()
            .ok_or_else(|| err!("column `{table}.{target}` does not exist"))?;
        let next_def = ColumnDef::from_field(next, target, self.capability)?;
        self.change_column(&mut out, table, &current_def, next_def)?;

        let unique_index = naming::unique_index(table, target);
        match (previous.unique && !previous.is_id(), next.unique && !next.is_id()) {
            (false, true) => {
                let stmt = self.layout(self.cx.next()).unique_index(table, target);
                self.emit(&mut out, stmt)?;
            }
            (true, false) if self.shapes.index(table, &unique_index).is_some() => {
                self.emit(&mut out, Statement::drop_index(unique_index, self.name(table)))?;
            }
            _ => {}
        }

        Ok(out)
    }

    /// Moves a field from its transient name to its final one.
    fn finish_field_rename(&mut self, step: &UpdateField) -> Result<Vec<Statement>> {
        let Some(new_name) = &step.new_name else {
            return Ok(vec![]);
        };
        let model = self.next_model(&step.model)?;
        let next = field(model, new_name)?;
        let table = model.table_name();

        let key = (table.to_string(), step.name.clone());
        let Some(current) = self.pending_columns.remove(&key) else {
            bail!(
                "field `{}.{}` does not hold a transient name",
                step.model,
                step.name
            );
        };

        let mut out = vec![];
        let target = next.column_name();
        if model.is_embedded || next.is_relation() {
            return Ok(out);
        }

        if next.is_list_table() {
            self.rename_list_table(&mut out, table, &current, target)?;
        } else {
            self.rename_column(&mut out, table, &current, target)?;
        }
        Ok(out)
    }

    /// Creates the column or list table of `field`, stored under `column`.
    /// Required columns are added nullable, filled with the default, then
    /// made `NOT NULL`.
    fn add_field_storage(
        &mut self,
        out: &mut Vec<Statement>,
        model: &Model,
        field: &Field,
        column: &str,
    ) -> Result<()> {
        let table = model.table_name();
        if field.is_relation() {
            return Ok(());
        }

        if field.is_list_table() {
            let stmt =
                self.layout(self.cx.next())
                    .list_table(table, id_field(model)?, field, column)?;
            return self.emit(out, stmt);
        }

        let def = ColumnDef::from_field(field, column, self.capability)?;
        let nullable = ColumnDef {
            not_null: false,
            ..def.clone()
        };
        self.emit(out, Statement::add_column(self.name(table), nullable.clone()))?;
        self.change_column(out, table, &nullable, def)?;

        if field.unique && !field.is_id() {
            let stmt = self.layout(self.cx.next()).unique_index(table, column);
            self.emit(out, stmt)?;
        }
        Ok(())
    }

    fn drop_field_storage(
        &mut self,
        out: &mut Vec<Statement>,
        table: &str,
        field: &Field,
        column: &str,
    ) -> Result<()> {
        if field.is_relation() {
            return Ok(());
        }

        if field.is_list_table() {
            let list_table = naming::list_table(table, column);
            if self.shapes.contains(&list_table) {
                self.emit(out, Statement::drop_table(self.name(&list_table)))?;
            }
            return Ok(());
        }

        self.drop_indexes_on(out, table, column)?;
        self.emit(out, Statement::drop_column(self.name(table), column))
    }

    fn rename_column(
        &mut self,
        out: &mut Vec<Statement>,
        table: &str,
        from: &str,
        to: &str,
    ) -> Result<()> {
        if from == to {
            return Ok(());
        }
        self.emit(out, Statement::rename_column(self.name(table), from, to))?;
        self.rename_index(
            out,
            table,
            &naming::unique_index(table, from),
            &naming::unique_index(table, to),
        )
    }

    fn rename_list_table(
        &mut self,
        out: &mut Vec<Statement>,
        table: &str,
        from: &str,
        to: &str,
    ) -> Result<()> {
        let list_table = naming::list_table(table, from);
        if from == to || !self.shapes.contains(&list_table) {
            return Ok(());
        }
        self.emit(
            out,
            Statement::rename_table(self.name(&list_table), naming::list_table(table, to)),
        )
    }

    /// Turns column `current` into `next`, one property per statement.
    /// Databases that cannot make a change in place rebuild the table once
    /// with the final definition.
    fn change_column(
        &mut self,
        out: &mut Vec<Statement>,
        table: &str,
        current: &ColumnDef,
        next: ColumnDef,
    ) -> Result<()> {
        let type_changed = current.ty != next.ty || current.array != next.array;
        let nullability_changed = current.not_null != next.not_null;
        if !type_changed && !nullability_changed {
            return Ok(());
        }

        let mutations = &self.capability.schema_mutations;
        if (type_changed && !mutations.alter_column_type)
            || (nullability_changed && !mutations.alter_column_nullability)
        {
            return self.rebuild_table(out, table, next);
        }

        if type_changed {
            let column = ColumnDef {
                ty: next.ty,
                array: next.array,
                ..current.clone()
            };
            self.emit(
                out,
                Statement::alter_column(self.name(table), column, ColumnChange::Type),
            )?;
        }

        if nullability_changed {
            let change = ColumnChange::nullability(next.not_null);
            self.emit(out, Statement::alter_column(self.name(table), next, change))?;
        }
        Ok(())
    }
}
