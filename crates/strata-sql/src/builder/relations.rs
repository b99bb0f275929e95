use super::MutationBuilder;
use crate::{naming, stmt::Statement};

use strata_core::{
    err,
    migration::{CreateRelation, DeleteRelation, UpdateRelation},
    schema::RelationSide,
    Result,
};

impl MutationBuilder<'_> {
    pub(super) fn create_relation(&mut self, step: &CreateRelation) -> Result<Vec<Statement>> {
        let relation = self
            .cx
            .next()
            .relation(&step.name)
            .ok_or_else(|| err!("relation `{}` is not in the next schema", step.name))?;

        let stmts = self.create_relation_table(relation)?;
        self.emit_all(stmts)
    }

    pub(super) fn delete_relation(&mut self, step: &DeleteRelation) -> Result<Vec<Statement>> {
        let table = naming::relation_table(&step.name);
        let mut out = vec![];
        if self.shapes.contains(&table) {
            self.emit(&mut out, Statement::drop_table(self.name(&table)))?;
        }
        Ok(out)
    }

    /// Renames the relation table and its indexes. Delete rules are enforced
    /// by the application and need no statement; the table's foreign keys
    /// always cascade.
    pub(super) fn update_relation(&mut self, step: &UpdateRelation) -> Result<Vec<Statement>> {
        let mut out = vec![];
        let Some(new_name) = &step.new_name else {
            return Ok(out);
        };

        let from = naming::relation_table(&step.name);
        let to = naming::relation_table(new_name);
        if from == to || !self.shapes.contains(&from) {
            return Ok(out);
        }

        self.emit(&mut out, Statement::rename_table(self.name(&from), &to))?;
        self.rename_index(
            &mut out,
            &to,
            &naming::relation_pair_index(&from),
            &naming::relation_pair_index(&to),
        )?;
        for side in RelationSide::ALL {
            self.rename_index(
                &mut out,
                &to,
                &naming::relation_side_index(&from, side),
                &naming::relation_side_index(&to, side),
            )?;
        }

        Ok(out)
    }
}
