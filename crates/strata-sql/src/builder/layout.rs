use crate::{
    naming,
    stmt::{ColumnDef, ForeignKey, Name, Statement},
};

use strata_core::{
    driver::Capability,
    schema::{Field, Model, Relation, RelationSide, Schema},
    Error, Result,
};

/// Derives the tables backing models and relations of one schema.
pub(super) struct Layout<'a> {
    pub(super) namespace: &'a str,
    pub(super) capability: &'a Capability,
    pub(super) schema: &'a Schema,
}

impl Layout<'_> {
    fn name(&self, table: &str) -> Name {
        Name::qualified(self.namespace, table)
    }

    /// The model table, the unique indexes of its columns and its list
    /// tables.
    pub(super) fn model_table(&self, model: &Model) -> Result<Vec<Statement>> {
        let table = model.table_name();
        let id = id_field(model)?;

        let columns = model
            .column_fields()
            .map(|field| ColumnDef::from_field(field, field.column_name(), self.capability))
            .collect::<Result<Vec<_>>>()?;

        let mut stmts = vec![Statement::create_table(
            self.name(table),
            columns,
            vec![id.column_name().to_string()],
            vec![],
        )];

        for field in model.column_fields() {
            if field.unique && !field.is_id() {
                stmts.push(self.unique_index(table, field.column_name()));
            }
        }

        for field in model.list_table_fields() {
            stmts.push(self.list_table(table, id, field, field.column_name())?);
        }

        Ok(stmts)
    }

    pub(super) fn unique_index(&self, table: &str, column: &str) -> Statement {
        Statement::create_index(
            naming::unique_index(table, column),
            self.name(table),
            vec![column.to_string()],
            true,
        )
    }

    /// The side table holding the values of list field `field`, stored under
    /// `column`. Rows are keyed by the owner's id and the value's position.
    pub(super) fn list_table(
        &self,
        table: &str,
        id: &Field,
        field: &Field,
        column: &str,
    ) -> Result<Statement> {
        let columns = vec![
            ColumnDef::new(
                naming::LIST_NODE_ID,
                ColumnDef::element_type(id, self.capability)?,
            )
            .not_null(),
            ColumnDef::new(
                naming::LIST_POSITION,
                self.capability.storage_types.int_type,
            )
            .not_null(),
            ColumnDef::new(
                naming::LIST_VALUE,
                ColumnDef::element_type(field, self.capability)?,
            )
            .not_null(),
        ];

        Ok(Statement::create_table(
            self.name(&naming::list_table(table, column)),
            columns,
            vec![
                naming::LIST_NODE_ID.to_string(),
                naming::LIST_POSITION.to_string(),
            ],
            vec![],
        ))
    }

    /// The relation table `_{relation}`: an id column plus one column per
    /// side referencing that side's model table.
    pub(super) fn relation_table(&self, relation: &Relation) -> Result<Vec<Statement>> {
        let table = naming::relation_table(&relation.name);

        let mut columns = vec![ColumnDef::new(
            naming::RELATION_ID,
            self.capability.storage_types.cuid_type,
        )
        .not_null()];
        let mut foreign_keys = vec![];

        for side in RelationSide::ALL {
            let model = self.schema.model(relation.model(side)).ok_or_else(|| {
                Error::invalid_schema(format!(
                    "relation `{}` references unknown model `{}`",
                    relation.name,
                    relation.model(side)
                ))
            })?;
            let id = id_field(model)?;
            let column = side.column_name();

            columns.push(
                ColumnDef::new(column, ColumnDef::element_type(id, self.capability)?).not_null(),
            );
            foreign_keys.push(ForeignKey {
                name: naming::relation_foreign_key(&table, side),
                columns: vec![column.to_string()],
                references: self.name(model.table_name()),
                referenced_columns: vec![id.column_name().to_string()],
                on_delete_cascade: true,
            });
        }

        let (inline, deferred) = if self.capability.schema_mutations.add_constraint {
            (vec![], foreign_keys)
        } else {
            (foreign_keys, vec![])
        };

        let mut stmts = vec![Statement::create_table(
            self.name(&table),
            columns,
            vec![naming::RELATION_ID.to_string()],
            inline,
        )];
        for foreign_key in deferred {
            stmts.push(Statement::add_constraint(self.name(&table), foreign_key));
        }

        stmts.push(Statement::create_index(
            naming::relation_pair_index(&table),
            self.name(&table),
            RelationSide::ALL
                .iter()
                .map(|side| side.column_name().to_string())
                .collect(),
            true,
        ));
        for side in RelationSide::ALL {
            stmts.push(Statement::create_index(
                naming::relation_side_index(&table, side),
                self.name(&table),
                vec![side.column_name().to_string()],
                false,
            ));
        }

        Ok(stmts)
    }
}

pub(super) fn id_field(model: &Model) -> Result<&Field> {
    model.id_field().ok_or_else(|| {
        Error::invalid_schema(format!("model `{}` has no id field", model.name))
    })
}
