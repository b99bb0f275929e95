//! Lowers migration steps into SQL statements.

mod fields;
mod indexes;
mod layout;
use layout::Layout;
mod models;
mod rebuild;
mod relations;
mod shape;
use shape::Shapes;

use crate::stmt::{Name, Statement};

use std::collections::HashMap;
use strata_core::{
    driver::Capability,
    err,
    migration::MigrationStep,
    schema::{DiffContext, Field, Model, Relation, Schema},
    Error, Result,
};

/// Turns migration steps into the statements performing them against one
/// project namespace.
///
/// The builder tracks the layout of every table as statements are emitted,
/// so a step is lowered against the tables as the previous steps left them.
/// Steps must be passed in the order the inferrer produced them.
#[derive(Debug)]
pub struct MutationBuilder<'a> {
    namespace: String,
    capability: &'a Capability,
    cx: DiffContext<'a>,
    shapes: Shapes,

    /// Columns moved to a transient name by the first phase of a field
    /// rename, keyed by table and transient field name.
    pending_columns: HashMap<(String, String), String>,

    /// Models moved to a transient name by the first phase of a model rename,
    /// keyed by transient model name.
    pending_models: HashMap<String, PendingModel<'a>>,
}

#[derive(Debug)]
struct PendingModel<'a> {
    /// Table name the model currently has.
    table: String,
    previous: &'a Model,
}

impl<'a> MutationBuilder<'a> {
    /// Creates a builder for the namespace currently holding `cx.previous()`.
    pub fn new(
        namespace: impl Into<String>,
        capability: &'a Capability,
        cx: &DiffContext<'a>,
    ) -> Result<MutationBuilder<'a>> {
        let mut builder = MutationBuilder {
            namespace: namespace.into(),
            capability,
            cx: *cx,
            shapes: Shapes::default(),
            pending_columns: HashMap::new(),
            pending_models: HashMap::new(),
        };
        builder.verify_identifier(&builder.namespace)?;

        let layout = builder.layout(builder.cx.previous());
        let mut stmts = vec![];
        for model in builder.cx.previous().models.iter() {
            if !model.is_embedded {
                stmts.extend(layout.model_table(model)?);
            }
        }
        for relation in &builder.cx.previous().relations {
            stmts.extend(layout.relation_table(relation)?);
        }

        for stmt in &stmts {
            builder.shapes.apply(stmt);
        }

        Ok(builder)
    }

    /// Lowers every step, in order.
    pub fn build(&mut self, steps: &[MigrationStep]) -> Result<Vec<Statement>> {
        let mut stmts = vec![];
        for step in steps {
            let lowered = self.step(step)?;
            tracing::debug!(%step, statements = lowered.len(), "lowered step");
            stmts.extend(lowered);
        }
        Ok(stmts)
    }

    /// Lowers one step.
    pub fn step(&mut self, step: &MigrationStep) -> Result<Vec<Statement>> {
        match step {
            MigrationStep::CreateModel(step) => self.create_model(step),
            MigrationStep::DeleteModel(step) => self.delete_model(step),
            MigrationStep::UpdateModel(step) => self.update_model(step),
            MigrationStep::CreateField(step) => self.create_field(step),
            MigrationStep::DeleteField(step) => self.delete_field(step),
            MigrationStep::UpdateField(step) => self.update_field(step),
            MigrationStep::CreateRelation(step) => self.create_relation(step),
            MigrationStep::DeleteRelation(step) => self.delete_relation(step),
            MigrationStep::UpdateRelation(step) => self.update_relation(step),
            MigrationStep::CreateIndex(step) => self.create_index(step),
            MigrationStep::DeleteIndex(step) => self.delete_index(step),
            MigrationStep::AlterIndex(step) => self.alter_index(step),
            // Enum values are stored as plain strings and secrets live
            // outside the database.
            MigrationStep::CreateEnum(_)
            | MigrationStep::DeleteEnum(_)
            | MigrationStep::UpdateEnum(_)
            | MigrationStep::UpdateSecrets(_) => Ok(vec![]),
        }
    }

    /// Statements creating a model's table, its unique indexes and its list
    /// tables, as named in the next schema.
    pub fn create_model_table(&self, model: &Model) -> Result<Vec<Statement>> {
        self.layout(self.cx.next()).model_table(model)
    }

    /// Statements creating a relation table, its foreign keys and indexes.
    pub fn create_relation_table(&self, relation: &Relation) -> Result<Vec<Statement>> {
        self.layout(self.cx.next()).relation_table(relation)
    }

    fn layout<'b>(&'b self, schema: &'b Schema) -> Layout<'b> {
        Layout {
            namespace: &self.namespace,
            capability: self.capability,
            schema,
        }
    }

    fn name(&self, table: &str) -> Name {
        Name::qualified(&self.namespace, table)
    }

    fn previous_model(&self, name: &str) -> Result<&'a Model> {
        self.cx
            .previous()
            .model(name)
            .ok_or_else(|| err!("model `{name}` is not in the previous schema"))
    }

    fn next_model(&self, name: &str) -> Result<&'a Model> {
        self.cx
            .next()
            .model(name)
            .ok_or_else(|| err!("model `{name}` is not in the next schema"))
    }

    /// Emits every statement, in order.
    fn emit_all(&mut self, stmts: Vec<Statement>) -> Result<Vec<Statement>> {
        let mut out = vec![];
        for stmt in stmts {
            self.emit(&mut out, stmt)?;
        }
        Ok(out)
    }

    /// Verifies the statement's identifiers, applies it to the tracked layout
    /// and appends it to `out`.
    fn emit(&mut self, out: &mut Vec<Statement>, stmt: Statement) -> Result<()> {
        for identifier in stmt.identifiers() {
            self.verify_identifier(identifier)?;
        }
        tracing::trace!(?stmt, "emit");
        self.shapes.apply(&stmt);
        out.push(stmt);
        Ok(())
    }

    fn verify_identifier(&self, identifier: &str) -> Result<()> {
        let reason = if identifier.is_empty() {
            "identifiers must not be empty".to_string()
        } else if identifier.contains('\0') {
            "identifiers must not contain NUL characters".to_string()
        } else if identifier.contains(['"', '`']) {
            "identifiers must not contain quote characters".to_string()
        } else if !self.capability.fits_identifier(identifier) {
            format!(
                "identifiers are limited to {} bytes",
                self.capability.max_identifier_length.unwrap_or_default()
            )
        } else {
            return Ok(());
        };

        Err(Error::invalid_identifier(identifier, reason))
    }
}

/// The field `name` of `model`.
fn field<'m>(model: &'m Model, name: &str) -> Result<&'m Field> {
    model
        .field_by_name(name)
        .ok_or_else(|| err!("field `{}.{name}` does not exist", model.name))
}
