mod violation;
pub use violation::Violation;

mod warning;
pub use warning::Warning;

use futures::future::try_join_all;
use strata_core::{
    err,
    migration::{
        CreateField, CreateRelation, DeleteField, DeleteModel, DeleteRelation, UpdateEnum,
        UpdateField,
    },
    schema::{DiffContext, Field, FieldTy, Model, Relation, RelationSide},
    DataQueries, MigrationStep, Result,
};

/// Outcome of checking a migration against the data it will run on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The migration can be applied. Any warnings must be accepted first;
    /// no warnings means the migration is safe.
    Warnings(Vec<Warning>),

    /// The migration cannot be applied to the current data.
    Errors(Vec<Violation>),
}

impl Verdict {
    /// True when nothing is lost and nothing is blocked.
    pub fn is_safe(&self) -> bool {
        matches!(self, Verdict::Warnings(warnings) if warnings.is_empty())
    }

    pub fn warnings(&self) -> &[Warning] {
        match self {
            Verdict::Warnings(warnings) => warnings,
            Verdict::Errors(_) => &[],
        }
    }

    pub fn errors(&self) -> &[Violation] {
        match self {
            Verdict::Warnings(_) => &[],
            Verdict::Errors(errors) => errors,
        }
    }
}

/// Inspects each migration step against the live data and reports what the
/// step would destroy or cannot satisfy.
///
/// Steps are checked concurrently. Every probe reads the previous schema's
/// tables; nothing is written.
pub struct DestructiveChangeChecker<'a> {
    queries: &'a dyn DataQueries,
    cx: DiffContext<'a>,
}

#[derive(Debug, Default)]
struct Findings {
    warnings: Vec<Warning>,
    violations: Vec<Violation>,
}

impl<'a> DestructiveChangeChecker<'a> {
    pub fn new(queries: &'a dyn DataQueries, cx: &DiffContext<'a>) -> Self {
        Self { queries, cx: *cx }
    }

    pub async fn check(&self, steps: &[MigrationStep]) -> Result<Verdict> {
        let findings = try_join_all(steps.iter().map(|step| self.check_step(step))).await?;

        let mut warnings = vec![];
        let mut violations = vec![];
        for item in findings {
            warnings.extend(item.warnings);
            violations.extend(item.violations);
        }

        if !violations.is_empty() {
            tracing::info!(
                errors = violations.len(),
                warnings = warnings.len(),
                "migration blocked by existing data"
            );
            return Ok(Verdict::Errors(violations));
        }

        tracing::info!(warnings = warnings.len(), "destructive change check passed");
        Ok(Verdict::Warnings(warnings))
    }

    async fn check_step(&self, step: &MigrationStep) -> Result<Findings> {
        let mut findings = Findings::default();

        match step {
            MigrationStep::DeleteModel(step) => self.delete_model(step, &mut findings).await?,
            MigrationStep::CreateField(step) => self.create_field(step, &mut findings).await?,
            MigrationStep::DeleteField(step) => self.delete_field(step, &mut findings).await?,
            MigrationStep::UpdateField(step) => self.update_field(step, &mut findings).await?,
            MigrationStep::UpdateEnum(step) => self.update_enum(step, &mut findings).await?,
            MigrationStep::CreateRelation(step) => {
                self.create_relation(step, &mut findings).await?
            }
            MigrationStep::DeleteRelation(step) => {
                self.delete_relation(step, &mut findings).await?
            }
            _ => {}
        }

        tracing::trace!(
            %step,
            warnings = findings.warnings.len(),
            errors = findings.violations.len(),
            "checked step"
        );
        Ok(findings)
    }

    async fn delete_model(&self, step: &DeleteModel, findings: &mut Findings) -> Result<()> {
        let model = self.previous_model(&step.name)?;

        if !model.is_embedded && self.queries.exists_rows(model).await? {
            findings.warnings.push(Warning::ModelHasRows {
                model: model.name.clone(),
            });
        }

        Ok(())
    }

    async fn create_field(&self, step: &CreateField, findings: &mut Findings) -> Result<()> {
        let model = self.next_model(&step.model)?;
        let field = field(model, &step.name)?;

        // Fields of new models start out with an empty table.
        let Some(previous_model) = self.cx.previous_model_for(model) else {
            return Ok(());
        };
        if previous_model.is_embedded {
            return Ok(());
        }

        match &field.ty {
            FieldTy::Relation(rel) => {
                if field.list {
                    return Ok(());
                }
                let Some(relation) = self.cx.next().relation(&rel.relation) else {
                    return Ok(());
                };
                // A rebuilt relation starts out with an empty table.
                let Some(previous) = self
                    .cx
                    .previous_relation_for(relation)
                    .filter(|previous| self.cx.same_endpoints(previous, relation))
                else {
                    return Ok(());
                };

                if self
                    .queries
                    .exists_duplicate_relation_pairs(previous, rel.side)
                    .await?
                {
                    findings.violations.push(Violation::DuplicateRelationPairs {
                        model: model.name.clone(),
                        field: field.name.clone(),
                        relation: relation.name.clone(),
                    });
                }
            }
            _ => {
                if field.required
                    && !field.list
                    && !field.has_default()
                    && self.queries.exists_rows(previous_model).await?
                {
                    findings
                        .violations
                        .push(Violation::RequiredFieldOnPopulatedModel {
                            model: model.name.clone(),
                            field: field.name.clone(),
                        });
                }
            }
        }

        Ok(())
    }

    async fn delete_field(&self, step: &DeleteField, findings: &mut Findings) -> Result<()> {
        let model = self.previous_model(&step.model)?;
        let field = field(model, &step.name)?;

        if field.is_relation() || model.is_embedded {
            return Ok(());
        }

        if self.queries.exists_rows(model).await? {
            findings.warnings.push(Warning::FieldHasData {
                model: model.name.clone(),
                field: field.name.clone(),
            });
        }

        Ok(())
    }

    async fn update_field(&self, step: &UpdateField, findings: &mut Findings) -> Result<()> {
        // The second phase of a rename only moves a name.
        let Some(correlation) = &step.correlation else {
            return Ok(());
        };

        let (model, previous) = self
            .cx
            .previous_field(&correlation.previous)
            .ok_or_else(|| err!("field `{}` not found in previous schema", correlation.previous))?;
        let (_, next) = self
            .cx
            .next_field(&correlation.next)
            .ok_or_else(|| err!("field `{}` not found in next schema", correlation.next))?;

        if model.is_embedded {
            return Ok(());
        }

        let model_name = &correlation.next.model;
        let reshaped = self.type_changed(previous, next) || previous.list != next.list;
        let mut rows = None;

        if reshaped && self.has_rows(model, &mut rows).await? {
            findings.warnings.push(Warning::FieldChangeLosesData {
                model: model_name.clone(),
                field: next.name.clone(),
            });
        }

        if next.is_relation() {
            return Ok(());
        }

        if next.required && !next.list {
            if reshaped {
                if self.has_rows(model, &mut rows).await? {
                    findings.violations.push(Violation::TypeChangeOnRequiredField {
                        model: model_name.clone(),
                        field: next.name.clone(),
                    });
                }
            } else if !previous.required && self.queries.exists_null(model, previous).await? {
                findings.violations.push(Violation::NullsInRequiredField {
                    model: model_name.clone(),
                    field: next.name.clone(),
                });
            }
        }

        if next.unique
            && !previous.unique
            && self.queries.exists_duplicates(model, previous).await?
        {
            findings.violations.push(Violation::DuplicatesInUniqueField {
                model: model_name.clone(),
                field: next.name.clone(),
            });
        }

        Ok(())
    }

    async fn update_enum(&self, step: &UpdateEnum, findings: &mut Findings) -> Result<()> {
        let Some(values) = &step.values else {
            return Ok(());
        };

        let previous = self
            .cx
            .previous()
            .enum_(&step.name)
            .ok_or_else(|| err!("enum `{}` not found in previous schema", step.name))?;

        for value in previous.values.iter().filter(|value| !values.contains(*value)) {
            for (model, field) in self.cx.previous().fields_using_enum(&previous.name) {
                if model.is_embedded || !self.field_survives(model, field) {
                    continue;
                }

                if self.queries.exists_enum_value(model, field, value).await? {
                    findings.violations.push(Violation::EnumValueInUse {
                        enum_name: previous.name.clone(),
                        value: value.clone(),
                    });
                    break;
                }
            }
        }

        Ok(())
    }

    async fn create_relation(&self, step: &CreateRelation, findings: &mut Findings) -> Result<()> {
        let relation = self
            .cx
            .next()
            .relation(&step.name)
            .ok_or_else(|| err!("relation `{}` not found in next schema", step.name))?;

        for side in RelationSide::ALL {
            let Some((next_model, field)) = self.cx.next().relation_field(relation, side) else {
                continue;
            };
            if !field.required || field.list {
                continue;
            }
            let Some(model) = self.cx.previous_model_for(next_model) else {
                continue;
            };

            if !model.is_embedded && self.queries.exists_rows(model).await? {
                findings
                    .violations
                    .push(Violation::RequiredRelationOnPopulatedModel {
                        relation: relation.name.clone(),
                        model: next_model.name.clone(),
                    });
            }
        }

        Ok(())
    }

    async fn delete_relation(&self, step: &DeleteRelation, findings: &mut Findings) -> Result<()> {
        let relation: &Relation = self
            .cx
            .previous()
            .relation(&step.name)
            .ok_or_else(|| err!("relation `{}` not found in previous schema", step.name))?;

        if self.queries.exists_relation_pairs(relation).await? {
            findings.warnings.push(Warning::RelationHasPairs {
                relation: relation.name.clone(),
            });
        }

        Ok(())
    }

    /// True when the stored representation of a field's values changes.
    fn type_changed(&self, previous: &Field, next: &Field) -> bool {
        match (&previous.ty, &next.ty) {
            (FieldTy::Scalar(lhs), FieldTy::Scalar(rhs)) => lhs.ty != rhs.ty,
            (FieldTy::Enum(lhs), FieldTy::Enum(rhs)) => {
                let renamed = self
                    .cx
                    .next()
                    .enum_(&rhs.name)
                    .and_then(|next| self.cx.previous_enum_for(next))
                    .is_some_and(|previous| previous.name == lhs.name);
                lhs.name != rhs.name && !renamed
            }
            (FieldTy::Relation(lhs), FieldTy::Relation(rhs)) => self
                .cx
                .previous()
                .model(&lhs.target)
                .and_then(|model| self.cx.next_model_for(model))
                .map_or(true, |model| model.name != rhs.target),
            _ => true,
        }
    }

    /// True when the field still exists once the migration is applied.
    fn field_survives(&self, model: &Model, field: &Field) -> bool {
        self.cx
            .next_model_for(model)
            .and_then(|next_model| self.cx.next_field_for(model, next_model, field))
            .is_some()
    }

    async fn has_rows(&self, model: &Model, cache: &mut Option<bool>) -> Result<bool> {
        if let Some(rows) = *cache {
            return Ok(rows);
        }
        let rows = self.queries.exists_rows(model).await?;
        *cache = Some(rows);
        Ok(rows)
    }

    fn previous_model(&self, name: &str) -> Result<&'a Model> {
        self.cx
            .previous()
            .model(name)
            .ok_or_else(|| err!("model `{name}` not found in previous schema"))
    }

    fn next_model(&self, name: &str) -> Result<&'a Model> {
        self.cx
            .next()
            .model(name)
            .ok_or_else(|| err!("model `{name}` not found in next schema"))
    }
}

fn field<'m>(model: &'m Model, name: &str) -> Result<&'m Field> {
    model
        .field_by_name(name)
        .ok_or_else(|| err!("field `{}.{name}` not found", model.name))
}
