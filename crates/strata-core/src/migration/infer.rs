mod enums;
use enums::{EnumsDiff, EnumsDiffItem};

mod indexes;
use indexes::IndexesDiffItem;

mod models;
use models::{FieldsDiffItem, ModelsDiff, ModelsDiffItem};

mod relations;
use relations::{RelationsDiff, RelationsDiffItem};

mod rename;
use rename::TransientNames;

use super::{FieldCorrelation, MigrationStep, UpdateRelation, UpdateSecrets};

use crate::{
    driver::Capability,
    schema::{DiffContext, FieldPath, RenameMapping, Schema},
    Result,
};

/// Derives the ordered list of steps that turns one schema into another.
#[derive(Debug, Clone, Copy)]
pub struct MigrationStepsInferrer<'a> {
    capability: &'a Capability,
}

impl<'a> MigrationStepsInferrer<'a> {
    pub fn new(capability: &'a Capability) -> Self {
        Self { capability }
    }

    /// Computes the steps migrating `previous` into `next`.
    ///
    /// Entities not covered by `mapping` correlate by name. Steps are ordered
    /// so that each one can be applied to the state left by the steps before
    /// it: no name is claimed while still held, and nothing is referenced
    /// before it exists.
    pub fn evaluate(
        &self,
        previous: &Schema,
        next: &Schema,
        mapping: &RenameMapping,
    ) -> Result<Vec<MigrationStep>> {
        mapping.verify(previous, next)?;

        let cx = DiffContext::new(previous, next, mapping);

        let mut names = TransientNames::default();
        for schema in [previous, next] {
            names.reserve(schema.models.iter().map(|model| model.name.as_str()));
            names.reserve(schema.enums.iter().map(|e| e.name.as_str()));
            names.reserve(schema.relations.iter().map(|rel| rel.name.as_str()));
            for model in &schema.models {
                names.reserve(model.fields.iter().map(|field| field.name.as_str()));
            }
        }

        let models = ModelsDiff::from(&cx, self.capability, &mut names);
        let enums = EnumsDiff::from(&cx, &mut names);
        let relations = RelationsDiff::from(&cx, &mut names);

        let steps = order(&models, &enums, &relations);

        tracing::debug!(count = steps.len(), "inferred migration steps");
        for step in &steps {
            tracing::debug!(%step, "step");
        }

        Ok(steps)
    }
}

/// Compares two secret lists, producing a step only when they differ.
pub fn infer_secrets_step(previous: &[String], next: &[String]) -> Option<MigrationStep> {
    (previous != next).then(|| {
        UpdateSecrets {
            secrets: next.to_vec(),
        }
        .into()
    })
}

fn order(
    models: &ModelsDiff<'_>,
    enums: &EnumsDiff<'_>,
    relations: &RelationsDiff<'_>,
) -> Vec<MigrationStep> {
    let mut steps = vec![];

    // Remove indexes while their models still carry the previous names.
    for item in &models.items {
        let ModelsDiffItem::AlterModel {
            previous, indexes, ..
        } = item
        else {
            continue;
        };
        for item in &indexes.items {
            match item {
                IndexesDiffItem::DeleteIndex(index) => {
                    steps.push(MigrationStep::delete_index(&previous.name, &index.name));
                }
                IndexesDiffItem::ReplaceIndex { previous: index, .. } => {
                    steps.push(MigrationStep::delete_index(&previous.name, &index.name));
                }
                _ => {}
            }
        }
    }

    for item in &relations.items {
        if let RelationsDiffItem::DeleteRelation(relation) = item {
            steps.push(MigrationStep::delete_relation(&relation.name));
        }
    }

    for item in &relations.items {
        if let RelationsDiffItem::AlterRelation {
            previous,
            rename,
            on_delete_a,
            on_delete_b,
        } = item
        {
            steps.push(
                UpdateRelation {
                    name: previous.name.clone(),
                    new_name: rename.as_ref().map(|rename| rename.first_target().to_string()),
                    on_delete_a: *on_delete_a,
                    on_delete_b: *on_delete_b,
                }
                .into(),
            );
        }
    }

    for item in &models.items {
        let ModelsDiffItem::AlterModel {
            previous, fields, ..
        } = item
        else {
            continue;
        };
        for item in &fields.items {
            if let FieldsDiffItem::DeleteField(field) = item {
                steps.push(MigrationStep::delete_field(&previous.name, &field.name));
            }
        }
    }

    for item in &enums.items {
        if let EnumsDiffItem::AlterEnum {
            previous,
            rename,
            values,
        } = item
        {
            steps.push(MigrationStep::update_enum(
                &previous.name,
                rename.as_ref().map(|rename| rename.first_target().to_string()),
                values.map(<[String]>::to_vec),
            ));
        }
    }

    for item in &enums.items {
        if let EnumsDiffItem::CreateEnum(e) = item {
            steps.push(MigrationStep::create_enum(&e.name));
        }
    }

    // Every renamed model first moves to a transient name. This frees all
    // previous names before deleted models go away and before any final
    // name is claimed.
    for item in &models.items {
        if let ModelsDiffItem::AlterModel {
            previous,
            rename: Some(rename),
            ..
        } = item
        {
            steps.push(MigrationStep::update_model(
                &previous.name,
                rename.first_target(),
            ));
        }
    }

    for item in &models.items {
        if let ModelsDiffItem::DeleteModel(model) = item {
            steps.push(MigrationStep::delete_model(&model.name));
        }
    }

    for item in &models.items {
        if let ModelsDiffItem::AlterModel {
            rename: Some(rename),
            ..
        } = item
        {
            if let Some((transient, name)) = rename.second_phase() {
                steps.push(MigrationStep::update_model(transient, name));
            }
        }
    }

    for item in &models.items {
        if let ModelsDiffItem::CreateModel(model) = item {
            steps.push(MigrationStep::create_model(&model.name));
            for field in model.fields.iter().filter(|field| !field.is_relation()) {
                steps.push(MigrationStep::create_field(&model.name, &field.name));
            }
        }
    }

    for item in &models.items {
        let ModelsDiffItem::AlterModel {
            previous,
            next,
            fields,
            ..
        } = item
        else {
            continue;
        };

        for item in &fields.items {
            if let FieldsDiffItem::AlterField {
                previous: previous_field,
                next: next_field,
                rename,
            } = item
            {
                let correlation = FieldCorrelation {
                    previous: FieldPath::new(&previous.name, &previous_field.name),
                    next: FieldPath::new(&next.name, &next_field.name),
                };
                steps.push(MigrationStep::update_field(
                    &next.name,
                    &previous_field.name,
                    rename.as_ref().map(|rename| rename.first_target().to_string()),
                    Some(correlation),
                ));
            }
        }

        for item in &fields.items {
            if let FieldsDiffItem::CreateField(field) = item {
                if !field.is_relation() {
                    steps.push(MigrationStep::create_field(&next.name, &field.name));
                }
            }
        }

        for item in &fields.items {
            if let FieldsDiffItem::AlterField {
                rename: Some(rename),
                ..
            } = item
            {
                if let Some((transient, name)) = rename.second_phase() {
                    steps.push(MigrationStep::update_field(
                        &next.name,
                        transient,
                        Some(name.to_string()),
                        None,
                    ));
                }
            }
        }
    }

    // Relation fields come last so that both ends of a relation exist.
    for item in &models.items {
        match item {
            ModelsDiffItem::CreateModel(model) => {
                for field in model.relation_fields() {
                    steps.push(MigrationStep::create_field(&model.name, &field.name));
                }
            }
            ModelsDiffItem::AlterModel { next, fields, .. } => {
                for item in &fields.items {
                    if let FieldsDiffItem::CreateField(field) = item {
                        if field.is_relation() {
                            steps.push(MigrationStep::create_field(&next.name, &field.name));
                        }
                    }
                }
            }
            ModelsDiffItem::DeleteModel(_) => {}
        }
    }

    for item in &relations.items {
        if let RelationsDiffItem::CreateRelation(relation) = item {
            steps.push(MigrationStep::create_relation(&relation.name));
        }
    }

    for item in &relations.items {
        if let RelationsDiffItem::AlterRelation {
            rename: Some(rename),
            ..
        } = item
        {
            if let Some((transient, name)) = rename.second_phase() {
                steps.push(MigrationStep::rename_relation(transient, name));
            }
        }
    }

    for item in &enums.items {
        if let EnumsDiffItem::DeleteEnum(e) = item {
            steps.push(MigrationStep::delete_enum(&e.name));
        }
    }

    for item in &enums.items {
        if let EnumsDiffItem::AlterEnum {
            rename: Some(rename),
            ..
        } = item
        {
            if let Some((transient, name)) = rename.second_phase() {
                steps.push(MigrationStep::update_enum(
                    transient,
                    Some(name.to_string()),
                    None,
                ));
            }
        }
    }

    // Index steps address models by their final names.
    for item in &models.items {
        let ModelsDiffItem::AlterModel { next, indexes, .. } = item else {
            continue;
        };
        for item in &indexes.items {
            if let IndexesDiffItem::RenameIndex { previous, next: index } = item {
                steps.push(MigrationStep::alter_index(
                    &next.name,
                    &previous.name,
                    &index.name,
                ));
            }
        }
    }

    for item in &models.items {
        match item {
            ModelsDiffItem::CreateModel(model) => {
                for index in &model.indexes {
                    steps.push(MigrationStep::create_index(&model.name, &index.name));
                }
            }
            ModelsDiffItem::AlterModel { next, indexes, .. } => {
                for item in &indexes.items {
                    match item {
                        IndexesDiffItem::CreateIndex(index)
                        | IndexesDiffItem::ReplaceIndex { next: index, .. } => {
                            steps.push(MigrationStep::create_index(&next.name, &index.name));
                        }
                        _ => {}
                    }
                }
            }
            ModelsDiffItem::DeleteModel(_) => {}
        }
    }

    steps
}
