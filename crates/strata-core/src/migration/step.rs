mod enums;
pub use enums::{CreateEnum, DeleteEnum, UpdateEnum};

mod fields;
pub use fields::{CreateField, DeleteField, FieldCorrelation, UpdateField};

mod indexes;
pub use indexes::{AlterIndex, CreateIndex, DeleteIndex};

mod models;
pub use models::{CreateModel, DeleteModel, UpdateModel};

mod relations;
pub use relations::{CreateRelation, DeleteRelation, UpdateRelation};

mod secrets;
pub use secrets::UpdateSecrets;

use std::fmt;

/// One atomic change between two schema snapshots.
///
/// Steps only carry identifiers. Names refer to entities as they are called
/// at the moment the step is applied, so a step following a rename uses the
/// new name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MigrationStep {
    CreateModel(CreateModel),
    DeleteModel(DeleteModel),
    UpdateModel(UpdateModel),
    CreateField(CreateField),
    DeleteField(DeleteField),
    UpdateField(UpdateField),
    CreateEnum(CreateEnum),
    DeleteEnum(DeleteEnum),
    UpdateEnum(UpdateEnum),
    CreateRelation(CreateRelation),
    DeleteRelation(DeleteRelation),
    UpdateRelation(UpdateRelation),
    CreateIndex(CreateIndex),
    DeleteIndex(DeleteIndex),
    AlterIndex(AlterIndex),
    UpdateSecrets(UpdateSecrets),
}

impl MigrationStep {
    /// The step variant's name, e.g. `"CreateField"`.
    pub fn kind(&self) -> &'static str {
        match self {
            MigrationStep::CreateModel(_) => "CreateModel",
            MigrationStep::DeleteModel(_) => "DeleteModel",
            MigrationStep::UpdateModel(_) => "UpdateModel",
            MigrationStep::CreateField(_) => "CreateField",
            MigrationStep::DeleteField(_) => "DeleteField",
            MigrationStep::UpdateField(_) => "UpdateField",
            MigrationStep::CreateEnum(_) => "CreateEnum",
            MigrationStep::DeleteEnum(_) => "DeleteEnum",
            MigrationStep::UpdateEnum(_) => "UpdateEnum",
            MigrationStep::CreateRelation(_) => "CreateRelation",
            MigrationStep::DeleteRelation(_) => "DeleteRelation",
            MigrationStep::UpdateRelation(_) => "UpdateRelation",
            MigrationStep::CreateIndex(_) => "CreateIndex",
            MigrationStep::DeleteIndex(_) => "DeleteIndex",
            MigrationStep::AlterIndex(_) => "AlterIndex",
            MigrationStep::UpdateSecrets(_) => "UpdateSecrets",
        }
    }
}

impl fmt::Display for MigrationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind())?;
        match self {
            MigrationStep::CreateModel(step) => f.write_str(&step.name)?,
            MigrationStep::DeleteModel(step) => f.write_str(&step.name)?,
            MigrationStep::UpdateModel(step) => write!(f, "{} -> {}", step.name, step.new_name)?,
            MigrationStep::CreateField(step) => write!(f, "{}.{}", step.model, step.name)?,
            MigrationStep::DeleteField(step) => write!(f, "{}.{}", step.model, step.name)?,
            MigrationStep::UpdateField(step) => {
                write!(f, "{}.{}", step.model, step.name)?;
                if let Some(new_name) = &step.new_name {
                    write!(f, " -> {new_name}")?;
                }
            }
            MigrationStep::CreateEnum(step) => f.write_str(&step.name)?,
            MigrationStep::DeleteEnum(step) => f.write_str(&step.name)?,
            MigrationStep::UpdateEnum(step) => {
                f.write_str(&step.name)?;
                if let Some(new_name) = &step.new_name {
                    write!(f, " -> {new_name}")?;
                }
                if let Some(values) = &step.values {
                    write!(f, " [{}]", values.join(", "))?;
                }
            }
            MigrationStep::CreateRelation(step) => f.write_str(&step.name)?,
            MigrationStep::DeleteRelation(step) => f.write_str(&step.name)?,
            MigrationStep::UpdateRelation(step) => {
                f.write_str(&step.name)?;
                if let Some(new_name) = &step.new_name {
                    write!(f, " -> {new_name}")?;
                }
            }
            MigrationStep::CreateIndex(step) => write!(f, "{}.{}", step.model, step.name)?,
            MigrationStep::DeleteIndex(step) => write!(f, "{}.{}", step.model, step.name)?,
            MigrationStep::AlterIndex(step) => {
                write!(f, "{}.{} -> {}", step.model, step.name, step.new_name)?
            }
            MigrationStep::UpdateSecrets(step) => write!(f, "{} secret(s)", step.secrets.len())?,
        }
        f.write_str(")")
    }
}
