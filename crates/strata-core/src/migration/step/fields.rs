use super::MigrationStep;

use crate::schema::FieldPath;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateField {
    pub model: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteField {
    pub model: String,
    pub name: String,
}

/// Changes a field's attributes, its name, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateField {
    /// Owning model, as named when the step is applied.
    pub model: String,

    /// Field name when the step is applied.
    pub name: String,

    /// New field name, when the step renames the field.
    pub new_name: Option<String>,

    /// Identifies the field in both schemas. Present on the step carrying
    /// attribute changes; the second phase of a two-phase rename only moves
    /// the name and has none.
    pub correlation: Option<FieldCorrelation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldCorrelation {
    pub previous: FieldPath,
    pub next: FieldPath,
}

impl UpdateField {
    /// The field name once the step has been applied.
    pub fn current_name(&self) -> &str {
        self.new_name.as_deref().unwrap_or(&self.name)
    }
}

impl MigrationStep {
    pub fn create_field(model: impl Into<String>, name: impl Into<String>) -> Self {
        CreateField {
            model: model.into(),
            name: name.into(),
        }
        .into()
    }

    pub fn delete_field(model: impl Into<String>, name: impl Into<String>) -> Self {
        DeleteField {
            model: model.into(),
            name: name.into(),
        }
        .into()
    }

    pub fn update_field(
        model: impl Into<String>,
        name: impl Into<String>,
        new_name: Option<String>,
        correlation: Option<FieldCorrelation>,
    ) -> Self {
        UpdateField {
            model: model.into(),
            name: name.into(),
            new_name,
            correlation,
        }
        .into()
    }
}

impl From<CreateField> for MigrationStep {
    fn from(value: CreateField) -> Self {
        Self::CreateField(value)
    }
}

impl From<DeleteField> for MigrationStep {
    fn from(value: DeleteField) -> Self {
        Self::DeleteField(value)
    }
}

impl From<UpdateField> for MigrationStep {
    fn from(value: UpdateField) -> Self {
        Self::UpdateField(value)
    }
}
