use super::MigrationStep;

use crate::schema::OnDelete;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateRelation {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteRelation {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateRelation {
    /// Relation name when the step is applied.
    pub name: String,

    pub new_name: Option<String>,

    /// New delete rule for side A, when it changed.
    pub on_delete_a: Option<OnDelete>,

    /// New delete rule for side B, when it changed.
    pub on_delete_b: Option<OnDelete>,
}

impl MigrationStep {
    pub fn create_relation(name: impl Into<String>) -> Self {
        CreateRelation { name: name.into() }.into()
    }

    pub fn delete_relation(name: impl Into<String>) -> Self {
        DeleteRelation { name: name.into() }.into()
    }

    pub fn rename_relation(name: impl Into<String>, new_name: impl Into<String>) -> Self {
        UpdateRelation {
            name: name.into(),
            new_name: Some(new_name.into()),
            on_delete_a: None,
            on_delete_b: None,
        }
        .into()
    }
}

impl From<CreateRelation> for MigrationStep {
    fn from(value: CreateRelation) -> Self {
        Self::CreateRelation(value)
    }
}

impl From<DeleteRelation> for MigrationStep {
    fn from(value: DeleteRelation) -> Self {
        Self::DeleteRelation(value)
    }
}

impl From<UpdateRelation> for MigrationStep {
    fn from(value: UpdateRelation) -> Self {
        Self::UpdateRelation(value)
    }
}
