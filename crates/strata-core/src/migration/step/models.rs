use super::MigrationStep;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateModel {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteModel {
    pub name: String,
}

/// Renames a model. Model renames always come in two phases, through a
/// transient name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateModel {
    pub name: String,
    pub new_name: String,
}

impl MigrationStep {
    pub fn create_model(name: impl Into<String>) -> Self {
        CreateModel { name: name.into() }.into()
    }

    pub fn delete_model(name: impl Into<String>) -> Self {
        DeleteModel { name: name.into() }.into()
    }

    pub fn update_model(name: impl Into<String>, new_name: impl Into<String>) -> Self {
        UpdateModel {
            name: name.into(),
            new_name: new_name.into(),
        }
        .into()
    }
}

impl From<CreateModel> for MigrationStep {
    fn from(value: CreateModel) -> Self {
        Self::CreateModel(value)
    }
}

impl From<DeleteModel> for MigrationStep {
    fn from(value: DeleteModel) -> Self {
        Self::DeleteModel(value)
    }
}

impl From<UpdateModel> for MigrationStep {
    fn from(value: UpdateModel) -> Self {
        Self::UpdateModel(value)
    }
}
