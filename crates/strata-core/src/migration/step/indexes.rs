use super::MigrationStep;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateIndex {
    pub model: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteIndex {
    pub model: String,
    pub name: String,
}

/// Renames an index whose content is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlterIndex {
    pub model: String,
    pub name: String,
    pub new_name: String,
}

impl MigrationStep {
    pub fn create_index(model: impl Into<String>, name: impl Into<String>) -> Self {
        CreateIndex {
            model: model.into(),
            name: name.into(),
        }
        .into()
    }

    pub fn delete_index(model: impl Into<String>, name: impl Into<String>) -> Self {
        DeleteIndex {
            model: model.into(),
            name: name.into(),
        }
        .into()
    }

    pub fn alter_index(
        model: impl Into<String>,
        name: impl Into<String>,
        new_name: impl Into<String>,
    ) -> Self {
        AlterIndex {
            model: model.into(),
            name: name.into(),
            new_name: new_name.into(),
        }
        .into()
    }
}

impl From<CreateIndex> for MigrationStep {
    fn from(value: CreateIndex) -> Self {
        Self::CreateIndex(value)
    }
}

impl From<DeleteIndex> for MigrationStep {
    fn from(value: DeleteIndex) -> Self {
        Self::DeleteIndex(value)
    }
}

impl From<AlterIndex> for MigrationStep {
    fn from(value: AlterIndex) -> Self {
        Self::AlterIndex(value)
    }
}
