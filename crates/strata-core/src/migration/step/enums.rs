use super::MigrationStep;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreateEnum {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeleteEnum {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateEnum {
    /// Enum name when the step is applied.
    pub name: String,

    pub new_name: Option<String>,

    /// The full value list of the next schema, present when the value set
    /// changed.
    pub values: Option<Vec<String>>,
}

impl MigrationStep {
    pub fn create_enum(name: impl Into<String>) -> Self {
        CreateEnum { name: name.into() }.into()
    }

    pub fn delete_enum(name: impl Into<String>) -> Self {
        DeleteEnum { name: name.into() }.into()
    }

    pub fn update_enum(
        name: impl Into<String>,
        new_name: Option<String>,
        values: Option<Vec<String>>,
    ) -> Self {
        UpdateEnum {
            name: name.into(),
            new_name,
            values,
        }
        .into()
    }
}

impl From<CreateEnum> for MigrationStep {
    fn from(value: CreateEnum) -> Self {
        Self::CreateEnum(value)
    }
}

impl From<DeleteEnum> for MigrationStep {
    fn from(value: DeleteEnum) -> Self {
        Self::DeleteEnum(value)
    }
}

impl From<UpdateEnum> for MigrationStep {
    fn from(value: UpdateEnum) -> Self {
        Self::UpdateEnum(value)
    }
}
