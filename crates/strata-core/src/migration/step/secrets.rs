use super::MigrationStep;

/// Replaces the project's secrets. Has no structural effect.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpdateSecrets {
    pub secrets: Vec<String>,
}

impl From<UpdateSecrets> for MigrationStep {
    fn from(value: UpdateSecrets) -> Self {
        Self::UpdateSecrets(value)
    }
}
