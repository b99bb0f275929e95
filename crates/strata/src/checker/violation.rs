use std::fmt;

/// A change the current data cannot satisfy. Blocks the migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field without a default is added to a model with rows.
    RequiredFieldOnPopulatedModel { model: String, field: String },

    /// A singular relation field is added while records on its side are
    /// already connected to several records.
    DuplicateRelationPairs {
        model: String,
        field: String,
        relation: String,
    },

    /// A field becomes required while some rows hold no value.
    NullsInRequiredField { model: String, field: String },

    /// A required field changes type while its model has rows.
    TypeChangeOnRequiredField { model: String, field: String },

    /// A field becomes unique while rows share a value.
    DuplicatesInUniqueField { model: String, field: String },

    /// An enum value is removed while rows still hold it.
    EnumValueInUse { enum_name: String, value: String },

    /// A relation with a required side is added while that side's model has
    /// rows, none of which can be connected yet.
    RequiredRelationOnPopulatedModel { relation: String, model: String },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RequiredFieldOnPopulatedModel { model, field } => write!(
                f,
                "required field `{model}.{field}` has no default and `{model}` already holds records"
            ),
            Violation::DuplicateRelationPairs {
                model,
                field,
                relation,
            } => write!(
                f,
                "field `{model}.{field}` is singular but relation `{relation}` connects some `{model}` records more than once"
            ),
            Violation::NullsInRequiredField { model, field } => write!(
                f,
                "field `{model}.{field}` becomes required but some records have no value"
            ),
            Violation::TypeChangeOnRequiredField { model, field } => write!(
                f,
                "required field `{model}.{field}` changes type and `{model}` already holds records"
            ),
            Violation::DuplicatesInUniqueField { model, field } => write!(
                f,
                "field `{model}.{field}` becomes unique but some records share a value"
            ),
            Violation::EnumValueInUse { enum_name, value } => write!(
                f,
                "value `{value}` is removed from enum `{enum_name}` but records still use it"
            ),
            Violation::RequiredRelationOnPopulatedModel { relation, model } => write!(
                f,
                "relation `{relation}` is required for `{model}`, which already holds records"
            ),
        }
    }
}
