use std::fmt;

/// A change that loses data. Applying it requires explicit acceptance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A deleted model still has rows.
    ModelHasRows { model: String },

    /// A deleted field belongs to a model with rows.
    FieldHasData { model: String, field: String },

    /// A field changes type or cardinality while its model has rows.
    FieldChangeLosesData { model: String, field: String },

    /// A deleted relation still connects records.
    RelationHasPairs { relation: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ModelHasRows { model } => {
                write!(f, "model `{model}` is deleted but still holds records")
            }
            Warning::FieldHasData { model, field } => {
                write!(
                    f,
                    "field `{model}.{field}` is deleted and its values will be lost"
                )
            }
            Warning::FieldChangeLosesData { model, field } => write!(
                f,
                "field `{model}.{field}` changes type or cardinality; existing values may be lost"
            ),
            Warning::RelationHasPairs { relation } => {
                write!(
                    f,
                    "relation `{relation}` is deleted but still connects records"
                )
            }
        }
    }
}
