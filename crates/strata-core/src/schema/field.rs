use super::RelationSide;

use std::fmt;

/// A field declared on a model.
///
/// Fields are values: a change between two schemas is expressed by comparing
/// the previous field with the next one, never by mutating a field in place.
/// The builder-style methods below consume `self` and are only meant for
/// constructing a field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Field {
    /// The field name, unique within its model.
    pub name: String,

    /// Column name when it differs from the field name.
    pub storage_name: Option<String>,

    /// True when every record must hold a value.
    pub required: bool,

    /// True when the field holds an ordered list of values.
    pub list: bool,

    /// True when no two records may hold the same value.
    pub unique: bool,

    /// What kind of value the field holds.
    pub ty: FieldTy,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldTy {
    Scalar(ScalarField),
    Enum(EnumField),
    Relation(RelationField),
}

/// Discriminant of [`FieldTy`], used when comparing fields across schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Scalar,
    Enum,
    Relation,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScalarField {
    pub ty: TypeIdentifier,
    pub default: Option<DefaultValue>,
    pub behavior: Option<FieldBehavior>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumField {
    /// Name of the enum providing the values.
    pub name: String,
    pub default: Option<String>,
}

/// One end of a relation. The cascade rule lives on the
/// [`Relation`](super::Relation) itself.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelationField {
    /// The model on the other end of the relation.
    pub target: String,

    /// Name of the relation this field belongs to.
    pub relation: String,

    /// Which side of the relation the declaring model is on.
    pub side: RelationSide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TypeIdentifier {
    String,
    Int,
    Float,
    Boolean,
    DateTime,
    Json,
    Cuid,
    Uuid,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DefaultValue {
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
    DateTime(String),
    Json(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldBehavior {
    /// Marks the identity field.
    Id { strategy: IdStrategy },
    CreatedAt,
    UpdatedAt,
    ScalarList { strategy: ScalarListStrategy },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IdStrategy {
    /// Identifiers are generated when records are created.
    #[default]
    Auto,

    /// The caller supplies identifiers.
    None,
}

/// How the elements of a scalar list are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarListStrategy {
    /// A side table keyed by owner and position.
    #[default]
    Table,

    /// An array column on the model table.
    Embedded,
}

impl Field {
    fn new(name: impl Into<String>, ty: FieldTy) -> Field {
        Field {
            name: name.into(),
            storage_name: None,
            required: false,
            list: false,
            unique: false,
            ty,
        }
    }

    /// An auto-generated `Cuid` identity field.
    pub fn id(name: impl Into<String>) -> Field {
        Field::scalar(name, TypeIdentifier::Cuid)
            .behavior(FieldBehavior::Id {
                strategy: IdStrategy::Auto,
            })
            .required()
            .unique()
    }

    pub fn scalar(name: impl Into<String>, ty: TypeIdentifier) -> Field {
        Field::new(
            name,
            FieldTy::Scalar(ScalarField {
                ty,
                default: None,
                behavior: None,
            }),
        )
    }

    pub fn enum_(name: impl Into<String>, enum_name: impl Into<String>) -> Field {
        Field::new(
            name,
            FieldTy::Enum(EnumField {
                name: enum_name.into(),
                default: None,
            }),
        )
    }

    pub fn relation(
        name: impl Into<String>,
        target: impl Into<String>,
        relation: impl Into<String>,
        side: RelationSide,
    ) -> Field {
        Field::new(
            name,
            FieldTy::Relation(RelationField {
                target: target.into(),
                relation: relation.into(),
                side,
            }),
        )
    }

    pub fn required(mut self) -> Field {
        self.required = true;
        self
    }

    pub fn list(mut self) -> Field {
        self.list = true;
        self
    }

    pub fn unique(mut self) -> Field {
        self.unique = true;
        self
    }

    pub fn storage_name(mut self, storage_name: impl Into<String>) -> Field {
        self.storage_name = Some(storage_name.into());
        self
    }

    /// Sets the default value. Has no effect on relation fields.
    pub fn default(mut self, default: DefaultValue) -> Field {
        match &mut self.ty {
            FieldTy::Scalar(scalar) => scalar.default = Some(default),
            FieldTy::Enum(enum_) => {
                if let DefaultValue::String(value) = default {
                    enum_.default = Some(value);
                }
            }
            FieldTy::Relation(_) => {}
        }
        self
    }

    /// Sets the behavior. Has no effect on non-scalar fields.
    pub fn behavior(mut self, behavior: FieldBehavior) -> Field {
        if let FieldTy::Scalar(scalar) = &mut self.ty {
            scalar.behavior = Some(behavior);
        }
        self
    }

    /// Name of the column backing this field.
    pub fn column_name(&self) -> &str {
        self.storage_name.as_deref().unwrap_or(&self.name)
    }

    pub fn kind(&self) -> FieldKind {
        match self.ty {
            FieldTy::Scalar(_) => FieldKind::Scalar,
            FieldTy::Enum(_) => FieldKind::Enum,
            FieldTy::Relation(_) => FieldKind::Relation,
        }
    }

    /// The type identifier as compared between schemas: the scalar type name,
    /// the enum name, or the related model's name.
    pub fn type_name(&self) -> &str {
        match &self.ty {
            FieldTy::Scalar(scalar) => scalar.ty.as_str(),
            FieldTy::Enum(enum_) => &enum_.name,
            FieldTy::Relation(relation) => &relation.target,
        }
    }

    pub fn is_id(&self) -> bool {
        matches!(
            self.ty.as_scalar(),
            Some(ScalarField {
                behavior: Some(FieldBehavior::Id { .. }),
                ..
            })
        )
    }

    pub fn is_relation(&self) -> bool {
        matches!(self.ty, FieldTy::Relation(_))
    }

    /// True for list-valued scalar and enum fields.
    pub fn is_scalar_list(&self) -> bool {
        self.list && !self.is_relation()
    }

    pub fn scalar_list_strategy(&self) -> ScalarListStrategy {
        match self.ty.as_scalar() {
            Some(ScalarField {
                behavior: Some(FieldBehavior::ScalarList { strategy }),
                ..
            }) => *strategy,
            _ => ScalarListStrategy::Table,
        }
    }

    /// True when the field is stored as a column of its model's table.
    pub fn is_column(&self) -> bool {
        !self.is_relation()
            && (!self.list || self.scalar_list_strategy() == ScalarListStrategy::Embedded)
    }

    /// True when the field's values live in a scalar list side table.
    pub fn is_list_table(&self) -> bool {
        self.is_scalar_list() && self.scalar_list_strategy() == ScalarListStrategy::Table
    }

    /// True when the field has a default that fills existing rows.
    pub fn has_default(&self) -> bool {
        match &self.ty {
            FieldTy::Scalar(scalar) => scalar.default.is_some(),
            FieldTy::Enum(enum_) => enum_.default.is_some(),
            FieldTy::Relation(_) => false,
        }
    }

    /// Compares the attributes that make two correlated fields differ: name,
    /// kind, type identifier, and the required, list, and unique modifiers.
    pub fn has_diff(&self, other: &Field) -> bool {
        self.name != other.name
            || self.kind() != other.kind()
            || self.type_name() != other.type_name()
            || self.required != other.required
            || self.list != other.list
            || self.unique != other.unique
    }
}

impl FieldTy {
    pub fn as_scalar(&self) -> Option<&ScalarField> {
        match self {
            FieldTy::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumField> {
        match self {
            FieldTy::Enum(enum_) => Some(enum_),
            _ => None,
        }
    }

    pub fn as_relation(&self) -> Option<&RelationField> {
        match self {
            FieldTy::Relation(relation) => Some(relation),
            _ => None,
        }
    }
}

impl TypeIdentifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeIdentifier::String => "String",
            TypeIdentifier::Int => "Int",
            TypeIdentifier::Float => "Float",
            TypeIdentifier::Boolean => "Boolean",
            TypeIdentifier::DateTime => "DateTime",
            TypeIdentifier::Json => "Json",
            TypeIdentifier::Cuid => "Cuid",
            TypeIdentifier::Uuid => "Uuid",
        }
    }
}

impl fmt::Display for TypeIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rename_alone_is_a_diff() {
        let previous = Field::scalar("title", TypeIdentifier::String);
        let next = Field::scalar("name", TypeIdentifier::String);
        assert!(previous.has_diff(&next));
    }

    #[test]
    fn default_and_storage_name_are_not_compared() {
        let previous = Field::scalar("title", TypeIdentifier::String);
        let next = Field::scalar("title", TypeIdentifier::String)
            .default(DefaultValue::String("untitled".into()))
            .storage_name("title_col");
        assert!(!previous.has_diff(&next));
    }

    #[test]
    fn kind_change_with_same_type_name_is_a_diff() {
        let previous = Field::scalar("status", TypeIdentifier::String);
        let next = Field::enum_("status", "String");
        assert_eq!(previous.type_name(), next.type_name());
        assert!(previous.has_diff(&next));
    }

    #[test]
    fn relation_type_name_is_target_model() {
        let field = Field::relation("comments", "Comment", "CommentToTodo", RelationSide::B).list();
        assert_eq!(field.type_name(), "Comment");
        assert!(!field.is_scalar_list());
    }

    #[test]
    fn id_field() {
        let id = Field::id("id");
        assert!(id.is_id());
        assert!(id.required);
        assert!(id.unique);
        assert_eq!(id.type_name(), "Cuid");
    }

    #[test]
    fn enum_default_only_accepts_strings() {
        let field = Field::enum_("color", "Color").default(DefaultValue::Int(1));
        assert!(!field.has_default());

        let field = Field::enum_("color", "Color").default(DefaultValue::String("RED".into()));
        assert!(field.has_default());
    }
}
