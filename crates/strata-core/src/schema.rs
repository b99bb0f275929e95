mod builder;
pub use builder::Builder;

pub mod db;

mod diff;
pub use diff::DiffContext;

mod enum_def;
pub use enum_def::Enum;

mod field;
pub use field::{
    DefaultValue, EnumField, Field, FieldBehavior, FieldKind, FieldTy, IdStrategy, RelationField,
    ScalarField, ScalarListStrategy, TypeIdentifier,
};

mod index;
pub use index::Index;

mod model;
pub use model::Model;

mod relation;
pub use relation::{OnDelete, Relation, RelationSide};

mod rename;
pub use rename::{FieldPath, RenameMapping};

mod verify;

/// A tenant's complete data shape at one point in time.
///
/// Schemas are built through [`Schema::builder`], which verifies that names are
/// unique and that every relation and enum reference resolves.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schema {
    pub models: Vec<Model>,
    pub relations: Vec<Relation>,
    pub enums: Vec<Enum>,
}

impl Schema {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|model| model.name == name)
    }

    pub fn relation(&self, name: &str) -> Option<&Relation> {
        self.relations.iter().find(|relation| relation.name == name)
    }

    pub fn enum_(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|enum_| enum_.name == name)
    }

    /// Returns the field sitting on `side` of `relation`, together with the
    /// model declaring it. Back-relation fields are optional, so either side
    /// may be missing.
    pub fn relation_field(
        &self,
        relation: &Relation,
        side: RelationSide,
    ) -> Option<(&Model, &Field)> {
        let model = self.model(relation.model(side))?;
        let field = model.fields.iter().find(|field| match field.ty.as_relation() {
            Some(rel) => rel.relation == relation.name && rel.side == side,
            None => false,
        })?;
        Some((model, field))
    }

    /// Iterates every field, across all models, whose values are drawn from
    /// the named enum.
    pub fn fields_using_enum<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (&'a Model, &'a Field)> + 'a {
        self.models.iter().flat_map(move |model| {
            model
                .fields
                .iter()
                .filter(move |field| matches!(field.ty.as_enum(), Some(e) if e.name == name))
                .map(move |field| (model, field))
        })
    }
}
