use super::{Field, Index};

/// A named record type, stored in its own table unless embedded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Model {
    /// Unique within a schema.
    pub name: String,

    /// Table name when it differs from the model name.
    pub storage_name: Option<String>,

    pub fields: Vec<Field>,

    pub indexes: Vec<Index>,

    /// Embedded models are stored inside their parent and have no identity
    /// field or table of their own.
    pub is_embedded: bool,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Model {
        Model {
            name: name.into(),
            storage_name: None,
            fields: vec![],
            indexes: vec![],
            is_embedded: false,
        }
    }

    pub fn field(mut self, field: Field) -> Model {
        self.fields.push(field);
        self
    }

    pub fn index(mut self, index: Index) -> Model {
        self.indexes.push(index);
        self
    }

    pub fn storage_name(mut self, storage_name: impl Into<String>) -> Model {
        self.storage_name = Some(storage_name.into());
        self
    }

    pub fn embedded(mut self) -> Model {
        self.is_embedded = true;
        self
    }

    /// Name of the table backing this model.
    pub fn table_name(&self) -> &str {
        self.storage_name.as_deref().unwrap_or(&self.name)
    }

    pub fn field_by_name(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn index_by_name(&self, name: &str) -> Option<&Index> {
        self.indexes.iter().find(|index| index.name == name)
    }

    pub fn id_field(&self) -> Option<&Field> {
        self.fields.iter().find(|field| field.is_id())
    }

    /// Fields stored as columns of the model table: single-valued scalars and
    /// enums, plus lists using the embedded strategy.
    pub fn column_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_column())
    }

    /// List fields stored in a side table.
    pub fn list_table_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_list_table())
    }

    pub fn relation_fields(&self) -> impl Iterator<Item = &Field> + '_ {
        self.fields.iter().filter(|field| field.is_relation())
    }
}
