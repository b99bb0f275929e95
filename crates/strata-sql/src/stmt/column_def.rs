use strata_core::{
    driver::Capability,
    schema::{db, DefaultValue, Field, FieldTy},
    Error, Result,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub ty: db::Type,

    /// True when the column rejects `NULL`.
    pub not_null: bool,

    /// Value filled into existing and new rows when none is given.
    pub default: Option<Value>,

    /// True for array columns holding an embedded scalar list.
    pub array: bool,
}

/// A literal value in a column definition or probe.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, ty: db::Type) -> ColumnDef {
        ColumnDef {
            name: name.into(),
            ty,
            not_null: false,
            default: None,
            array: false,
        }
    }

    pub fn not_null(mut self) -> ColumnDef {
        self.not_null = true;
        self
    }

    /// The column backing `field`, named `name`.
    ///
    /// Fails for relation fields, which own no column, and for embedded lists
    /// on databases without array columns.
    pub(crate) fn from_field(
        field: &Field,
        name: &str,
        capability: &Capability,
    ) -> Result<ColumnDef> {
        let ty = ColumnDef::element_type(field, capability)?;
        let default = match &field.ty {
            FieldTy::Scalar(scalar) => scalar.default.as_ref().map(Value::from),
            FieldTy::Enum(enum_) => enum_.default.clone().map(Value::String),
            FieldTy::Relation(_) => None,
        };

        let array = field.list;
        if array && !capability.embedded_scalar_lists {
            return Err(Error::unsupported_feature(format!(
                "list field `{}` cannot be embedded as an array column",
                field.name
            )));
        }

        Ok(ColumnDef {
            name: name.to_string(),
            ty,
            not_null: field.required,
            default,
            array,
        })
    }

    /// The type of one value of `field`. Enum values are stored as strings.
    pub(crate) fn element_type(field: &Field, capability: &Capability) -> Result<db::Type> {
        let storage_types = &capability.storage_types;
        match &field.ty {
            FieldTy::Scalar(scalar) => Ok(storage_types.column_type(scalar.ty)),
            FieldTy::Enum(_) => Ok(storage_types.default_string_type),
            FieldTy::Relation(_) => Err(Error::unsupported_feature(format!(
                "relation field `{}` has no column",
                field.name
            ))),
        }
    }
}

impl From<&DefaultValue> for Value {
    fn from(value: &DefaultValue) -> Self {
        match value {
            DefaultValue::String(value)
            | DefaultValue::DateTime(value)
            | DefaultValue::Json(value) => Value::String(value.clone()),
            DefaultValue::Int(value) => Value::Int(*value),
            DefaultValue::Float(value) => Value::Float(*value),
            DefaultValue::Boolean(value) => Value::Boolean(*value),
        }
    }
}
