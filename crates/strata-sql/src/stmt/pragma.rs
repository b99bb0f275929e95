use super::Statement;

/// A SQLite PRAGMA statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Pragma {
    /// Database the pragma applies to, when not the main one.
    pub namespace: Option<String>,

    /// The pragma name (e.g. "foreign_keys").
    pub name: String,

    /// The value to set, if any. When `None`, this is a query pragma.
    pub value: Option<String>,
}

impl Statement {
    /// Sets `PRAGMA foreign_keys = ON`.
    pub fn pragma_enable_foreign_keys() -> Self {
        Pragma {
            namespace: None,
            name: "foreign_keys".to_string(),
            value: Some("ON".to_string()),
        }
        .into()
    }

    /// Sets `PRAGMA foreign_keys = OFF`.
    pub fn pragma_disable_foreign_keys() -> Self {
        Pragma {
            namespace: None,
            name: "foreign_keys".to_string(),
            value: Some("OFF".to_string()),
        }
        .into()
    }

    /// Checks the foreign keys of every table in `namespace`.
    pub fn pragma_foreign_key_check(namespace: impl Into<String>) -> Self {
        Pragma {
            namespace: Some(namespace.into()),
            name: "foreign_key_check".to_string(),
            value: None,
        }
        .into()
    }
}

impl From<Pragma> for Statement {
    fn from(value: Pragma) -> Self {
        Self::Pragma(value)
    }
}
