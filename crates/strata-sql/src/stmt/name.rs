use std::fmt;

/// A possibly qualified SQL object name, e.g. `project.Todo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name(pub Vec<String>);

impl Name {
    /// A table name qualified by the project namespace.
    pub fn qualified(namespace: impl Into<String>, table: impl Into<String>) -> Name {
        Name(vec![namespace.into(), table.into()])
    }

    /// The unqualified object name.
    pub fn table(&self) -> &str {
        self.0.last().map(String::as_str).unwrap_or_default()
    }

    /// The namespace qualifier, if any.
    pub fn namespace(&self) -> Option<&str> {
        match &self.0[..] {
            [.., namespace, _] => Some(namespace.as_str()),
            _ => None,
        }
    }

    /// The same qualifier with a different object name.
    pub fn with_table(&self, table: impl Into<String>) -> Name {
        let mut parts = self.0.clone();
        parts.pop();
        parts.push(table.into());
        Name(parts)
    }
}

impl From<&str> for Name {
    fn from(value: &str) -> Self {
        Self(vec![value.into()])
    }
}

impl From<&String> for Name {
    fn from(value: &String) -> Self {
        Self::from(&value[..])
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = "";
        for ident in &self.0 {
            write!(f, "{s}{ident}")?;
            s = ".";
        }

        Ok(())
    }
}
