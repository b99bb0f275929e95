use super::{Name, Statement};

/// A statement to drop an index.
#[derive(Debug, Clone, PartialEq)]
pub struct DropIndex {
    /// Name of the index.
    pub name: String,

    /// The indexed table. MySQL addresses indexes through their table; the
    /// other databases only use its namespace.
    pub on: Name,
}

impl Statement {
    pub fn drop_index(name: impl Into<String>, on: Name) -> Self {
        DropIndex {
            name: name.into(),
            on,
        }
        .into()
    }
}

impl From<DropIndex> for Statement {
    fn from(value: DropIndex) -> Self {
        Self::DropIndex(value)
    }
}
