use super::{Name, Statement};

#[derive(Debug, Clone, PartialEq)]
pub struct RenameIndex {
    /// The indexed table.
    pub on: Name,
    pub from: String,
    pub to: String,
}

impl Statement {
    pub fn rename_index(on: Name, from: impl Into<String>, to: impl Into<String>) -> Self {
        RenameIndex {
            on,
            from: from.into(),
            to: to.into(),
        }
        .into()
    }
}

impl From<RenameIndex> for Statement {
    fn from(value: RenameIndex) -> Self {
        Self::RenameIndex(value)
    }
}
