/// A named index over fields of one model.
///
/// The name is the index's identity when diffing; the field list and the
/// uniqueness flag are its content.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Index {
    pub name: String,

    /// Indexed field names, in index order.
    pub fields: Vec<String>,

    pub unique: bool,
}

impl Index {
    pub fn new<I, S>(name: impl Into<String>, fields: I) -> Index
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Index {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            unique: false,
        }
    }

    pub fn unique(mut self) -> Index {
        self.unique = true;
        self
    }
}
