use std::fmt;

/// A connection between two models, stored in its own relation table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relation {
    /// Unique within a schema.
    pub name: String,

    pub model_a: String,
    pub model_b: String,

    /// What happens to the other side when a record of `model_a` is deleted.
    pub on_delete_a: OnDelete,

    /// What happens to the other side when a record of `model_b` is deleted.
    pub on_delete_b: OnDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RelationSide {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OnDelete {
    #[default]
    SetNull,
    Cascade,
}

impl Relation {
    pub fn new(
        name: impl Into<String>,
        model_a: impl Into<String>,
        model_b: impl Into<String>,
    ) -> Relation {
        Relation {
            name: name.into(),
            model_a: model_a.into(),
            model_b: model_b.into(),
            on_delete_a: OnDelete::SetNull,
            on_delete_b: OnDelete::SetNull,
        }
    }

    pub fn on_delete(mut self, side: RelationSide, on_delete: OnDelete) -> Relation {
        match side {
            RelationSide::A => self.on_delete_a = on_delete,
            RelationSide::B => self.on_delete_b = on_delete,
        }
        self
    }

    pub fn model(&self, side: RelationSide) -> &str {
        match side {
            RelationSide::A => &self.model_a,
            RelationSide::B => &self.model_b,
        }
    }

    pub fn is_self_relation(&self) -> bool {
        self.model_a == self.model_b
    }
}

impl RelationSide {
    pub const ALL: [RelationSide; 2] = [RelationSide::A, RelationSide::B];

    pub fn opposite(self) -> RelationSide {
        match self {
            RelationSide::A => RelationSide::B,
            RelationSide::B => RelationSide::A,
        }
    }

    /// Column name holding this side's record id in the relation table.
    pub fn column_name(self) -> &'static str {
        match self {
            RelationSide::A => "A",
            RelationSide::B => "B",
        }
    }
}

impl fmt::Display for RelationSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
