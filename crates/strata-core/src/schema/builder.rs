use super::{Enum, Model, Relation, Schema};

use crate::Result;

/// Assembles a [`Schema`] and verifies it on [`build`](Builder::build).
#[derive(Debug, Default)]
pub struct Builder {
    schema: Schema,
}

impl Builder {
    pub fn model(mut self, model: Model) -> Builder {
        self.schema.models.push(model);
        self
    }

    pub fn relation(mut self, relation: Relation) -> Builder {
        self.schema.relations.push(relation);
        self
    }

    pub fn enum_(mut self, enum_: Enum) -> Builder {
        self.schema.enums.push(enum_);
        self
    }

    pub fn build(self) -> Result<Schema> {
        self.schema.verify()?;
        Ok(self.schema)
    }
}
