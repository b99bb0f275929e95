use crate::{
    async_trait,
    schema::{Field, Model, Relation, RelationSide},
    Result,
};

/// Read-only questions about the rows currently stored for a project.
///
/// The destructive change checker asks these before a migration is applied,
/// so every argument refers to the previous schema. Implementations must not
/// mutate data.
#[async_trait]
pub trait DataQueries: Send + Sync {
    /// Does the model's table hold at least one row?
    async fn exists_rows(&self, model: &Model) -> Result<bool>;

    /// Does any row hold `NULL` in the field?
    async fn exists_null(&self, model: &Model, field: &Field) -> Result<bool>;

    /// Do two rows hold the same value in the field?
    async fn exists_duplicates(&self, model: &Model, field: &Field) -> Result<bool>;

    /// Does the relation connect at least one pair of records?
    async fn exists_relation_pairs(&self, relation: &Relation) -> Result<bool>;

    /// Is a record on `side` connected to more than one record of the other
    /// side?
    async fn exists_duplicate_relation_pairs(
        &self,
        relation: &Relation,
        side: RelationSide,
    ) -> Result<bool>;

    /// Does any row still hold `value` in the enum field?
    async fn exists_enum_value(&self, model: &Model, field: &Field, value: &str) -> Result<bool>;
}
