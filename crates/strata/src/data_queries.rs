use strata_core::{
    async_trait,
    schema::{Field, Model, Relation, RelationSide},
    DataQueries, Result,
};
use strata_sql::{probe, Serializer, Statement};

/// Runs a read-only `SELECT EXISTS(...)` query and reports its single
/// boolean.
///
/// Implementations report driver failures with
/// [`Error::data_query_failed`](strata_core::Error::data_query_failed).
#[async_trait]
pub trait QueryRunner: Send + Sync {
    async fn query_exists(&self, sql: &str) -> Result<bool>;
}

/// Answers [`DataQueries`] by issuing SQL probes through a [`QueryRunner`].
#[derive(Debug)]
pub struct SqlDataQueries<R> {
    namespace: String,
    serializer: Serializer,
    runner: R,
}

impl<R: QueryRunner> SqlDataQueries<R> {
    pub fn new(namespace: impl Into<String>, serializer: Serializer, runner: R) -> Self {
        Self {
            namespace: namespace.into(),
            serializer,
            runner,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    async fn exists(&self, stmt: Option<Statement>) -> Result<bool> {
        let Some(stmt) = stmt else {
            return Ok(false);
        };

        let sql = self.serializer.serialize(&stmt)?;
        tracing::debug!(namespace = %self.namespace, %sql, "probing data");
        self.runner.query_exists(&sql).await
    }
}

#[async_trait]
impl<R: QueryRunner> DataQueries for SqlDataQueries<R> {
    async fn exists_rows(&self, model: &Model) -> Result<bool> {
        self.exists(Some(probe::rows(&self.namespace, model))).await
    }

    async fn exists_null(&self, model: &Model, field: &Field) -> Result<bool> {
        self.exists(probe::nulls(&self.namespace, model, field)).await
    }

    async fn exists_duplicates(&self, model: &Model, field: &Field) -> Result<bool> {
        self.exists(probe::duplicates(&self.namespace, model, field)).await
    }

    async fn exists_relation_pairs(&self, relation: &Relation) -> Result<bool> {
        self.exists(Some(probe::relation_pairs(&self.namespace, relation))).await
    }

    async fn exists_duplicate_relation_pairs(
        &self,
        relation: &Relation,
        side: RelationSide,
    ) -> Result<bool> {
        self.exists(Some(probe::duplicate_relation_pairs(
            &self.namespace,
            relation,
            side,
        )))
        .await
    }

    async fn exists_enum_value(&self, model: &Model, field: &Field, value: &str) -> Result<bool> {
        self.exists(probe::enum_value(&self.namespace, model, field, value)).await
    }
}
