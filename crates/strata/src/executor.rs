use strata_core::{async_trait, Result};
use strata_sql::Migration;

/// Applies a serialized migration to the database.
///
/// The migration is one unit: implementations run every statement or report
/// [`Error::execution_failed`](strata_core::Error::execution_failed).
/// Statements can be recovered with [`Migration::statements_split_by`] using
/// the marker the migrator was configured with.
#[async_trait]
pub trait SchemaExecutor: Send + Sync {
    async fn apply_migration(&self, migration: &Migration) -> Result<()>;
}
