mod config;
pub use config::MigratorConfig;

mod plan;
pub use plan::Plan;

use crate::{DestructiveChangeChecker, SchemaExecutor, Verdict};

use strata_core::{
    schema::{DiffContext, RenameMapping, Schema},
    Capability, DataQueries, Error, MigrationStepsInferrer, Result,
};
use strata_sql::{Migration, MutationBuilder, Serializer};

/// Drives a migration from two schema snapshots to applied DDL.
///
/// Planning is pure. Checking and applying talk to the database through the
/// [`DataQueries`] and [`SchemaExecutor`] seams.
#[derive(Debug)]
pub struct Migrator<'a> {
    config: MigratorConfig,
    capability: &'a Capability,
    serializer: Serializer,
}

impl<'a> Migrator<'a> {
    pub fn new(config: MigratorConfig, capability: &'a Capability, serializer: Serializer) -> Self {
        Self {
            config,
            capability,
            serializer,
        }
    }

    pub fn config(&self) -> &MigratorConfig {
        &self.config
    }

    /// Infers the steps turning `previous` into `next` and lowers them to
    /// serialized DDL.
    pub fn plan<'s>(
        &self,
        previous: &'s Schema,
        next: &'s Schema,
        mapping: &'s RenameMapping,
    ) -> Result<Plan<'s>> {
        let steps = MigrationStepsInferrer::new(self.capability).evaluate(previous, next, mapping)?;
        for step in &steps {
            tracing::debug!(%step, "inferred step");
        }

        let cx = DiffContext::new(previous, next, mapping);
        let statements =
            MutationBuilder::new(self.config.namespace(), self.capability, &cx)?.build(&steps)?;
        let sql = self.serializer.serialize_all(&statements)?;

        tracing::info!(
            namespace = self.config.namespace(),
            steps = steps.len(),
            statements = sql.len(),
            "planned migration"
        );

        Ok(Plan {
            cx,
            steps,
            statements,
            sql,
        })
    }

    /// Checks the plan's steps against the data currently stored.
    pub async fn check(&self, plan: &Plan<'_>, queries: &dyn DataQueries) -> Result<Verdict> {
        DestructiveChangeChecker::new(queries, &plan.cx)
            .check(&plan.steps)
            .await
    }

    /// Hands the plan's DDL to `executor` as one migration.
    ///
    /// Refuses when the verdict carries errors, or when it carries warnings
    /// that neither `accept_warnings` nor the configuration accepts.
    pub async fn apply(
        &self,
        plan: &Plan<'_>,
        verdict: &Verdict,
        executor: &dyn SchemaExecutor,
        accept_warnings: bool,
    ) -> Result<()> {
        let errors = verdict.errors();
        if !errors.is_empty() {
            for violation in errors {
                tracing::error!(%violation, "destructive change");
            }
            return Err(Error::destructive_changes(errors.len()));
        }

        let warnings = verdict.warnings();
        if !warnings.is_empty() {
            if !accept_warnings && !self.config.accepts_warnings() {
                return Err(Error::unaccepted_warnings(warnings.len()));
            }
            for warning in warnings {
                tracing::warn!(%warning, "applying destructive change");
            }
        }

        if plan.sql.is_empty() {
            tracing::info!(namespace = self.config.namespace(), "nothing to apply");
            return Ok(());
        }

        let migration = Migration::new_sql_with_marker(&plan.sql, self.config.breakpoint_marker());
        tracing::info!(
            namespace = self.config.namespace(),
            statements = plan.sql.len(),
            "applying migration"
        );
        executor.apply_migration(&migration).await
    }

    /// Plans, checks and applies in one go, accepting warnings only when the
    /// configuration does. Returns the verdict the migration was applied
    /// under.
    pub async fn run(
        &self,
        previous: &Schema,
        next: &Schema,
        mapping: &RenameMapping,
        queries: &dyn DataQueries,
        executor: &dyn SchemaExecutor,
    ) -> Result<Verdict> {
        let plan = self.plan(previous, next, mapping)?;
        let verdict = self.check(&plan, queries).await?;
        self.apply(&plan, &verdict, executor, false).await?;
        Ok(verdict)
    }
}
