mod plan;
pub use plan::PlanCommand;

mod sql;
pub use sql::SqlCommand;

use crate::{Config, Flavor, SchemaFile};

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use strata::{Migrator, MigratorConfig, Plan};
use strata_core::Schema;

/// Inputs shared by every command that compares two schema files.
#[derive(Args, Debug)]
pub struct MigrationArgs {
    /// Schema file the database currently matches. Omit for an empty database
    #[arg(long)]
    from: Option<PathBuf>,

    /// Schema file to migrate to. Its renames correlate it with `--from`
    to: PathBuf,

    /// Target database flavor
    #[arg(long, value_enum)]
    flavor: Option<Flavor>,

    /// Namespace holding the project's tables
    #[arg(long)]
    namespace: Option<String>,
}

/// Both schema files, loaded.
pub(crate) struct Loaded {
    previous: Schema,
    next: SchemaFile,
}

impl MigrationArgs {
    pub(crate) fn flavor(&self, config: &Config) -> Flavor {
        self.flavor.unwrap_or(config.flavor)
    }

    pub(crate) fn load(&self) -> Result<Loaded> {
        let previous = match &self.from {
            Some(path) => SchemaFile::load(path)?.schema,
            None => Schema::default(),
        };
        let next = SchemaFile::load(&self.to)?;
        Ok(Loaded { previous, next })
    }

    pub(crate) fn migrator(&self, config: &Config) -> Migrator<'static> {
        let flavor = self.flavor(config);
        let namespace = self.namespace.as_deref().unwrap_or(&config.namespace);
        Migrator::new(
            MigratorConfig::new(namespace),
            flavor.capability(),
            flavor.serializer(),
        )
    }
}

impl Loaded {
    pub(crate) fn plan<'s>(&'s self, migrator: &Migrator<'_>) -> Result<Plan<'s>> {
        Ok(migrator.plan(&self.previous, &self.next.schema, &self.next.renames)?)
    }
}
