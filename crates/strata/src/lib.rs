mod checker;
pub use checker::{DestructiveChangeChecker, Verdict, Violation, Warning};

mod data_queries;
pub use data_queries::{QueryRunner, SqlDataQueries};

mod executor;
pub use executor::SchemaExecutor;

mod migrator;
pub use migrator::{Migrator, MigratorConfig, Plan};

pub use strata_core::{
    driver::{Capability, DataQueries},
    migration::MigrationStep,
    schema::{RenameMapping, Schema},
    Error, Result,
};
pub use strata_sql::{Migration, Serializer};
