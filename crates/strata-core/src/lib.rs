#[macro_use]
mod macros;

pub mod driver;
pub use driver::{Capability, DataQueries};

mod error;
pub use error::{Error, IntoError};

pub mod migration;
pub use migration::{MigrationStep, MigrationStepsInferrer};

pub mod schema;
pub use schema::Schema;

/// A Result type alias that uses Strata's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
