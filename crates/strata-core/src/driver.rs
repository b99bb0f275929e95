mod capability;
pub use capability::{Capability, SchemaMutations, StorageTypes};

mod data_queries;
pub use data_queries::DataQueries;
