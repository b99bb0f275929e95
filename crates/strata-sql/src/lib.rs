pub mod builder;
pub use builder::MutationBuilder;

pub mod migration;
pub use migration::Migration;

mod naming;

pub mod probe;

pub mod serializer;
pub use serializer::Serializer;

pub mod stmt;
pub use stmt::Statement;
