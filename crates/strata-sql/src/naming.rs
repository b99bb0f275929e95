//! Names of the tables, columns and indexes backing a schema.

use strata_core::schema::RelationSide;

/// Columns of a scalar list table.
pub const LIST_NODE_ID: &str = "nodeId";
pub const LIST_POSITION: &str = "position";
pub const LIST_VALUE: &str = "value";

/// Identity column of a relation table.
pub const RELATION_ID: &str = "id";

/// `{table}_{column}`
pub fn list_table(table: &str, column: &str) -> String {
    format!("{table}_{column}")
}

/// `_{relation}`
pub fn relation_table(relation: &str) -> String {
    format!("_{relation}")
}

/// `{table}.{column}._UNIQUE`
pub fn unique_index(table: &str, column: &str) -> String {
    format!("{table}.{column}._UNIQUE")
}

/// Unique index over both foreign keys of a relation table.
pub fn relation_pair_index(table: &str) -> String {
    format!("{table}_AB_unique")
}

/// Lookup index over one foreign key of a relation table.
pub fn relation_side_index(table: &str, side: RelationSide) -> String {
    format!("{table}_{}_index", side.column_name())
}

pub fn relation_foreign_key(table: &str, side: RelationSide) -> String {
    format!("{table}_{}_fkey", side.column_name())
}

/// Table used while rebuilding `table`.
pub fn rebuild_table(table: &str) -> String {
    format!("new_{table}")
}
