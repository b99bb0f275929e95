use crate::schema::{db, TypeIdentifier};

/// Structural features supported by a target database.
///
/// Both the steps inferrer and the mutation builder consult the capability
/// set instead of assuming every backend behaves the same.
#[derive(Debug)]
pub struct Capability {
    /// Column storage types used by the database.
    pub storage_types: StorageTypes,

    /// Which in-place schema changes the database can perform.
    pub schema_mutations: SchemaMutations,

    /// Longest identifier the database accepts. `None` when unlimited.
    pub max_identifier_length: Option<usize>,

    /// When true, scalar lists may be stored as array columns on the model
    /// table.
    pub embedded_scalar_lists: bool,
}

#[derive(Debug)]
pub struct SchemaMutations {
    /// Whether the database can change a column's type in place.
    pub alter_column_type: bool,

    /// Whether the database can add or drop `NOT NULL` on an existing column.
    pub alter_column_nullability: bool,

    /// Whether the database can rename an index in place.
    pub rename_index: bool,

    /// Whether foreign keys can be added to an existing table with
    /// `ALTER TABLE ... ADD CONSTRAINT`.
    pub add_constraint: bool,
}

#[derive(Debug)]
pub struct StorageTypes {
    /// The default storage type for a string.
    pub default_string_type: db::Type,

    pub int_type: db::Type,

    pub float_type: db::Type,

    pub boolean_type: db::Type,

    pub date_time_type: db::Type,

    pub json_type: db::Type,

    /// Storage for generated CUID identifiers.
    pub cuid_type: db::Type,

    pub uuid_type: db::Type,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        storage_types: StorageTypes::SQLITE,
        schema_mutations: SchemaMutations {
            alter_column_type: false,
            alter_column_nullability: false,
            rename_index: false,
            add_constraint: false,
        },
        max_identifier_length: None,
        embedded_scalar_lists: false,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        storage_types: StorageTypes::POSTGRESQL,
        schema_mutations: SchemaMutations {
            alter_column_type: true,
            alter_column_nullability: true,
            rename_index: true,
            add_constraint: true,
        },
        max_identifier_length: Some(63),
        embedded_scalar_lists: true,
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        storage_types: StorageTypes::MYSQL,
        schema_mutations: SchemaMutations {
            alter_column_type: true,
            alter_column_nullability: true,
            // `ALTER TABLE ... RENAME INDEX` exists since MySQL 5.7.
            rename_index: true,
            add_constraint: true,
        },
        max_identifier_length: Some(64),
        embedded_scalar_lists: false,
    };

    /// Returns true when `identifier` fits the database's length limit.
    pub fn fits_identifier(&self, identifier: &str) -> bool {
        self.max_identifier_length
            .map_or(true, |max| identifier.len() <= max)
    }
}

impl StorageTypes {
    /// SQLite storage types
    pub const SQLITE: StorageTypes = StorageTypes {
        default_string_type: db::Type::Text,
        int_type: db::Type::Integer(8),
        float_type: db::Type::Double,
        boolean_type: db::Type::Boolean,
        // SQLite has no date type; ISO-8601 text sorts correctly.
        date_time_type: db::Type::Text,
        json_type: db::Type::Text,
        cuid_type: db::Type::Text,
        uuid_type: db::Type::Text,
    };

    pub const POSTGRESQL: StorageTypes = StorageTypes {
        default_string_type: db::Type::Text,
        int_type: db::Type::Integer(4),
        float_type: db::Type::Decimal(65, 30),
        boolean_type: db::Type::Boolean,
        date_time_type: db::Type::Timestamp(3),
        json_type: db::Type::Jsonb,
        cuid_type: db::Type::VarChar(25),
        uuid_type: db::Type::Uuid,
    };

    pub const MYSQL: StorageTypes = StorageTypes {
        // Unique indexes on utf8mb4 columns are limited to 767 bytes.
        default_string_type: db::Type::VarChar(191),
        int_type: db::Type::Integer(4),
        float_type: db::Type::Decimal(65, 30),
        boolean_type: db::Type::Boolean,
        date_time_type: db::Type::DateTime(3),
        json_type: db::Type::Json,
        cuid_type: db::Type::Char(25),
        uuid_type: db::Type::Char(36),
    };

    /// The column type used for values of `ty`.
    pub fn column_type(&self, ty: TypeIdentifier) -> db::Type {
        match ty {
            TypeIdentifier::String => self.default_string_type,
            TypeIdentifier::Int => self.int_type,
            TypeIdentifier::Float => self.float_type,
            TypeIdentifier::Boolean => self.boolean_type,
            TypeIdentifier::DateTime => self.date_time_type,
            TypeIdentifier::Json => self.json_type,
            TypeIdentifier::Cuid => self.cuid_type,
            TypeIdentifier::Uuid => self.uuid_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_limits() {
        let long = "x".repeat(64);
        assert!(!Capability::POSTGRESQL.fits_identifier(&long));
        assert!(Capability::MYSQL.fits_identifier(&long));
        assert!(Capability::SQLITE.fits_identifier(&"x".repeat(1000)));
    }

    #[test]
    fn mysql_strings_are_indexable() {
        assert_eq!(
            Capability::MYSQL.storage_types.column_type(TypeIdentifier::String),
            db::Type::VarChar(191)
        );
    }
}
