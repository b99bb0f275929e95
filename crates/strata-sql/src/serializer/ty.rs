use super::{Flavor, Formatter, ToSql};

use strata_core::schema::db;

impl ToSql for db::Type {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let flavor = f.serializer.flavor;
        let sql = match (self, flavor) {
            (db::Type::Boolean, _) => "BOOLEAN".to_string(),
            (db::Type::Integer(_), Flavor::Sqlite) => "INTEGER".to_string(),
            (db::Type::Integer(1 | 2), Flavor::Postgresql) => "SMALLINT".to_string(),
            (db::Type::Integer(3 | 4), Flavor::Postgresql) => "INTEGER".to_string(),
            (db::Type::Integer(_), Flavor::Postgresql) => "BIGINT".to_string(),
            (db::Type::Integer(1), Flavor::Mysql) => "TINYINT".to_string(),
            (db::Type::Integer(2), Flavor::Mysql) => "SMALLINT".to_string(),
            (db::Type::Integer(3 | 4), Flavor::Mysql) => "INT".to_string(),
            (db::Type::Integer(_), Flavor::Mysql) => "BIGINT".to_string(),
            (db::Type::Double, Flavor::Sqlite) => "REAL".to_string(),
            (db::Type::Double, Flavor::Postgresql) => "DOUBLE PRECISION".to_string(),
            (db::Type::Double, Flavor::Mysql) => "DOUBLE".to_string(),
            (db::Type::Decimal(precision, scale), _) => format!("DECIMAL({precision}, {scale})"),
            (db::Type::Text, _) => "TEXT".to_string(),
            (db::Type::VarChar(len), _) => format!("VARCHAR({len})"),
            (db::Type::Char(len), _) => format!("CHAR({len})"),
            (db::Type::Uuid, Flavor::Postgresql) => "UUID".to_string(),
            (db::Type::Uuid, Flavor::Mysql) => "CHAR(36)".to_string(),
            (db::Type::Json | db::Type::Jsonb, Flavor::Mysql) => "JSON".to_string(),
            (db::Type::Json, Flavor::Postgresql) => "JSON".to_string(),
            (db::Type::Jsonb, Flavor::Postgresql) => "JSONB".to_string(),
            (db::Type::Timestamp(precision), Flavor::Postgresql | Flavor::Mysql) => {
                format!("TIMESTAMP({precision})")
            }
            (db::Type::DateTime(precision), Flavor::Mysql) => format!("DATETIME({precision})"),
            (db::Type::DateTime(precision), Flavor::Postgresql) => {
                format!("TIMESTAMP({precision})")
            }
            // SQLite stores these as text.
            (
                db::Type::Uuid
                | db::Type::Json
                | db::Type::Jsonb
                | db::Type::Timestamp(_)
                | db::Type::DateTime(_),
                Flavor::Sqlite,
            ) => "TEXT".to_string(),
        };

        fmt!(f, sql.as_str());
    }
}
