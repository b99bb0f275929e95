use super::{Formatter, ToSql};

use crate::stmt::Value;

impl ToSql for &Value {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Value::String(value) => {
                let mysql = f.serializer.is_mysql();

                f.dst.push('\'');
                for c in value.chars() {
                    match c {
                        '\'' => f.dst.push_str("''"),
                        // MySQL treats backslashes in string literals as escapes.
                        '\\' if mysql => f.dst.push_str("\\\\"),
                        c => f.dst.push(c),
                    }
                }
                f.dst.push('\'');
            }
            Value::Int(value) => f.dst.push_str(&value.to_string()),
            Value::Float(value) => f.dst.push_str(&value.to_string()),
            Value::Boolean(true) => f.dst.push_str("TRUE"),
            Value::Boolean(false) => f.dst.push_str("FALSE"),
        }
    }
}
