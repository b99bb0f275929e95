//! Read-only probes answering the destructive change checker's questions.
//!
//! Each function returns a `SELECT EXISTS(...)` statement over the previous
//! schema's tables, or `None` when the answer is known to be "no" without
//! asking the database.

use crate::{
    naming,
    stmt::{ExistsFilter, Name, Statement, Value},
};

use strata_core::schema::{Field, Model, Relation, RelationSide};

/// Does the model's table hold a row?
pub fn rows(namespace: &str, model: &Model) -> Statement {
    Statement::exists(Name::qualified(namespace, model.table_name()), None)
}

/// Does a row hold `NULL` in the field's column? Fields without a column
/// never hold `NULL`.
pub fn nulls(namespace: &str, model: &Model, field: &Field) -> Option<Statement> {
    field.is_column().then(|| {
        Statement::exists(
            Name::qualified(namespace, model.table_name()),
            Some(ExistsFilter::IsNull(field.column_name().to_string())),
        )
    })
}

/// Do two rows share a value in the field's column?
pub fn duplicates(namespace: &str, model: &Model, field: &Field) -> Option<Statement> {
    (field.is_column() && !field.list).then(|| {
        let columns = vec![field.column_name().to_string()];
        Statement::exists(
            Name::qualified(namespace, model.table_name()),
            Some(ExistsFilter::Duplicates(columns)),
        )
    })
}

/// Does the relation table hold an edge?
pub fn relation_pairs(namespace: &str, relation: &Relation) -> Statement {
    Statement::exists(
        Name::qualified(namespace, naming::relation_table(&relation.name)),
        None,
    )
}

/// Is a record on `side` connected more than once?
pub fn duplicate_relation_pairs(
    namespace: &str,
    relation: &Relation,
    side: RelationSide,
) -> Statement {
    let columns = vec![side.column_name().to_string()];
    Statement::exists(
        Name::qualified(namespace, naming::relation_table(&relation.name)),
        Some(ExistsFilter::Duplicates(columns)),
    )
}

/// Does a row still hold `value` in the enum field? List fields are searched
/// in their side table.
pub fn enum_value(namespace: &str, model: &Model, field: &Field, value: &str) -> Option<Statement> {
    field.ty.as_enum()?;

    let value = Value::String(value.to_string());
    let (table, column) = if field.is_list_table() {
        (
            naming::list_table(model.table_name(), field.column_name()),
            naming::LIST_VALUE.to_string(),
        )
    } else {
        (
            model.table_name().to_string(),
            field.column_name().to_string(),
        )
    };

    Some(Statement::exists(
        Name::qualified(namespace, table),
        Some(ExistsFilter::Equals(column, value)),
    ))
}
