use super::ColumnDef;

/// A single column property change.
///
/// Properties are always changed one at a time; several changes to one
/// column become several statements.
#[derive(Debug, Clone, PartialEq)]
pub struct AlterColumn {
    /// Column definition after the change.
    pub column: ColumnDef,

    /// Which property changes.
    pub change: ColumnChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnChange {
    /// Convert the column to `column.ty`.
    Type,
    SetNotNull,
    DropNotNull,
}

impl ColumnChange {
    /// The nullability change leading to `not_null`.
    pub fn nullability(not_null: bool) -> ColumnChange {
        if not_null {
            ColumnChange::SetNotNull
        } else {
            ColumnChange::DropNotNull
        }
    }
}
