//! Physical column types chosen for the backend.

/// A database column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Boolean,

    /// A signed integer of `n` bytes.
    Integer(u8),

    /// A double precision float.
    Double,

    /// A decimal number with the given precision and scale.
    Decimal(u8, u8),

    /// Unconstrained text.
    Text,

    /// Text with a maximum length.
    VarChar(u64),

    /// Fixed length text.
    Char(u64),

    /// A native UUID column.
    Uuid,

    /// A JSON document stored as text by the database.
    Json,

    /// A JSON document in a binary representation.
    Jsonb,

    /// A timestamp with fractional seconds precision.
    Timestamp(u8),

    /// MySQL's `DATETIME` with fractional seconds precision.
    DateTime(u8),
}
