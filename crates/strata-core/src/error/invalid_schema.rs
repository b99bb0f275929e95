use super::Error;

/// Error when a schema definition is invalid.
///
/// This occurs when:
/// - Two models, enums, or relations share a name
/// - A model declares no identity field, or more than one
/// - A relation or enum field points at something the schema does not define
/// - An index references a field its model does not have
///
/// These errors are raised while a [`Schema`](crate::Schema) is built, before
/// any diffing takes place.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidSchema(_))
    }
}
