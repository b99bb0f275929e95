use super::Error;

/// Error when a computed database identifier cannot be used by the backend.
///
/// Table, column, and index names are derived from model and field names. A
/// derived name that is empty, exceeds the backend's length limit, or contains
/// characters the backend cannot quote is rejected before any DDL is emitted.
#[derive(Debug)]
pub(super) struct InvalidIdentifier {
    identifier: Box<str>,
    reason: Box<str>,
}

impl std::error::Error for InvalidIdentifier {}

impl core::fmt::Display for InvalidIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "invalid identifier `{}`: {}",
            self.identifier, self.reason
        )
    }
}

impl Error {
    /// Creates an invalid identifier error.
    pub fn invalid_identifier(identifier: impl Into<String>, reason: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidIdentifier(InvalidIdentifier {
            identifier: identifier.into().into(),
            reason: reason.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid identifier error.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidIdentifier(_))
    }
}
