use super::Error;

/// Error when a rename mapping does not fit the schemas it is applied to.
///
/// Raised by the steps inferrer when a mapping entry names a model, field, or
/// enum absent from the previous or next schema, or when two entries claim the
/// same name.
#[derive(Debug)]
pub(super) struct InvalidRenameMapping {
    message: Box<str>,
}

impl std::error::Error for InvalidRenameMapping {}

impl core::fmt::Display for InvalidRenameMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid rename mapping: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid rename mapping error.
    pub fn invalid_rename_mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidRenameMapping(InvalidRenameMapping {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid rename mapping error.
    pub fn is_invalid_rename_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidRenameMapping(_))
    }
}
