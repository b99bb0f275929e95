use super::Error;

/// Error when a migration would lose data and the caller did not accept it.
#[derive(Debug)]
pub(super) struct UnacceptedWarnings {
    count: usize,
}

impl std::error::Error for UnacceptedWarnings {}

impl core::fmt::Display for UnacceptedWarnings {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "migration has {} data loss warning(s) that were not accepted",
            self.count
        )
    }
}

impl Error {
    /// Creates an error reporting `count` warnings the caller did not accept.
    pub fn unaccepted_warnings(count: usize) -> Error {
        Error::from(super::ErrorKind::UnacceptedWarnings(UnacceptedWarnings {
            count,
        }))
    }

    /// Returns `true` if this error is an unaccepted warnings error.
    pub fn is_unaccepted_warnings(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnacceptedWarnings(_))
    }
}
