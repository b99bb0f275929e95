use super::Error;

/// Error when the destructive change check reported blocking violations.
#[derive(Debug)]
pub(super) struct DestructiveChanges {
    count: usize,
}

impl std::error::Error for DestructiveChanges {}

impl core::fmt::Display for DestructiveChanges {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "migration blocked by {} destructive change error(s)",
            self.count
        )
    }
}

impl Error {
    /// Creates an error reporting that `count` violations block the migration.
    pub fn destructive_changes(count: usize) -> Error {
        Error::from(super::ErrorKind::DestructiveChanges(DestructiveChanges {
            count,
        }))
    }

    /// Returns `true` if this error is a destructive changes error.
    pub fn is_destructive_changes(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DestructiveChanges(_))
    }
}
