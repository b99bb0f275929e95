use super::Error;

/// Error when a read-only data probe issued during the destructive change
/// check fails.
#[derive(Debug)]
pub(super) struct DataQueryFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for DataQueryFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for DataQueryFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "data query failed: {}", self.inner)
    }
}

impl Error {
    /// Wraps a failure reported by a [`DataQueries`](crate::DataQueries)
    /// implementation.
    pub fn data_query_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::DataQueryFailed(DataQueryFailed {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is a data query failure.
    pub fn is_data_query_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::DataQueryFailed(_))
    }
}
