use super::Error;

/// Error when the backend rejects the generated DDL.
///
/// Backend failures are passed through unchanged; the source chain is
/// rendered so the original database message stays visible.
#[derive(Debug)]
pub(super) struct ExecutionFailed {
    pub(super) inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for ExecutionFailed {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for ExecutionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.inner, f)?;
        let mut source = self.inner.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}

impl Error {
    /// Wraps a failure reported by the backend while applying DDL.
    pub fn execution_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::ExecutionFailed(ExecutionFailed {
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is an execution failure.
    pub fn is_execution_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ExecutionFailed(_))
    }
}
