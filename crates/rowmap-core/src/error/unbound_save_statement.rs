use super::Error;

/// Error when a related entity is saved before any mapper bound a save
/// statement to it.
///
/// This is a programming error: the entity was built by hand instead of being
/// hydrated by `fetch` or `select`.
#[derive(Debug)]
pub(super) struct UnboundSaveStatementError;

impl std::error::Error for UnboundSaveStatementError {}

impl core::fmt::Display for UnboundSaveStatementError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("entity has no bound save statement; it was not obtained through a mapper")
    }
}

impl Error {
    /// Creates an unbound save statement error.
    pub fn unbound_save_statement() -> Error {
        Error::from(super::ErrorKind::UnboundSaveStatement(
            UnboundSaveStatementError,
        ))
    }

    /// Returns `true` if this error is an unbound save statement error.
    pub fn is_unbound_save_statement(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnboundSaveStatement(_))
    }
}
