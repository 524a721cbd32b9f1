use super::Error;

/// Error when a lookup by identifier matches more than one row.
///
/// The identifier column is expected to be a primary key; several matching
/// rows mean the table no longer upholds that.
#[derive(Debug)]
pub(super) struct UniquenessViolationError {
    table: Box<str>,
    rows: usize,
}

impl std::error::Error for UniquenessViolationError {}

impl core::fmt::Display for UniquenessViolationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "uniqueness violation: id is not unique; table={} rows={}",
            self.table, self.rows
        )
    }
}

impl Error {
    /// Creates a uniqueness violation error for `table`, where `rows` rows
    /// matched a single identifier.
    pub fn uniqueness_violation(table: impl Into<String>, rows: usize) -> Error {
        Error::from(super::ErrorKind::UniquenessViolation(
            UniquenessViolationError {
                table: table.into().into(),
                rows,
            },
        ))
    }

    /// Returns `true` if this error is a uniqueness violation.
    pub fn is_uniqueness_violation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UniquenessViolation(_))
    }
}
