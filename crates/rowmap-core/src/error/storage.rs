use super::Error;

/// Error reported by the database driver.
///
/// The driver's error code and message are kept verbatim:
/// - Statement compilation failures (syntax errors, unknown tables)
/// - Execution failures (constraint violations, I/O errors)
/// - Generated key lookups
#[derive(Debug)]
pub(super) struct StorageError {
    code: Option<Box<str>>,
    message: Box<str>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StorageError {
    pub(super) fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub(super) fn message(&self) -> &str {
        &self.message
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("storage error")?;
        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl Error {
    /// Creates a storage error from a driver error code and message.
    pub fn storage(code: Option<impl Into<String>>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Storage(StorageError {
            code: code.map(|code| code.into().into()),
            message: message.into().into(),
            source: None,
        }))
    }

    /// Creates a storage error from any driver library error.
    ///
    /// The error has no code; its display text becomes the message and the
    /// original error is kept as the source.
    pub fn driver_operation_failed(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Storage(StorageError {
            code: None,
            message: err.to_string().into(),
            source: Some(Box::new(err)),
        }))
    }

    /// Returns `true` if this error was reported by the database driver.
    pub fn is_storage(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Storage(_))
    }

    /// The driver's error code, if this is a storage error carrying one.
    pub fn storage_code(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::Storage(err) => err.code(),
            _ => None,
        }
    }

    /// The driver's error message, if this is a storage error.
    pub fn storage_message(&self) -> Option<&str> {
        match self.kind() {
            super::ErrorKind::Storage(err) => Some(err.message()),
            _ => None,
        }
    }
}
