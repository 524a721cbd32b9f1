use super::Error;

/// Error when a property/field scheme cannot be used to build a mapper.
///
/// This occurs when:
/// - The scheme has no mapping for the `id` property
/// - The scheme is empty
///
/// It is raised while constructing the mapper, before any statement is
/// compiled.
#[derive(Debug)]
pub(super) struct InvalidSchemeError {
    message: Box<str>,
}

impl std::error::Error for InvalidSchemeError {}

impl core::fmt::Display for InvalidSchemeError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid scheme: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid scheme error.
    pub fn invalid_scheme(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidScheme(InvalidSchemeError {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid scheme error.
    pub fn is_invalid_scheme(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidScheme(_))
    }
}
