use super::Error;

/// Error when a model declaration cannot be turned into a table descriptor.
///
/// This occurs when:
/// - A model declares no primary key
/// - A field is missing its explicit column name
/// - A field's kind has no extraction mode (maps and structs without the JSON flag)
/// - Two fields share a source name or a column name
///
/// These errors are raised at registration time, before any SQL is issued.
#[derive(Debug)]
pub(super) struct InvalidSchema {
    message: Box<str>,
}

impl std::error::Error for InvalidSchema {}

impl core::fmt::Display for InvalidSchema {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid schema: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid schema error.
    pub fn invalid_schema(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidSchema(InvalidSchema {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid schema error.
    pub fn is_invalid_schema(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::InvalidSchema(_))
    }
}
