use super::Error;

#[derive(Debug)]
pub(super) struct JsonError(serde_json::Error);

impl std::error::Error for JsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl core::fmt::Display for JsonError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "json: {}", self.0)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::Json(JsonError(err)))
    }
}

impl Error {
    /// Returns `true` if this error came from encoding or decoding JSON.
    pub fn is_json(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::Json(_))
    }
}
