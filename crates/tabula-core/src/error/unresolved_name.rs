use super::Error;

/// Error when a type or field name cannot be resolved while rendering.
#[derive(Debug)]
pub(super) enum UnresolvedName {
    Type { ty: Box<str> },
    Field { ty: Box<str>, field: Box<str> },
}

impl std::error::Error for UnresolvedName {}

impl core::fmt::Display for UnresolvedName {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            UnresolvedName::Type { ty } => {
                write!(f, "unresolved name: type `{ty}` is not registered")
            }
            UnresolvedName::Field { ty, field } => {
                write!(f, "unresolved name: field `{field}` not found on `{ty}`")
            }
        }
    }
}

impl Error {
    /// Creates an error for a type name missing from the registry.
    pub fn unresolved_type(ty: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvedName(UnresolvedName::Type {
            ty: ty.into().into(),
        }))
    }

    /// Creates an error for a field name missing from a registered type.
    pub fn unresolved_field(ty: impl Into<String>, field: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::UnresolvedName(UnresolvedName::Field {
            ty: ty.into().into(),
            field: field.into().into(),
        }))
    }

    /// Returns `true` if this error is an unresolved name error.
    pub fn is_unresolved_name(&self) -> bool {
        matches!(self.root().kind(), super::ErrorKind::UnresolvedName(_))
    }
}
