use std::fmt;

/// Result type for frontdoor-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A label did not name any member of a closed enumeration
    UnknownLabel { kind: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownLabel { kind, value } => write!(f, "Unknown {}: '{}'", kind, value),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        Error::UnknownLabel {
            kind,
            value: value.to_string(),
        }
    }
}
