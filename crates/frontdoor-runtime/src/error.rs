use std::fmt;
use std::path::PathBuf;

/// Result type for frontdoor-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Catalog document could not be parsed
    Json {
        source_name: String,
        error: serde_json::Error,
    },

    /// Configuration error
    Config(String),

    /// No catalog registered under this name
    UnknownCatalog(String),

    /// Catalog parsed but violates collection invariants
    InvalidCatalog { source_name: String, reason: String },

    /// Catalog file referenced by configuration is missing
    MissingCatalogFile(PathBuf),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json { source_name, error } => {
                write!(f, "Failed to parse catalog '{}': {}", source_name, error)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::UnknownCatalog(name) => write!(f, "Unknown catalog: '{}'", name),
            Error::InvalidCatalog {
                source_name,
                reason,
            } => write!(f, "Invalid catalog '{}': {}", source_name, reason),
            Error::MissingCatalogFile(path) => {
                write!(f, "Catalog file not found: {}", path.display())
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json { error, .. } => Some(error),
            Error::Config(_)
            | Error::UnknownCatalog(_)
            | Error::InvalidCatalog { .. }
            | Error::MissingCatalogFile(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
