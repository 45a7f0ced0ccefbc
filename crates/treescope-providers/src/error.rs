use std::fmt;

/// Result type for treescope-providers operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the provider layer
#[derive(Debug)]
pub enum Error {
    /// Types layer error
    Types(treescope_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Document could not be parsed
    Parse(String),

    /// No inspector for the requested format
    UnknownFormat(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Types(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Parse(msg) => write!(f, "parse error: {}", msg),
            Error::UnknownFormat(msg) => write!(f, "unknown format: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Types(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Parse(_) | Error::UnknownFormat(_) => None,
        }
    }
}

impl From<treescope_types::Error> for Error {
    fn from(err: treescope_types::Error) -> Self {
        Error::Types(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
