use std::fmt;

/// Result type for treescope-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A child entity could not be accessed (missing key, bad index)
    Access(String),

    /// The handle does not belong to this inspector
    ForeignHandle,

    /// The entity could not be classified
    Inspect(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Access(msg) => write!(f, "access error: {}", msg),
            Error::ForeignHandle => write!(f, "handle does not belong to this inspector"),
            Error::Inspect(msg) => write!(f, "inspection error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
