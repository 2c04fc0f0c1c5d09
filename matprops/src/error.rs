//! Error type for the std-side matrix and configuration APIs

use matprops_core::MatrixError;

/// Errors from building matrices or loading a context configuration
#[derive(Debug)]
pub enum Error {
    /// A representation invariant was violated
    Matrix(MatrixError),
    /// Configuration values are out of range
    Config(String),
    /// Reading a configuration file failed
    Io(std::io::Error),
    /// Configuration is not valid JSON for `ContextConfig`
    #[cfg(feature = "serde")]
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Matrix(e) => write!(f, "{e}"),
            Error::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "serde")]
            Error::Json(e) => write!(f, "Malformed configuration: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            #[cfg(feature = "serde")]
            Error::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MatrixError> for Error {
    fn from(e: MatrixError) -> Self {
        Error::Matrix(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

/// Result type for std-side operations
pub type Result<T> = std::result::Result<T, Error>;
