use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::repository::DescriptorError;

/// Custom error type for the overlay generator
#[derive(Debug)]
pub enum Error {
    /// IO operations errors
    Io(io::Error),
    /// Invalid file or directory path
    InvalidPath(PathBuf),
    /// Directory traversal errors
    Walk(String),
    /// Malformed family metadata descriptor
    Metadata {
        path: PathBuf,
        source: DescriptorError,
    },
    /// Version control queries that failed or returned nothing usable
    Provenance(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Metadata { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::InvalidPath(path) => write!(f, "Invalid path: {}", path.display()),
            Error::Walk(msg) => write!(f, "Directory traversal error: {}", msg),
            Error::Metadata { path, source } => {
                write!(f, "Malformed metadata in {}: {}", path.display(), source)
            }
            Error::Provenance(msg) => write!(f, "Provenance error: {}", msg),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Result type alias for overlay generation
pub type Result<T> = std::result::Result<T, Error>;
