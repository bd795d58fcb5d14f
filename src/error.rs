use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for pubspec-bump operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("No version specified.")]
    MissingArgument,

    #[error("Could not find a valid \"version: x.y.z[+b]\" line in {}", path.display())]
    PatternNotFound { path: PathBuf },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in pubspec-bump
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Attach a path to an I/O failure
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn pattern_not_found(path: impl Into<PathBuf>) -> Self {
        Error::PatternNotFound { path: path.into() }
    }
}
