//! Driver errors.

use plait_comb::GrammarError;
use thiserror::Error;

/// Everything that can stop a command before it produces an outcome.
///
/// A rejected input is not an error; it is reported through the command's
/// normal output.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },

    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },

    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },

    #[error("error reading '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("unknown rule '{0}' (expected one of: value, object, array, string, number, whitespace)")]
    UnknownRule(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("missing {0}")]
    Missing(&'static str),

    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

impl DriverError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: &str, err: std::io::Error) -> Self {
        let path = path.to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => DriverError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => DriverError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => DriverError::InvalidUtf8 { path },
            _ => DriverError::Io { path, source: err },
        }
    }
}
