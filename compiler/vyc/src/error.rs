use std::path::PathBuf;

use thiserror::Error;
use vy_lexer::{ConfigError, LexError};

/// Errors reported by the `vyc` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("cannot find file '{}'", path.display())]
    FileNotFound { path: PathBuf },
    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },
    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid line number '{0}': expected a positive integer")]
    InvalidLine(String),
    #[error("line {line} is past the end of the file ({count} lines)")]
    LineOutOfRange { line: usize, count: usize },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Lex(#[from] LexError),
}

impl CliError {
    /// Classify an I/O error from reading `path`.
    pub fn from_read(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            std::io::ErrorKind::NotFound => CliError::FileNotFound { path },
            std::io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Io { path, source: err },
        }
    }
}
