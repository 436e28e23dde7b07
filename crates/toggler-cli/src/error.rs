//! Error types for toggler-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A document could not be transformed
    #[error("{}: {source}", .path.display())]
    Transform {
        path: PathBuf,
        #[source]
        source: toggler_core::Error,
    },

    /// Configuration file could not be parsed
    #[error("Invalid configuration in {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A file pattern is not a valid glob
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A file could not be read or written
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn transform(path: impl Into<PathBuf>, source: toggler_core::Error) -> Self {
        Self::Transform {
            path: path.into(),
            source,
        }
    }
}
