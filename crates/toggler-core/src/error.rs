//! Error types for toggler-core

use crate::directive::Action;

/// Result type for toggler-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort processing of a whole document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid command: '{action}' (line {line})")]
    InvalidCommand { action: String, line: usize },

    #[error("Invalid comment pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl Error {
    pub fn invalid_command(action: impl Into<String>, line: usize) -> Self {
        Self::InvalidCommand {
            action: action.into(),
            line,
        }
    }
}

/// Recoverable conditions reported alongside a transformed document
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    #[error("Missing 'endcomments' tag for '{action}' block opened at line {opened_at}")]
    MissingEndDirective { action: Action, opened_at: usize },
}
