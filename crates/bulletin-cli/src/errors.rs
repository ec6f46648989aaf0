//! Typed CLI errors that map to exit codes.

use std::fmt;

use crate::constants::exit_codes;

#[derive(Debug)]
pub enum CliError {
    /// A post or file that the command needs does not exist
    NotFound { message: String, hint: String },

    /// Arguments or input that cannot be used
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => write!(f, "{}\n{}", message, hint),
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// No post with `id` in the store.
    pub fn post_not_found(id: &str) -> Self {
        Self::not_found(
            format!("News post not found: {}", id),
            "Run `bulletin list` to see post ids.",
        )
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CliError::NotFound { message, .. } => message,
            CliError::InvalidInput(message) => message,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::InvalidInput(_) => None,
        }
    }
}
