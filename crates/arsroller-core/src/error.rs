//! Domain error types.

use thiserror::Error;

/// Top-level error type for roll resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    /// An input was outside the range the game rule allows.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No command is registered under the requested name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

impl RollError {
    /// Shorthand for an `InvalidArgument` naming the offending parameter.
    #[must_use]
    pub fn invalid(name: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("{name} {reason}"))
    }
}
