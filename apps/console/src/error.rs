//! # Console Error Type
//!
//! Unified error type for menu actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Menu action                                                            │
//! │  Result<(), ConsoleError>                                               │
//! │         │                                                               │
//! │         ├── Bad number typed? ── InvalidNumber ──┐                      │
//! │         ├── Not UTF-8? ── InvalidText ───────────┤                      │
//! │         │                                        │  recoverable:        │
//! │         ├── Inventory refused? ── Core(..) ──────┤  print message,      │
//! │         │                                        │  back to the menu    │
//! │         │                                        ▼                      │
//! │         └── stdin/stdout failed? ── Io ───────► stop the loop,         │
//! │                                                 exit non-zero           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::{CoreError, ErrorKind};
use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while running the console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading from stdin or writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user typed something that is not a number where one is required.
    #[error("'{input}' is not a valid {field}")]
    InvalidNumber { field: &'static str, input: String },

    /// A line of input was not valid UTF-8.
    #[error("input is not valid UTF-8")]
    InvalidText,

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The inventory rejected the operation.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ConsoleError {
    /// Returns true when the menu can report this error and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ConsoleError::InvalidNumber { .. } | ConsoleError::InvalidText | ConsoleError::Core(_)
        )
    }

    /// Text shown to the user for a recoverable error.
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::InvalidNumber { .. } => {
                format!("Error: {}. Please enter a number.", self)
            }
            ConsoleError::InvalidText => format!("Error: {}. Please try again.", self),
            ConsoleError::Core(err) => match err.kind() {
                ErrorKind::DuplicateId => {
                    format!("Error: {}. Choose a different ID.", err)
                }
                ErrorKind::NotFound | ErrorKind::InvalidValue => format!("Error: {}.", err),
            },
            other => format!("Error: {}", other),
        }
    }
}

/// Convenience type alias for console results.
pub type ConsoleResult<T> = Result<T, ConsoleError>;
