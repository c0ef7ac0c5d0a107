//! Error types for event-filter.

use thiserror::Error;

/// Main error type for loading and evaluating filters.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Evaluation attempted before a filter definition was loaded
    #[error("No filter definition loaded")]
    NotLoaded,

    /// A target path segment is missing from the record
    #[error("Path not found: '{path}' (missing segment '{segment}')")]
    PathNotFound { path: String, segment: String },

    /// Command is not registered
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Ordering command applied to operands without a common ordering
    #[error("Cannot order {target} against {operand} with '{command}'")]
    UnorderableOperands {
        command: String,
        target: &'static str,
        operand: &'static str,
    },

    /// Command applied to operand types it does not support
    #[error("Command '{command}' does not support {target} target with {operand} operand")]
    IncompatibleOperands {
        command: String,
        target: &'static str,
        operand: &'static str,
    },

    /// Logical operator other than "and" / "or"
    #[error("Unsupported logical_operator: {0}")]
    UnsupportedLogicalOperator(String),

    /// Action command other than "remove" / "return"
    #[error("Unsupported action: {0}")]
    UnsupportedAction(String),

    /// Malformed filter definition or event
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FilterError {
    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
