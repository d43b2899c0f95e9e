//! Domain errors: business-rule violations, independent of any adapter.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (records capture them as strings, callers may retry)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The project description failed validation before any side effect.
    #[error("invalid description: {0}")]
    InvalidInput(String),

    /// The requested emission/publication target cannot be produced.
    #[error("unsupported target '{target}': {reason}")]
    UnsupportedTarget { target: String, reason: String },

    /// A site model violated a structural invariant.
    #[error("invalid site model: {0}")]
    InvalidModel(String),

    /// A record was asked to make a transition its state machine forbids.
    #[error("illegal {record} transition: {from} -> {to}")]
    IllegalTransition {
        record: &'static str,
        from: String,
        to: String,
    },

    /// A string could not be parsed into a domain value object.
    #[error("unknown {field}: '{value}'")]
    UnknownValue { field: &'static str, value: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput(msg) => vec![
                format!("Description rejected: {msg}"),
                "Provide a short free-text description of the site, e.g. \
                 \"an online store for handmade jewelry\""
                    .into(),
            ],
            Self::UnsupportedTarget { target, reason } => vec![
                format!("Target '{target}' cannot be used here: {reason}"),
                "Supported targets: web, react-native, flutter, pwa".into(),
            ],
            Self::UnknownValue { field, .. } => vec![
                format!("Unrecognised {field}"),
                "Run with --help to see accepted values".into(),
            ],
            Self::IllegalTransition { record, .. } => vec![
                format!("The {record} is already in a terminal state"),
                "Issue a new request instead of reusing an old record".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput(_) | Self::InvalidModel(_) => ErrorCategory::Validation,
            Self::UnsupportedTarget { .. } | Self::UnknownValue { .. } => ErrorCategory::Validation,
            Self::IllegalTransition { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
