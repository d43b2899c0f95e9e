//! Unified error handling for the sitesmith core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with categories for CLI display and a retryability
//! flag the caller can act on.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SitesmithError {
    /// Errors from the domain layer (business rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SitesmithError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check your credentials and config file, then try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in sitesmith".into(),
                "Please report it with the command you ran".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Whether issuing the same request again may succeed.
    ///
    /// `ProviderNotConfigured` is deliberately NOT retryable: it needs an
    /// operator to supply credentials, not a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::ProviderRequestFailed { .. })
                | Self::Application(ApplicationError::SuggestionUnavailable { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Entitlement,
    NotFound,
    Configuration,
    Provider,
    Internal,
}

/// Convenient result type alias.
pub type SitesmithResult<T> = Result<T, SitesmithError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> SitesmithResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> SitesmithResult<T> {
        self.map_err(|e| SitesmithError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_provider_failures_are_retryable() {
        let err = SitesmithError::from(ApplicationError::ProviderRequestFailed {
            provider: "netlify".into(),
            reason: "503".into(),
        });
        assert!(err.is_retryable());
    }

    #[test]
    fn missing_credentials_are_not_retryable() {
        let err = SitesmithError::from(ApplicationError::ProviderNotConfigured {
            provider: "github".into(),
        });
        assert!(!err.is_retryable());
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn entitlement_denial_has_its_own_category() {
        let err = SitesmithError::from(ApplicationError::EntitlementDenied {
            action: "deploy".into(),
            plan: "free".into(),
            reason: "limit".into(),
        });
        assert_eq!(err.category(), ErrorCategory::Entitlement);
    }
}
