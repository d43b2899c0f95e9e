//! Application layer errors.
//!
//! These represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No adapter was registered for the provider — a configuration
    /// error, surfaced to the operator, never retried automatically.
    #[error("provider '{provider}' is not configured")]
    ProviderNotConfigured { provider: String },

    /// A provider/marketplace call failed or timed out. Transient:
    /// issuing a new request (and so a new record) is safe.
    #[error("request to '{provider}' failed: {reason}")]
    ProviderRequestFailed { provider: String, reason: String },

    /// The plan or its usage counters deny the action. Surfaced to the
    /// caller as a distinct condition, never silently downgraded.
    #[error("'{action}' denied for plan '{plan}': {reason}")]
    EntitlementDenied {
        action: String,
        plan: String,
        reason: String,
    },

    /// The remote content-suggestion call failed. Never propagates past
    /// the generator: the deterministic fallback absorbs it.
    #[error("remote suggestion unavailable: {reason}")]
    SuggestionUnavailable { reason: String },

    /// A record store operation failed (lock poisoned, etc.).
    #[error("record store error: {reason}")]
    StoreError { reason: String },

    /// No record with the given id exists.
    #[error("record not found: {id}")]
    RecordNotFound { id: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProviderNotConfigured { provider } => vec![
                format!("No credentials configured for '{provider}'"),
                format!(
                    "Set the SITESMITH_{}_TOKEN environment variable or add it to a .env file",
                    provider.to_uppercase().replace('-', "_")
                ),
            ],
            Self::ProviderRequestFailed { provider, .. } => vec![
                format!("The call to '{provider}' failed; this is usually transient"),
                "Issue the request again — each attempt gets its own record".into(),
            ],
            Self::EntitlementDenied { action, .. } => vec![
                format!("Your plan does not allow '{action}' right now"),
                "Upgrade the plan or wait for the 30-day usage window to roll over".into(),
            ],
            Self::RecordNotFound { id } => {
                vec![format!("No deployment/publication record with id '{id}'")]
            }
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProviderNotConfigured { .. } => ErrorCategory::Configuration,
            Self::ProviderRequestFailed { .. } => ErrorCategory::Provider,
            Self::EntitlementDenied { .. } => ErrorCategory::Entitlement,
            Self::RecordNotFound { .. } => ErrorCategory::NotFound,
            Self::SuggestionUnavailable { .. } | Self::StoreError { .. } => ErrorCategory::Internal,
        }
    }
}
