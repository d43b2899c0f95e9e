//! Deploy provider adapters.
//!
//! One adapter per hosting/version-control service. The external APIs
//! differ, but each adapter maps the same two-step flow — provision a
//! remote project/site, then upload the packaged file tree — onto its
//! provider's REST shape. The orchestrator only ever sees the
//! `DeployProvider` port.

mod dry_run;
mod github;
mod netlify;
mod vercel;

pub use dry_run::DryRunProvider;
pub use github::GithubProvider;
pub use netlify::NetlifyProvider;
pub use vercel::VercelProvider;

use std::time::Duration;

use sitesmith_core::application::ApplicationError;
use sitesmith_core::domain::Provider;
use sitesmith_core::error::SitesmithError;

/// Per-request timeout on the HTTP client itself. The orchestrator adds
/// its own outer bound; this one catches stuck connections below it.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(25);

pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .expect("default reqwest client configuration is valid")
}

/// Map any transport/decode failure to the retryable provider error.
pub(crate) fn request_failed(
    provider: Provider,
    error: impl std::fmt::Display,
) -> SitesmithError {
    ApplicationError::ProviderRequestFailed {
        provider: provider.to_string(),
        reason: error.to_string(),
    }
    .into()
}
