//! Marketplace submission adapters.
//!
//! One adapter per distribution store. Both map the same single-step
//! flow, submit the packaged mobile artifact with its listing metadata,
//! onto their store's review API. A rejected submission is a normal
//! outcome, not a transport error; adapters surface it as
//! `SubmissionStatus::Rejected`.

mod app_store;
mod play_store;
mod sandbox;

pub use app_store::AppStoreClient;
pub use play_store::PlayStoreClient;
pub use sandbox::SandboxMarketplaceClient;

use sitesmith_core::application::ApplicationError;
use sitesmith_core::domain::Marketplace;
use sitesmith_core::error::SitesmithError;

pub(crate) fn submission_failed(
    store: Marketplace,
    error: impl std::fmt::Display,
) -> SitesmithError {
    ApplicationError::ProviderRequestFailed {
        provider: store.to_string(),
        reason: error.to_string(),
    }
    .into()
}
