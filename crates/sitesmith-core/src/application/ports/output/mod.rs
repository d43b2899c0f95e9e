//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `sitesmith-adapters` crate provides implementations.
//!
//! The async traits are exactly the pipeline's suspension points: the
//! remote suggestion call and the provider/marketplace network calls.
//! Services invoke them under a bounded timeout; adapters should not add
//! unbounded waits of their own. Record/entitlement stores are
//! synchronous in-process state and stay sync.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    Archetype, ContentSlot, DeploymentRecord, EntitlementState, FileTree, Marketplace, PlanAction,
    Provider, PublicationRecord, PublishConfig,
};
use crate::error::SitesmithResult;

/// Port for the remote content-suggestion service.
///
/// Implemented by:
/// - `sitesmith_adapters::suggestion::HttpSuggestionClient` (production)
/// - `sitesmith_adapters::suggestion::CannedSuggestionClient` (offline/tests)
///
/// Best-effort: callers must have a deterministic fallback for every
/// failure mode, including timeouts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SuggestionClient: Send + Sync {
    /// Suggest text for one content slot of a described site.
    async fn suggest(
        &self,
        description: &str,
        archetype: Archetype,
        slot: ContentSlot,
    ) -> SitesmithResult<String>;
}

/// A provisioned remote project/site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSite {
    pub id: String,
    pub url: String,
}

/// A provider-acknowledged upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDeployment {
    pub id: String,
    pub url: String,
}

/// Port for one hosting/version-control provider.
///
/// Every provider's flow is structurally identical — provision once,
/// upload — even though the external APIs differ. The orchestrator only
/// depends on this interface; bespoke REST shapes live in the adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeployProvider: Send + Sync {
    /// Which provider this adapter talks to.
    fn provider(&self) -> Provider;

    /// Create the remote project/site if one does not already exist for
    /// this name; idempotent per provider semantics.
    async fn provision(&self, project_name: &str) -> SitesmithResult<RemoteSite>;

    /// Package the file tree into the provider's transfer format and
    /// upload it.
    async fn upload(&self, site_id: &str, files: &FileTree) -> SitesmithResult<RemoteDeployment>;
}

/// Outcome of a marketplace submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Accepted { app_id: String, listing_url: String },
    Rejected { reason: String },
}

/// Port for one distribution marketplace.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MarketplaceClient: Send + Sync {
    /// Which marketplace this adapter talks to.
    fn store(&self) -> Marketplace;

    /// Submit a mobile artifact's files with its listing metadata.
    async fn submit(
        &self,
        config: &PublishConfig,
        files: &FileTree,
    ) -> SitesmithResult<SubmissionStatus>;
}

/// Port for deployment record persistence.
///
/// Append-only history per artifact: `upsert` replaces a record by id,
/// which is only ever used to advance a record's own state. A new attempt
/// is a new record.
#[cfg_attr(test, mockall::automock)]
pub trait DeploymentStore: Send + Sync {
    fn upsert(&self, record: &DeploymentRecord) -> SitesmithResult<()>;
    fn get(&self, id: &str) -> SitesmithResult<DeploymentRecord>;
    fn for_artifact(&self, artifact_id: &str) -> SitesmithResult<Vec<DeploymentRecord>>;
}

/// Port for publication record persistence. Same semantics as
/// [`DeploymentStore`].
#[cfg_attr(test, mockall::automock)]
pub trait PublicationStore: Send + Sync {
    fn upsert(&self, record: &PublicationRecord) -> SitesmithResult<()>;
    fn get(&self, id: &str) -> SitesmithResult<PublicationRecord>;
    fn for_artifact(&self, artifact_id: &str) -> SitesmithResult<Vec<PublicationRecord>>;
}

/// Port for entitlement state.
///
/// `increment` must be atomic: the store serialises concurrent
/// read-increment-write cycles for the same user so no update is lost.
/// It also owns the rolling-window reset, for the same reason.
#[cfg_attr(test, mockall::automock)]
pub trait EntitlementStore: Send + Sync {
    /// Current state for a user, if the billing source knows them.
    fn state(&self, user_id: &str) -> SitesmithResult<Option<EntitlementState>>;

    /// Insert or replace a user's state (plan changes, seeding).
    fn put(&self, state: EntitlementState) -> SitesmithResult<()>;

    /// Atomically bump the counter for an action, resetting the window
    /// first if it lapsed as of `now`.
    fn increment(&self, user_id: &str, action: PlanAction, now: DateTime<Utc>)
        -> SitesmithResult<()>;
}
