//! Infrastructure adapters for sitesmith.
//!
//! This crate implements the ports defined in
//! `sitesmith_core::application::ports`. It contains all external
//! dependencies and I/O operations: HTTP clients for the hosting
//! providers and marketplaces, the remote suggestion client, and the
//! in-memory record/entitlement stores used by the CLI and tests.

pub mod credentials;
pub mod marketplaces;
pub mod providers;
pub mod stores;
pub mod suggestion;

// Re-export commonly used adapters
pub use credentials::ProviderCredentials;
pub use marketplaces::{AppStoreClient, PlayStoreClient, SandboxMarketplaceClient};
pub use providers::{DryRunProvider, GithubProvider, NetlifyProvider, VercelProvider};
pub use stores::{InMemoryDeploymentStore, InMemoryEntitlementStore, InMemoryPublicationStore};
pub use suggestion::{CannedSuggestionClient, HttpSuggestionClient};
