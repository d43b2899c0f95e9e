//! Application ports.
//!
//! Driving (input) is the service API itself; only driven (output) ports
//! need traits.

pub mod output;

pub use output::{
    DeployProvider, DeploymentStore, EntitlementStore, MarketplaceClient, PublicationStore,
    RemoteDeployment, RemoteSite, SubmissionStatus, SuggestionClient,
};

#[cfg(test)]
pub use output::{
    MockDeployProvider, MockDeploymentStore, MockEntitlementStore, MockMarketplaceClient,
    MockPublicationStore, MockSuggestionClient,
};
