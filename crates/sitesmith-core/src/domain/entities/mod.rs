//! Domain entities: the site model, artifacts, records and entitlements.

pub mod artifact;
pub mod entitlement;
pub mod records;
pub mod site_model;

pub use artifact::{BuildArtifact, FileTree};
pub use entitlement::{EntitlementState, PlanLimits, UsageCounters, UNLIMITED, USAGE_PERIOD_DAYS};
pub use records::{DeployConfig, DeploymentRecord, PublicationRecord, PublishConfig};
pub use site_model::{ContentBlock, DesignTokens, Element, Seo, SiteModel};
