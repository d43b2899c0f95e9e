//! Application services - use case orchestrators.

pub mod deploy_service;
pub mod entitlement_gate;
pub mod generation_service;
pub mod publish_service;

pub use deploy_service::{DeployService, DEFAULT_PROVIDER_TIMEOUT};
pub use entitlement_gate::EntitlementGate;
pub use generation_service::{GenerationService, DEFAULT_SUGGESTION_TIMEOUT};
pub use publish_service::{PublishService, DEFAULT_MARKETPLACE_TIMEOUT};
