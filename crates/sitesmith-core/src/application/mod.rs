//! Application layer: orchestration services and the ports they drive.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{DeployService, EntitlementGate, GenerationService, PublishService};
