//! Domain layer: pure data and pure logic, no I/O.
//!
//! Nothing in this module performs a network call, reads the clock beyond
//! record timestamps, or touches a filesystem. The classifier and the
//! emitters are deterministic functions; the record types enforce their
//! own state machines; blueprints are static tables.

pub mod blueprints;
pub mod classifier;
pub mod emitter;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use classifier::{classify, Classification, MAX_DESCRIPTION_LEN};
pub use emitter::emit;
pub use entities::{
    BuildArtifact, ContentBlock, DeployConfig, DeploymentRecord, DesignTokens, Element,
    EntitlementState, FileTree, PlanLimits, PublicationRecord, PublishConfig, Seo, SiteModel,
    UsageCounters, UNLIMITED,
};
pub use error::{DomainError, ErrorCategory};
pub use value_objects::{
    Archetype, ContentSlot, DeployState, ElementType, Marketplace, PlanAction, Provider,
    PublishState, TargetKind,
};
