//! Sitesmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the
//! sitesmith generation → emission → deployment → publishing pipeline,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          sitesmith-cli (CLI)            │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │  (Generation, Deploy, Publish, Gate)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Suggestion, Provider, Store, Records)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    sitesmith-adapters (Infrastructure)  │
//! │  (HTTP providers, in-memory stores)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (SiteModel, classifier, emitters, ...)  │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sitesmith_core::domain::{classify, emit, TargetKind};
//!
//! # fn main() -> sitesmith_core::error::SitesmithResult<()> {
//! // 1. Classify a description (pure, no side effects)
//! let classification = classify("an online store for handmade jewelry")?;
//! assert_eq!(classification.archetype.as_str(), "commerce");
//!
//! // 2. Build services with injected adapters for the full pipeline
//! //    (see sitesmith-adapters and sitesmith-cli)
//! # Ok(())
//! # }
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ports::{
            DeployProvider, DeploymentStore, EntitlementStore, MarketplaceClient,
            PublicationStore, RemoteDeployment, RemoteSite, SubmissionStatus, SuggestionClient,
        },
        DeployService, EntitlementGate, GenerationService, PublishService,
    };
    pub use crate::domain::{
        classify, emit, Archetype, BuildArtifact, ContentSlot, DeployConfig, DeployState,
        DeploymentRecord, EntitlementState, FileTree, Marketplace, PlanAction, PlanLimits,
        Provider, PublicationRecord, PublishConfig, PublishState, SiteModel, TargetKind,
    };
    pub use crate::error::{SitesmithError, SitesmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
