//! In-memory implementations of the persistence ports.
//!
//! Single-process state behind `RwLock`/`Mutex`. Suitable for the CLI's
//! lifetime and for tests; a database-backed implementation would slot in
//! behind the same ports.

mod entitlement;
mod records;

pub use entitlement::InMemoryEntitlementStore;
pub use records::{InMemoryDeploymentStore, InMemoryPublicationStore};
