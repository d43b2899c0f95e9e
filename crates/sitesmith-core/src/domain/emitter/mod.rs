//! Multi-target code emitter: `SiteModel` → `BuildArtifact`.
//!
//! Each target has its own deterministic file-tree template. The emitter
//! contract, relied on by the orchestrators:
//!
//! - never mutates the input model (`&SiteModel` only, no interior
//!   mutability anywhere in the tree)
//! - identical input produces a byte-identical file set (reproducible
//!   rebuilds)
//! - an empty element list yields a valid, mostly-empty artifact rather
//!   than an error

use crate::domain::{
    entities::{BuildArtifact, SiteModel},
    error::DomainError,
    value_objects::TargetKind,
};

mod flutter;
mod pwa;
mod react_native;
mod web;

/// Emit a build artifact for one target kind.
///
/// Validates the model's structural invariants first; a model that fails
/// validation produces no artifact at all (no partial output).
pub fn emit(model: &SiteModel, target: TargetKind) -> Result<BuildArtifact, DomainError> {
    model.validate()?;

    let files = match target {
        TargetKind::Web => web::emit(model),
        TargetKind::ReactNative => react_native::emit(model),
        TargetKind::Flutter => flutter::emit(model),
        TargetKind::Pwa => pwa::emit(model),
    };

    BuildArtifact::new(target, model.id.clone(), files)
}

/// Sanitise a name into a lowercase ascii slug for project descriptors
/// and package identifiers.
pub(crate) fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_dash = true;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() { "site".into() } else { out }
}
