//! Command handlers.
//!
//! Each submodule translates parsed CLI arguments into core service
//! calls and renders the result. No business logic lives here; the
//! shared helpers below only wire adapters into services.

pub mod classify;
pub mod deploy;
pub mod emit;
pub mod generate;
pub mod publish;

use std::path::Path;
use std::sync::Arc;

use sitesmith_adapters::{CannedSuggestionClient, HttpSuggestionClient, InMemoryEntitlementStore};
use sitesmith_core::{
    application::{ports::SuggestionClient, EntitlementGate},
    domain::{EntitlementState, SiteModel},
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Entitlement gate over a store seeded with the configured user/plan.
///
/// The binary is single-user; its entitlement state lives for one
/// invocation. The limits still apply so a `free` configuration behaves
/// like a free account.
pub(crate) fn entitlement_gate(config: &AppConfig) -> CliResult<EntitlementGate> {
    let limits = config
        .plan_limits()
        .map_err(|e| CliError::ConfigError { message: e.to_string() })?;
    let store = InMemoryEntitlementStore::with_states([EntitlementState::new(
        config.user.id.clone(),
        config.user.plan.clone(),
        limits,
    )]);
    Ok(EntitlementGate::new(Arc::new(store)))
}

/// Remote suggestion client when a key is configured, canned otherwise.
pub(crate) fn suggestion_client(config: &AppConfig) -> Arc<dyn SuggestionClient> {
    match &config.credentials.suggestion_api_key {
        Some(key) => Arc::new(HttpSuggestionClient::new(key.clone())),
        None => Arc::new(CannedSuggestionClient::new()),
    }
}

/// Read and parse a site model file written by `generate`.
pub(crate) fn load_model(path: &Path) -> CliResult<SiteModel> {
    let raw = std::fs::read_to_string(path).map_err(|e| CliError::ModelFile {
        path: path.to_path_buf(),
        message: e.to_string(),
        source: Some(Box::new(e)),
    })?;
    let model: SiteModel = serde_json::from_str(&raw).map_err(|e| CliError::ModelFile {
        path: path.to_path_buf(),
        message: format!("not a valid site model: {e}"),
        source: Some(Box::new(e)),
    })?;
    model.validate().map_err(|e| CliError::ModelFile {
        path: path.to_path_buf(),
        message: e.to_string(),
        source: None,
    })?;
    Ok(model)
}
