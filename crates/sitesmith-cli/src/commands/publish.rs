//! Implementation of the `sitesmith publish` command.
//!
//! Loads a site model, emits a mobile artifact, and submits it to the
//! chosen marketplace. A rejection is a normal terminal outcome and is
//! reported with the store's reason.

use std::sync::Arc;

use tracing::{info, instrument};

use sitesmith_adapters::{InMemoryPublicationStore, SandboxMarketplaceClient};
use sitesmith_core::{
    application::{ports::MarketplaceClient, PublishService},
    domain::{emit, Marketplace, PublishConfig, PublishState, TargetKind},
};

use crate::{
    cli::PublishArgs,
    commands::{entitlement_gate, load_model},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sitesmith publish` command.
#[instrument(skip_all, fields(store = %Marketplace::from(args.store)))]
pub async fn execute(
    args: PublishArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let store = Marketplace::from(args.store);
    let target = TargetKind::from(args.target);

    let model = load_model(&args.model)?;
    let artifact = emit(&model, target).map_err(|e| CliError::Core(e.into()))?;

    let clients: Vec<Box<dyn MarketplaceClient>> = if args.dry_run {
        vec![Box::new(SandboxMarketplaceClient::new(store))]
    } else {
        config.credentials.provider.marketplace_clients()
    };

    let service = PublishService::new(
        clients,
        Arc::new(InMemoryPublicationStore::new()),
        entitlement_gate(&config)?,
    );

    let mut publish_config = PublishConfig::new(&args.app_name);
    publish_config.category = args.category.clone();

    output.header(&format!("Submitting '{}' to {store}...", args.app_name))?;
    let record = service
        .publish(&config.user.id, &artifact, store, publish_config)
        .await?;
    info!(record_id = %record.id, state = %record.state(), "submission finished");

    match record.state() {
        PublishState::Submitted => {
            output.success(&format!(
                "Submitted! App id {}",
                record.store_app_id.as_deref().unwrap_or("(pending)")
            ))?;
            if let Some(url) = record.store_url.as_deref() {
                output.print(&format!("  Listing: {url}"))?;
            }
            Ok(())
        }
        _ => {
            let reason = record
                .rejection_reason
                .unwrap_or_else(|| "unknown rejection".to_string());
            if reason.contains("not configured") {
                return Err(CliError::ConfigError {
                    message: format!("no credentials for {store}: {reason}"),
                });
            }
            output.error(&format!("Submission rejected: {reason}"))?;
            Err(CliError::InvalidInput { message: reason })
        }
    }
}
