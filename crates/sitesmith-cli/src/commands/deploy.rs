//! Implementation of the `sitesmith deploy` command.
//!
//! Loads a site model, emits the artifact for the chosen target, and
//! hands it to the deployment orchestrator. With `--dry-run` the real
//! provider registry is swapped for a local stand-in so the whole state
//! machine runs without network access or credentials.

use std::sync::Arc;

use tracing::{info, instrument};

use sitesmith_adapters::{DryRunProvider, InMemoryDeploymentStore};
use sitesmith_core::{
    application::{ports::DeployProvider, DeployService},
    domain::{emit, DeployConfig, DeployState, Provider, TargetKind},
};

use crate::{
    cli::DeployArgs,
    commands::{entitlement_gate, load_model},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sitesmith deploy` command.
#[instrument(skip_all, fields(provider = %Provider::from(args.provider)))]
pub async fn execute(args: DeployArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let provider = Provider::from(args.provider);
    let target = TargetKind::from(args.target);

    let model = load_model(&args.model)?;
    let artifact = emit(&model, target).map_err(|e| CliError::Core(e.into()))?;

    let providers: Vec<Box<dyn DeployProvider>> = if args.dry_run {
        vec![Box::new(DryRunProvider::new(provider))]
    } else {
        config.credentials.provider.deploy_providers()
    };

    let service = DeployService::new(
        providers,
        Arc::new(InMemoryDeploymentStore::new()),
        entitlement_gate(&config)?,
    );

    let mut deploy_config = DeployConfig::new(&args.project);
    deploy_config.domain = args.domain.clone();

    output.header(&format!("Deploying '{}' to {provider}...", args.project))?;
    let record = service
        .deploy(&config.user.id, &artifact, provider, deploy_config)
        .await?;
    info!(record_id = %record.id, state = %record.state(), "deployment finished");

    match record.state() {
        DeployState::Deployed => {
            output.success(&format!(
                "Deployed! {}",
                record.public_url.as_deref().unwrap_or("(no URL reported)")
            ))?;
            Ok(())
        }
        _ => {
            let reason = record
                .last_error
                .unwrap_or_else(|| "unknown failure".to_string());
            // A missing token never reaches the provider; report it as a
            // configuration problem rather than a failed attempt.
            if reason.contains("not configured") {
                return Err(CliError::ConfigError {
                    message: format!("no credentials for {provider}: {reason}"),
                });
            }
            output.error(&format!("Deployment failed: {reason}"))?;
            Err(CliError::Core(
                sitesmith_core::application::ApplicationError::ProviderRequestFailed {
                    provider: provider.to_string(),
                    reason,
                }
                .into(),
            ))
        }
    }
}
