//! Implementation of the `sitesmith generate` command.
//!
//! Builds the generation service from the configured suggestion client
//! and entitlement gate, generates a full site model, and writes it to
//! disk as JSON for the downstream `emit`/`deploy`/`publish` commands.

use tracing::{info, instrument};

use sitesmith_core::application::GenerationService;

use crate::{
    cli::GenerateArgs,
    commands::{entitlement_gate, suggestion_client},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sitesmith generate` command.
#[instrument(skip_all)]
pub async fn execute(
    args: GenerateArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let gate = entitlement_gate(&config)?;
    let service = GenerationService::new(suggestion_client(&config), gate);

    let model = service.generate(&config.user.id, &args.description).await?;
    info!(model_id = %model.id, archetype = %model.archetype, "model generated");

    let json = serde_json::to_string_pretty(&model).map_err(|e| CliError::ModelFile {
        path: args.out.clone(),
        message: format!("cannot serialize model: {e}"),
        source: Some(Box::new(e)),
    })?;
    std::fs::write(&args.out, json)?;

    output.success(&format!(
        "Generated a {} site with {} pages",
        model.archetype,
        model.pages.len()
    ))?;
    output.print(&format!("  Model written to {}", args.out.display()))?;

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!(
            "  sitesmith emit web --model {}",
            args.out.display()
        ))?;
        output.print(&format!(
            "  sitesmith deploy netlify --model {} --project <name>",
            args.out.display()
        ))?;
    }

    Ok(())
}
