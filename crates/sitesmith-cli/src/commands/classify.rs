//! Implementation of the `sitesmith classify` command.
//!
//! Pure and offline: runs the requirement classifier and prints the
//! result. Nothing is created and no quota is consumed.

use tracing::instrument;

use sitesmith_core::domain::classify;

use crate::{
    cli::ClassifyArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sitesmith classify` command.
#[instrument(skip_all)]
pub fn execute(args: ClassifyArgs, output: OutputManager) -> CliResult<()> {
    let classification =
        classify(&args.description).map_err(|e| CliError::Core(e.into()))?;

    if output.wants_json() {
        let json = serde_json::json!({
            "archetype": classification.archetype.as_str(),
            "pages": classification.pages,
            "features": classification.features,
        });
        output.print(&serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string()))?;
        return Ok(());
    }

    output.header("Classification")?;
    output.print(&format!("  Archetype: {}", classification.archetype))?;
    output.print(&format!("  Pages:     {}", classification.pages.join(", ")))?;
    if classification.features.is_empty() {
        output.print("  Features:  (none)")?;
    } else {
        let features: Vec<&str> = classification.features.iter().map(String::as_str).collect();
        output.print(&format!("  Features:  {}", features.join(", ")))?;
    }

    Ok(())
}
