//! Implementation of the `sitesmith emit` command.
//!
//! Loads a site model, runs the pure emitter for the chosen target, and
//! materialises the resulting file tree under the output directory.

use std::path::Path;

use tracing::{debug, info, instrument};

use sitesmith_core::domain::{emit, TargetKind};

use crate::{
    cli::EmitArgs,
    commands::load_model,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `sitesmith emit` command.
#[instrument(skip_all, fields(target = %TargetKind::from(args.target)))]
pub fn execute(args: EmitArgs, output: OutputManager) -> CliResult<()> {
    let model = load_model(&args.model)?;
    let target = TargetKind::from(args.target);

    let artifact = emit(&model, target).map_err(|e| CliError::Core(e.into()))?;
    debug!(artifact_id = %artifact.id(), files = artifact.files().len(), "emission complete");

    if args.list {
        output.header(&format!("Files for {target} ({} total)", artifact.files().len()))?;
        for path in artifact.files().paths() {
            output.print(&format!("  {path}"))?;
        }
        return Ok(());
    }

    let root = args.out_dir.join(target.as_str());
    write_tree(&root, &artifact)?;
    info!(artifact_id = %artifact.id(), path = %root.display(), "artifact written");

    output.success(&format!(
        "Emitted {} files for {target}",
        artifact.files().len()
    ))?;
    output.print(&format!("  Output in {}", root.display()))?;

    Ok(())
}

/// Write every file in the artifact under `root`, creating parent
/// directories as needed. Paths are relative by construction; the
/// emitter rejects absolute paths before an artifact exists.
fn write_tree(root: &Path, artifact: &sitesmith_core::domain::BuildArtifact) -> CliResult<()> {
    for (path, content) in artifact.files().iter() {
        let dest = root.join(path);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&dest, content)?;
    }
    Ok(())
}
