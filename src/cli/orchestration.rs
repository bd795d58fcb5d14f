//! Main workflow orchestration logic
//!
//! The update is one linear pass: resolve the version, read the manifest,
//! match the declaration line, rewrite it, write the manifest. Argument
//! parsing stays in main.rs so the workflow can be driven programmatically.

use std::path::PathBuf;

use crate::config::Config;
use crate::domain::replace_version_line;
use crate::error::{Error, Result};
use crate::manifest::Manifest;
use crate::ui;

/// Arguments for the update workflow
///
/// Mirrors the CLI Args without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UpdateWorkflowArgs {
    /// New version string, e.g. "1.4.0"
    pub version: Option<String>,

    /// Target file, overriding the configured path
    pub file: Option<String>,

    /// Report the rewrite without writing the file
    pub dry_run: bool,
}

/// Result of a successful update
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    /// The file that was updated
    pub path: PathBuf,

    /// Declaration line before the update
    pub old_line: String,

    /// Declaration line after the update
    pub new_line: String,

    /// Version written
    pub version: String,

    /// Build suffix written after the version
    pub build_number: u64,

    /// Whether the file was written (false on dry run)
    pub written: bool,
}

/// Returns the version argument as given, or `MissingArgument` if absent or empty.
pub fn resolve_version(args: &UpdateWorkflowArgs) -> Result<&str> {
    match args.version.as_deref() {
        Some(version) if !version.is_empty() => Ok(version),
        _ => Err(Error::MissingArgument),
    }
}

/// Target path: `--file` when given, otherwise the configured manifest path.
pub fn resolve_manifest_path(args: &UpdateWorkflowArgs, config: &Config) -> PathBuf {
    args.file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.manifest.path))
}

/// Main update workflow
///
/// Nothing is written unless the read and the match both succeed, so every
/// error leaves the manifest as it was.
///
/// # Arguments
///
/// * `args` - Workflow arguments (version, dry_run)
/// * `config` - Loaded configuration (build number)
/// * `manifest` - The file to update
pub fn run_update_workflow<M: Manifest>(
    args: &UpdateWorkflowArgs,
    config: &Config,
    manifest: &M,
) -> Result<UpdateOutcome> {
    let version = resolve_version(args)?;
    let build_number = config.manifest.build_number;

    ui::display_status(&format!(
        "Updating {} to version {}...",
        manifest.path().display(),
        version
    ));

    let content = manifest.read_to_string()?;

    let (updated, old_line) = replace_version_line(&content, version, build_number)
        .ok_or_else(|| Error::pattern_not_found(manifest.path()))?;
    let new_line = old_line.rewrite(version, build_number);

    if !args.dry_run {
        manifest.write_all(&updated)?;
    }

    Ok(UpdateOutcome {
        path: manifest.path().to_path_buf(),
        old_line: old_line.to_string(),
        new_line,
        version: version.to_string(),
        build_number,
        written: !args.dry_run,
    })
}
