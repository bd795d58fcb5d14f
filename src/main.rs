use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use pubspec_bump::cli::orchestration::{
    resolve_manifest_path, resolve_version, run_update_workflow, UpdateOutcome,
    UpdateWorkflowArgs,
};
use pubspec_bump::config;
use pubspec_bump::manifest::FsManifest;
use pubspec_bump::ui;

#[derive(clap::Parser)]
#[command(
    name = "pubspec-bump",
    version,
    about = "Set the version line of a pubspec.yaml and reset its build number"
)]
struct Args {
    #[arg(value_name = "VERSION", help = "New version, e.g. 1.4.0")]
    new_version: Option<String>,

    #[arg(short, long, help = "Target file [default: pubspec.yaml]")]
    file: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Preview the change without writing the file")]
    dry_run: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    ui::display_status("pubspec-bump is running...");

    let workflow_args = UpdateWorkflowArgs {
        version: args.new_version,
        file: args.file,
        dry_run: args.dry_run,
    };

    match run(&workflow_args, args.config.as_deref()) {
        Ok(outcome) => {
            report(&outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(workflow_args: &UpdateWorkflowArgs, config_path: Option<&str>) -> Result<UpdateOutcome> {
    // Reject a missing version before touching any file
    resolve_version(workflow_args)?;

    let config = config::load_config(config_path)?;
    let path = resolve_manifest_path(workflow_args, &config);
    let manifest = FsManifest::new(&path);

    run_update_workflow(workflow_args, &config, &manifest)
        .with_context(|| format!("Error updating {}", path.display()))
}

fn report(outcome: &UpdateOutcome) {
    if outcome.written {
        ui::display_success(&ui::format_update_summary(
            &outcome.path.display().to_string(),
            &outcome.version,
            outcome.build_number,
        ));
    } else {
        ui::display_line_change(&outcome.old_line, &outcome.new_line);
        ui::display_status(&format!(
            "Dry run: {} was not modified",
            outcome.path.display()
        ));
    }
}
