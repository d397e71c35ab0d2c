//! Command-line arguments and workflow entry point

pub mod orchestration;

use std::path::PathBuf;

use clap::Parser;

pub use orchestration::{run_release_workflow, ReleaseWorkflowArgs, WorkflowResult};

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "release-notes",
    version,
    about = "Bump the version and changelog from breaking-change:/feature:/fix: commits"
)]
pub struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(short, long, default_value = ".", help = "Path inside the git repository")]
    pub repo: PathBuf,

    #[arg(long, help = "Changelog file (overrides config)")]
    pub changelog: Option<PathBuf>,

    #[arg(long, help = "JSON manifest holding the version (overrides config)")]
    pub manifest: Option<PathBuf>,

    #[arg(long, help = "Preview the release without writing files or tags")]
    pub dry_run: bool,

    #[arg(long, help = "Release even if no commit has a recognised prefix")]
    pub allow_empty: bool,

    #[arg(short, long, help = "Show debug logging")]
    pub verbose: bool,
}
