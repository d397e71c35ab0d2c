use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use release_notes::cli::{run_release_workflow, Args, ReleaseWorkflowArgs};
use release_notes::config;
use release_notes::git::Git2Repository;
use release_notes::{ui, ReleaseError};

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let repo = match Git2Repository::open(&args.repo) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };
    let root = match repo.workdir() {
        Ok(workdir) => workdir.to_path_buf(),
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let config = match config::load_config(args.config.as_deref(), &root) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = ReleaseWorkflowArgs {
        changelog: args
            .changelog
            .as_ref()
            .map(|path| root.join(path))
            .unwrap_or_else(|| config.changelog_path(&root)),
        manifest: args
            .manifest
            .as_ref()
            .map(|path| root.join(path))
            .unwrap_or_else(|| config.manifest_path(&root)),
        commit_url: config.commit_url.clone(),
        tag_prefix: config.tag_prefix.clone(),
        date: chrono::Utc::now().date_naive(),
        dry_run: args.dry_run,
        allow_empty: args.allow_empty,
    };

    match run_release_workflow(&repo, &workflow_args) {
        Ok(result) => {
            ui::display_release(&result, args.dry_run);
            Ok(())
        }
        Err(ReleaseError::NoNewCommits) => {
            println!("{}", ReleaseError::NoNewCommits);
            std::process::exit(ReleaseError::NoNewCommits.exit_code());
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(e.exit_code());
        }
    }
}

/// Console logging controlled by RUST_LOG, defaulting to warn (debug with --verbose).
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
