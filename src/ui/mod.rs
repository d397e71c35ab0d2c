//! User interface module - terminal output for a release run.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Printing to stdout/stderr

use console::style;

use crate::boundary::BoundaryWarning;
use crate::cli::WorkflowResult;

pub mod formatter;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Print a status message with a yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Print a boundary warning.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Print what a run did (or would do on a dry run).
pub fn display_release(result: &WorkflowResult, dry_run: bool) {
    for warning in &result.warnings {
        display_boundary_warning(warning);
    }

    display_status(&formatter::format_release_point(result));
    for line in formatter::format_counts(result) {
        println!("{}", line);
    }
    println!(
        "\n{} {}",
        style("Version:").bold(),
        formatter::format_version_change(result)
    );

    if dry_run {
        println!("\n{}", style("Release notes (dry run):").bold());
        print!("{}", result.notes);
        display_status("Dry run: no files, commits or tags were written");
        return;
    }

    if let Some(commit) = &result.commit {
        display_success(&format!("Committed {}", &commit[..commit.len().min(7)]));
    }
    display_success(&format!("Tagged {}", result.tag));
}
