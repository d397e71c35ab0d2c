//! Main workflow orchestration logic
//!
//! Ties history, manifest, changelog and repository writes together. The
//! binary only parses arguments, resolves paths and reports the outcome.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::analyzer::{CommitGroups, ReleaseAnalyzer};
use crate::boundary::BoundaryWarning;
use crate::changelog;
use crate::domain::{tag, TagPattern, Version};
use crate::error::{ReleaseError, Result};
use crate::git::{HistoryReader, RepositoryWriter};
use crate::manifest::Manifest;

/// Arguments for the release workflow
///
/// Decoupled from the clap arguments so the workflow can be driven
/// programmatically.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Changelog file, absolute or relative to the repository root
    pub changelog: PathBuf,

    /// JSON manifest file holding the version
    pub manifest: PathBuf,

    /// Base URL for commit links
    pub commit_url: String,

    /// Prefix of release tag names
    pub tag_prefix: String,

    /// Release date printed in the section header
    pub date: NaiveDate,

    /// Compute and render, but write nothing
    pub dry_run: bool,

    /// Release even when no commit carries a recognised prefix
    pub allow_empty: bool,
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Tag the history was read from, if any
    pub release_point: Option<String>,

    /// Version found in the manifest
    pub previous: Version,

    /// Version after the bump
    pub version: Version,

    /// Name of the release tag
    pub tag: String,

    /// Markdown section prepended to the changelog
    pub notes: String,

    /// Classified commits by category
    pub groups: CommitGroups,

    /// Hash of the release commit; `None` on a dry run
    pub commit: Option<String>,

    /// Non-fatal conditions to report
    pub warnings: Vec<BoundaryWarning>,
}

/// Main release workflow
///
/// 1. Read commits since the last release tag
/// 2. Classify them and derive the next version from the manifest
/// 3. Render the release section
/// 4. Prepend it to the changelog, bump the manifest, commit both, tag
///
/// Step 4 is skipped on a dry run. Any failure aborts the run; files
/// already written are left as they are.
pub fn run_release_workflow<R>(repo: &R, args: &ReleaseWorkflowArgs) -> Result<WorkflowResult>
where
    R: HistoryReader + RepositoryWriter,
{
    let release_point = repo.latest_release_tag()?;
    let commits = repo.commits_since(release_point.as_deref())?;

    if commits.is_empty() {
        return Err(ReleaseError::NoNewCommits);
    }
    info!(count = commits.len(), since = ?release_point, "collected commits");

    let mut manifest = Manifest::load(&args.manifest)?;
    let previous = manifest.version();
    let pattern = TagPattern::new(args.tag_prefix.clone());

    let mut warnings = Vec::new();
    match &release_point {
        None => warnings.push(BoundaryWarning::NoReleasePoint {
            commits: commits.len(),
        }),
        Some(tag) => {
            if let Some(tag_version) = pattern.version_of(tag) {
                if tag_version != previous {
                    warnings.push(BoundaryWarning::TagVersionMismatch {
                        tag: tag.clone(),
                        tag_version,
                        manifest_version: previous,
                    });
                }
            }
        }
    }

    let groups = ReleaseAnalyzer::new(args.commit_url.clone()).group(&commits);
    if groups.skipped > 0 {
        warnings.push(BoundaryWarning::UnclassifiedCommits {
            skipped: groups.skipped,
        });
    }

    let version = previous.derive(groups.flags())?;

    if groups.is_empty() {
        if !args.allow_empty {
            return Err(ReleaseError::NothingToRelease);
        }
        warnings.push(BoundaryWarning::EmptyRelease { version });
    }

    for warning in &warnings {
        debug!(%warning, "boundary warning");
    }

    let notes = changelog::render(&version, args.date, &groups);
    let tag_name = pattern.format(&version);
    info!(%previous, %version, tag = %tag_name, "derived release");

    let mut result = WorkflowResult {
        release_point,
        previous,
        version,
        tag: tag_name,
        notes,
        groups,
        commit: None,
        warnings,
    };

    if args.dry_run {
        info!("dry run, leaving files and repository untouched");
        return Ok(result);
    }

    changelog::prepend(&args.changelog, &result.notes)?;
    manifest.set_version(version);
    manifest.save(&args.manifest)?;

    let commit = repo.commit_files(
        &[args.changelog.as_path(), args.manifest.as_path()],
        &tag::commit_message(&version),
    )?;
    repo.create_annotated_tag(&result.tag, &tag::tag_message(&version))?;

    result.commit = Some(commit);
    Ok(result)
}
