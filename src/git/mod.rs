//! Git operations abstraction layer
//!
//! This module splits the version-control collaborator into two traits so the
//! release core can run against either a real repository or an in-memory one.
//!
//! - [HistoryReader]: where the last release happened and what came after it
//! - [RepositoryWriter]: record the release as a commit plus annotated tag
//!
//! Implementations:
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust
//! # use release_notes::git::HistoryReader;
//! # fn example<R: HistoryReader>(repo: &R) -> release_notes::Result<()> {
//! let tag = repo.latest_release_tag()?;
//! let commits = repo.commits_since(tag.as_deref())?;
//! println!("{} commits since {:?}", commits.len(), tag);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::CommitRecord;
use crate::error::Result;
use std::path::Path;

/// Read access to the history since the last release point.
pub trait HistoryReader {
    /// Name of the most recent release tag reachable from HEAD.
    ///
    /// # Returns
    /// * `Ok(Some(name))` - The nearest annotated tag
    /// * `Ok(None)` - No tags, so the whole history is unreleased
    /// * `Err` - If the repository cannot be inspected
    fn latest_release_tag(&self) -> Result<Option<String>>;

    /// Commits after `tag` up to HEAD, newest first.
    ///
    /// With `tag == None` every commit reachable from HEAD is returned. An
    /// empty repository yields an empty list.
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>>;
}

/// Write access used to record a release.
pub trait RepositoryWriter {
    /// Stage exactly `paths` and commit them on HEAD.
    ///
    /// Returns the hash of the new commit.
    fn commit_files(&self, paths: &[&Path], message: &str) -> Result<String>;

    /// Create an annotated tag on HEAD. An existing tag is an error.
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;
}
