use crate::domain::CommitRecord;
use crate::error::{ReleaseError, Result};
use crate::git::{HistoryReader, RepositoryWriter};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A commit recorded through [`RepositoryWriter::commit_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCommit {
    pub hash: String,
    pub message: String,
    pub paths: Vec<PathBuf>,
}

/// Mock repository for testing without actual git operations
///
/// History is linear and stored oldest first; tags point at a position in
/// that history.
pub struct MockRepository {
    history: RefCell<Vec<CommitRecord>>,
    tags: RefCell<BTreeMap<String, (usize, String)>>,
    written: RefCell<Vec<RecordedCommit>>,
    fail_writes: Cell<bool>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            history: RefCell::new(Vec::new()),
            tags: RefCell::new(BTreeMap::new()),
            written: RefCell::new(Vec::new()),
            fail_writes: Cell::new(false),
        }
    }

    /// Append a commit on top of HEAD
    pub fn add_commit(&mut self, message: impl Into<String>, hash: impl Into<String>) {
        self.history
            .get_mut()
            .push(CommitRecord::new(message, hash));
    }

    /// Tag the current HEAD
    pub fn tag_head(&mut self, name: impl Into<String>) {
        let position = self.history.get_mut().len();
        self.tags
            .get_mut()
            .insert(name.into(), (position, String::new()));
    }

    /// Make every write operation fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Commits created through the writer, oldest first
    pub fn written_commits(&self) -> Vec<RecordedCommit> {
        self.written.borrow().clone()
    }

    /// Annotated tags with their messages, by name
    pub fn tag_messages(&self) -> BTreeMap<String, String> {
        self.tags
            .borrow()
            .iter()
            .map(|(name, (_, message))| (name.clone(), message.clone()))
            .collect()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.get() {
            return Err(ReleaseError::version_control("mock repository is read-only"));
        }
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryReader for MockRepository {
    fn latest_release_tag(&self) -> Result<Option<String>> {
        Ok(self
            .tags
            .borrow()
            .iter()
            .max_by_key(|(_, (position, _))| *position)
            .map(|(name, _)| name.clone()))
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>> {
        let start = match tag {
            Some(name) => {
                self.tags.borrow().get(name).map(|(p, _)| *p).ok_or_else(|| {
                    ReleaseError::version_control(format!("Cannot resolve tag '{}'", name))
                })?
            }
            None => 0,
        };

        Ok(self.history.borrow()[start..].iter().rev().cloned().collect())
    }
}

impl RepositoryWriter for MockRepository {
    fn commit_files(&self, paths: &[&Path], message: &str) -> Result<String> {
        self.check_writable()?;

        let mut history = self.history.borrow_mut();
        let hash = format!("{:040x}", history.len() + 0xbeef);
        history.push(CommitRecord::new(message, hash.clone()));

        self.written.borrow_mut().push(RecordedCommit {
            hash: hash.clone(),
            message: message.to_string(),
            paths: paths.iter().map(|p| p.to_path_buf()).collect(),
        });
        Ok(hash)
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.check_writable()?;

        let mut tags = self.tags.borrow_mut();
        if tags.contains_key(name) {
            return Err(ReleaseError::version_control(format!(
                "Tag '{}' already exists",
                name
            )));
        }
        let position = self.history.borrow().len();
        tags.insert(name.to_string(), (position, message.to_string()));
        Ok(())
    }
}
