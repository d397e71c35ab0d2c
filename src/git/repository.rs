use crate::domain::CommitRecord;
use crate::error::{ReleaseError, Result};
use crate::git::{HistoryReader, RepositoryWriter};
use git2::{
    DescribeFormatOptions, DescribeOptions, ErrorCode, Index, IndexEntry, IndexTime,
    Repository as Git2Repo, Sort,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Root of the work tree
    pub fn workdir(&self) -> Result<&Path> {
        self.repo
            .workdir()
            .ok_or_else(|| ReleaseError::version_control("Repository has no work tree"))
    }

    fn head_commit(&self) -> Result<Option<git2::Commit<'_>>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?)),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Index entry holding the current work-tree content of `relative`.
    ///
    /// The file mode recorded in `index` is kept; new files are regular files.
    fn index_entry(&self, index: &Index, workdir: &Path, relative: &Path) -> Result<IndexEntry> {
        let contents = fs::read(workdir.join(relative)).map_err(|e| {
            ReleaseError::version_control(format!("Cannot read {}: {}", relative.display(), e))
        })?;

        let name = relative
            .components()
            .map(|component| component.as_os_str().to_str())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| {
                ReleaseError::version_control(format!(
                    "{} is not a valid UTF-8 path",
                    relative.display()
                ))
            })?
            .join("/");

        let mode = index
            .get_path(relative, 0)
            .map(|existing| existing.mode)
            .unwrap_or(0o100644);

        Ok(IndexEntry {
            ctime: IndexTime::new(0, 0),
            mtime: IndexTime::new(0, 0),
            dev: 0,
            ino: 0,
            mode,
            uid: 0,
            gid: 0,
            file_size: u32::try_from(contents.len()).unwrap_or(u32::MAX),
            id: self.repo.blob(&contents)?,
            flags: 0,
            flags_extended: 0,
            path: name.into_bytes(),
        })
    }

    /// Express `path` relative to the work tree, as the index expects.
    fn index_path(&self, path: &Path) -> Result<PathBuf> {
        if path.is_relative() {
            return Ok(path.to_path_buf());
        }

        let workdir = self.workdir()?;
        if let Ok(relative) = path.strip_prefix(workdir) {
            return Ok(relative.to_path_buf());
        }

        let canonical_root = workdir.canonicalize().map_err(|e| {
            ReleaseError::version_control(format!("Cannot resolve work tree: {}", e))
        })?;
        let canonical = path.canonicalize().map_err(|e| {
            ReleaseError::version_control(format!("Cannot resolve {}: {}", path.display(), e))
        })?;

        canonical
            .strip_prefix(&canonical_root)
            .map(Path::to_path_buf)
            .map_err(|_| {
                ReleaseError::version_control(format!(
                    "{} is outside the work tree {}",
                    path.display(),
                    workdir.display()
                ))
            })
    }
}

impl HistoryReader for Git2Repository {
    fn latest_release_tag(&self) -> Result<Option<String>> {
        if self.repo.tag_names(None)?.is_empty() {
            return Ok(None);
        }

        let describe = match self.repo.describe(&DescribeOptions::new()) {
            Ok(describe) => describe,
            Err(e) if e.code() == ErrorCode::NotFound || e.code() == ErrorCode::UnbornBranch => {
                debug!("no annotated tag reachable from HEAD");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let tag = describe.format(Some(&format))?;

        debug!(tag = %tag, "found release point");
        Ok(Some(tag))
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<CommitRecord>> {
        let Some(head) = self.head_commit()? else {
            return Ok(Vec::new());
        };

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push(head.id())?;

        if let Some(tag) = tag {
            let target = self
                .repo
                .find_reference(&format!("refs/tags/{}", tag))
                .and_then(|reference| reference.peel_to_commit())
                .map_err(|e| {
                    ReleaseError::version_control(format!("Cannot resolve tag '{}': {}", tag, e))
                })?;
            revwalk.hide(target.id())?;
        }

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            let subject = commit
                .message()
                .and_then(|message| message.lines().next())
                .unwrap_or_default();

            commits.push(CommitRecord::new(subject, oid.to_string()));
        }

        debug!(count = commits.len(), since = ?tag, "read commit history");
        Ok(commits)
    }
}

impl RepositoryWriter for Git2Repository {
    fn commit_files(&self, paths: &[&Path], message: &str) -> Result<String> {
        let parent = self.head_commit()?;

        // Start from HEAD's tree so whatever else sits in the index stays out
        let mut release_index = Index::new()?;
        if let Some(parent) = &parent {
            release_index.read_tree(&parent.tree()?)?;
        }

        let workdir = self.workdir()?;
        let mut staged = Vec::with_capacity(paths.len());

        for path in paths {
            let relative = self.index_path(path)?;
            let entry = self.index_entry(&release_index, workdir, &relative)?;
            release_index.add(&entry).map_err(|e| {
                ReleaseError::version_control(format!(
                    "Cannot stage {}: {}",
                    relative.display(),
                    e
                ))
            })?;
            staged.push(relative);
        }

        let tree_id = release_index.write_tree_to(&self.repo)?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;

        // Bring the on-disk index in line for the committed paths only
        let mut index = self.repo.index()?;
        index.read(false)?;
        for relative in &staged {
            index.add_path(relative)?;
        }
        index.write()?;

        info!(commit = %oid, "created release commit");
        Ok(oid.to_string())
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let reference_name = format!("refs/tags/{}", name);
        if self.repo.find_reference(&reference_name).is_ok() {
            return Err(ReleaseError::version_control(format!(
                "Tag '{}' already exists",
                name
            )));
        }

        let head = self
            .head_commit()?
            .ok_or_else(|| ReleaseError::version_control("Cannot tag an empty repository"))?;
        let signature = self.repo.signature()?;

        self.repo
            .tag(name, head.as_object(), &signature, message, false)
            .map_err(|e| ReleaseError::version_control(format!("Cannot create tag: {}", e)))?;

        info!(tag = %name, "created release tag");
        Ok(())
    }
}
