// Shared fixtures for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use git2::Repository;
use release_notes::git::{Git2Repository, RepositoryWriter};
use tempfile::TempDir;

/// A scratch git repository with a committer identity configured.
pub struct Fixture {
    pub dir: TempDir,
    pub repo: Git2Repository,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let repo = Repository::init(dir.path()).expect("init repository");
        {
            let mut config = repo.config().expect("repository config");
            config.set_str("user.name", "Release Bot").unwrap();
            config.set_str("user.email", "release@example.com").unwrap();
        }
        Fixture {
            dir,
            repo: Git2Repository::from_git2(repo),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `content` to `file` and commit it with `message`.
    pub fn commit(&self, file: &str, content: &str, message: &str) -> String {
        fs::write(self.path(file), content).expect("write file");
        self.repo
            .commit_files(&[Path::new(file)], message)
            .expect("commit")
    }

    pub fn tag(&self, name: &str) {
        self.repo
            .create_annotated_tag(name, &format!("Tag {}", name))
            .expect("tag");
    }

    /// Commit a `package.json` holding `version`.
    pub fn manifest(&self, version: &str) {
        self.commit(
            "package.json",
            &format!("{{\n  \"name\": \"demo\",\n  \"version\": \"{}\"\n}}\n", version),
            "chore: add manifest",
        );
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path(name)).expect("read file")
    }
}
