use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for release-notes operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("No new indicated changes since last tag")]
    NoNewCommits,

    #[error("No breaking-change, feature or fix commits since last tag")]
    NothingToRelease,

    #[error("Cannot read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid manifest {}: {reason}", .path.display())]
    ManifestFormat { path: PathBuf, reason: String },

    #[error("Cannot write manifest {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read changelog {}: {source}", .path.display())]
    ChangelogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write changelog {}: {source}", .path.display())]
    ChangelogWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Version control error: {0}")]
    VersionControl(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),
}

/// Convenience type alias for Results in release-notes
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version control error with context
    pub fn version_control(msg: impl Into<String>) -> Self {
        ReleaseError::VersionControl(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseError::Version(msg.into())
    }

    /// Create a manifest format error for `path`
    pub fn manifest_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ReleaseError::ManifestFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Process exit status for this error.
    ///
    /// Every failure is fatal; `NoNewCommits` shares the generic status so
    /// CI wrappers treat "nothing to release" as a stop condition.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_new_commits_message() {
        let err = ReleaseError::NoNewCommits;
        assert_eq!(err.to_string(), "No new indicated changes since last tag");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_manifest_errors_name_the_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = ReleaseError::ManifestRead {
            path: PathBuf::from("pkg/package.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("pkg/package.json"));
        assert!(msg.contains("file not found"));

        let err = ReleaseError::manifest_format("package.json", "missing version");
        assert_eq!(
            err.to_string(),
            "Invalid manifest package.json: missing version"
        );
    }

    #[test]
    fn test_error_from_git2() {
        let git_err = git2::Error::from_str("reference not found");
        let err: ReleaseError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::version_control("x"), "Version control error"),
            (ReleaseError::version("x"), "Version parsing error"),
            (ReleaseError::manifest_format("m", "x"), "Invalid manifest"),
            (ReleaseError::NothingToRelease, "No breaking-change"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
            assert_eq!(err.exit_code(), 1);
        }
    }
}
