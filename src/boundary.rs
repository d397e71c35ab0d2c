use std::fmt;

use crate::domain::Version;

/// Non-fatal conditions noticed while preparing a release.
/// These are reported to the user but do not stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No release tag exists, so the whole history is being released
    NoReleasePoint { commits: usize },
    /// Commits without a recognised prefix were left out of the notes
    UnclassifiedCommits { skipped: usize },
    /// The release carries no classified commits and keeps the version
    EmptyRelease { version: Version },
    /// The last release tag names a different version than the manifest
    TagVersionMismatch {
        tag: String,
        tag_version: Version,
        manifest_version: Version,
    },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReleasePoint { commits } => {
                write!(
                    f,
                    "No release tag found; using all {} commits in history",
                    commits
                )
            }
            BoundaryWarning::UnclassifiedCommits { skipped } => {
                let noun = if *skipped == 1 { "commit" } else { "commits" };
                write!(
                    f,
                    "{} {} without a breaking-change:/feature:/fix: prefix left out",
                    skipped, noun
                )
            }
            BoundaryWarning::EmptyRelease { version } => {
                write!(
                    f,
                    "Releasing {} with no listed changes; version is unchanged",
                    version
                )
            }
            BoundaryWarning::TagVersionMismatch {
                tag,
                tag_version,
                manifest_version,
            } => {
                write!(
                    f,
                    "Tag '{}' is version {} but the manifest says {}",
                    tag, tag_version, manifest_version
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unclassified_commits_display() {
        let one = BoundaryWarning::UnclassifiedCommits { skipped: 1 };
        assert!(one.to_string().starts_with("1 commit without"));

        let many = BoundaryWarning::UnclassifiedCommits { skipped: 4 };
        assert!(many.to_string().starts_with("4 commits without"));
    }

    #[test]
    fn test_tag_version_mismatch_display() {
        let warning = BoundaryWarning::TagVersionMismatch {
            tag: "version1.0.0".to_string(),
            tag_version: Version::new(1, 0, 0),
            manifest_version: Version::new(1, 1, 0),
        };
        assert_eq!(
            warning.to_string(),
            "Tag 'version1.0.0' is version 1.0.0 but the manifest says 1.1.0"
        );
    }

    #[test]
    fn test_empty_release_display() {
        let warning = BoundaryWarning::EmptyRelease {
            version: Version::new(0, 2, 0),
        };
        assert!(warning.to_string().contains("0.2.0"));
    }
}
