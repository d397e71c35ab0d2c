use crate::domain::Version;

/// Release tag naming: a fixed prefix followed by the version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagPattern {
    pub prefix: String,
}

impl TagPattern {
    /// Create a new tag pattern
    pub fn new(prefix: impl Into<String>) -> Self {
        TagPattern {
            prefix: prefix.into(),
        }
    }

    /// Format a version according to pattern
    /// Example: prefix="version", version=1.2.3 -> "version1.2.3"
    pub fn format(&self, version: &Version) -> String {
        format!("{}{}", self.prefix, version)
    }

    /// Extract the version from a tag produced by this pattern.
    pub fn version_of(&self, tag: &str) -> Option<Version> {
        let rest = tag.strip_prefix(&self.prefix)?;
        Version::parse(rest).ok()
    }
}

/// Commit message for the release commit.
pub fn commit_message(version: &Version) -> String {
    format!("Bump to version {}", version)
}

/// Annotation message for the release tag.
pub fn tag_message(version: &Version) -> String {
    format!("Tag for version {}", version)
}
