use crate::error::{ReleaseError, Result};
use std::fmt;

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a plain `MAJOR.MINOR.PATCH` string.
    ///
    /// Pre-release and build metadata are rejected: the manifest only ever
    /// carries a release triple.
    pub fn parse(text: &str) -> Result<Self> {
        let parsed = semver::Version::parse(text.trim())
            .map_err(|e| ReleaseError::version(format!("Invalid version '{}': {}", text, e)))?;

        if !parsed.pre.is_empty() || !parsed.build.is_empty() {
            return Err(ReleaseError::version(format!(
                "Invalid version '{}': expected MAJOR.MINOR.PATCH",
                text
            )));
        }

        Ok(Version::new(parsed.major, parsed.minor, parsed.patch))
    }

    /// Bump version according to bump type
    ///
    /// Fails only when the bumped component is already `u64::MAX`.
    pub fn bump(&self, bump_type: Bump) -> Result<Self> {
        let overflow = || {
            ReleaseError::version(format!(
                "Version {} cannot take a {:?} bump",
                self, bump_type
            ))
        };

        Ok(match bump_type {
            Bump::Major => Version {
                major: self.major.checked_add(1).ok_or_else(overflow)?,
                minor: 0,
                patch: 0,
            },
            Bump::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(overflow)?,
                patch: 0,
            },
            Bump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(overflow)?,
            },
        })
    }

    /// Next version given which categories are non-empty.
    ///
    /// The highest-priority flag wins; with no flag set the version is
    /// returned unchanged.
    pub fn derive(&self, flags: BumpFlags) -> Result<Self> {
        match Bump::from_flags(flags) {
            Some(bump) => self.bump(bump),
            None => Ok(*self),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    Patch,
}

impl Bump {
    /// Pick the single bump rule for a release, Major > Minor > Patch.
    pub fn from_flags(flags: BumpFlags) -> Option<Self> {
        if flags.any_breaking {
            Some(Bump::Major)
        } else if flags.any_feature {
            Some(Bump::Minor)
        } else if flags.any_fix {
            Some(Bump::Patch)
        } else {
            None
        }
    }
}

/// Which commit categories are present in a release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpFlags {
    pub any_breaking: bool,
    pub any_feature: bool,
    pub any_fix: bool,
}
