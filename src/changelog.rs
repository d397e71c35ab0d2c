//! Release section rendering and changelog file updates.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::NaiveDate;

use crate::analyzer::CommitGroups;
use crate::domain::{Category, Version};
use crate::error::{ReleaseError, Result};

/// Render the markdown section for a release.
///
/// The dated header is always present; a section is emitted only for a
/// category that holds at least one entry.
pub fn render(version: &Version, date: NaiveDate, groups: &CommitGroups) -> String {
    let mut notes = format!("# Version {} ({})\n\n", version, date.format("%Y-%m-%d"));

    for category in Category::ALL {
        let entries = groups.entries(category);
        if entries.is_empty() {
            continue;
        }
        notes.push_str("## ");
        notes.push_str(category.heading());
        notes.push('\n');
        for entry in entries {
            notes.push_str(entry);
        }
        notes.push('\n');
    }

    notes
}

/// Read the current changelog; a missing file reads as empty.
pub fn read(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(source) => Err(ReleaseError::ChangelogRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Prepend `notes` to the changelog at `path`.
pub fn prepend(path: &Path, notes: &str) -> Result<()> {
    let previous = read(path)?;
    fs::write(path, format!("{}{}", notes, previous)).map_err(|source| {
        ReleaseError::ChangelogWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}
