//! Pure formatting functions for UI output.
//!
//! Everything here returns strings so the layout can be tested; printing
//! happens in the parent module.

use console::style;

use crate::cli::WorkflowResult;
use crate::domain::Category;

/// One line per category with its commit count, skipping empty ones.
pub fn format_counts(result: &WorkflowResult) -> Vec<String> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let count = result.groups.entries(category).len();
            (count > 0).then(|| format!("  {}: {}", category.heading(), count))
        })
        .collect()
}

/// Version change line, e.g. `1.2.3 -> 1.3.0 (tag version1.3.0)`.
pub fn format_version_change(result: &WorkflowResult) -> String {
    format!(
        "{} -> {} (tag {})",
        style(result.previous).red(),
        style(result.version).green(),
        style(&result.tag).cyan()
    )
}

/// Where the history was read from.
pub fn format_release_point(result: &WorkflowResult) -> String {
    match &result.release_point {
        Some(tag) => format!("Changes since tag '{}'", tag),
        None => "Changes since the beginning of history".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::CommitGroups;
    use crate::domain::Version;

    fn result() -> WorkflowResult {
        WorkflowResult {
            release_point: Some("version1.2.3".to_string()),
            previous: Version::new(1, 2, 3),
            version: Version::new(1, 3, 0),
            tag: "version1.3.0".to_string(),
            notes: String::new(),
            groups: CommitGroups {
                breaking: vec![],
                features: vec!["* a\n".to_string()],
                fixes: vec!["* b\n".to_string(), "* c\n".to_string()],
                skipped: 0,
            },
            commit: None,
            warnings: vec![],
        }
    }

    #[test]
    fn test_format_counts_skips_empty_categories() {
        assert_eq!(
            format_counts(&result()),
            vec!["  New Features: 1".to_string(), "  Bug Fixes: 2".to_string()]
        );
    }

    #[test]
    fn test_format_version_change() {
        console::set_colors_enabled(false);
        assert_eq!(
            format_version_change(&result()),
            "1.2.3 -> 1.3.0 (tag version1.3.0)"
        );
    }

    #[test]
    fn test_format_release_point() {
        let mut r = result();
        assert_eq!(format_release_point(&r), "Changes since tag 'version1.2.3'");
        r.release_point = None;
        assert_eq!(
            format_release_point(&r),
            "Changes since the beginning of history"
        );
    }
}
