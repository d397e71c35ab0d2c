use crate::domain::{BumpFlags, Category, ClassifiedCommit, CommitRecord};
use tracing::debug;

/// Rendered entries per category, in commit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitGroups {
    pub breaking: Vec<String>,
    pub features: Vec<String>,
    pub fixes: Vec<String>,
    /// Commits that matched no prefix.
    pub skipped: usize,
}

impl CommitGroups {
    pub fn entries(&self, category: Category) -> &[String] {
        match category {
            Category::Breaking => &self.breaking,
            Category::Feature => &self.features,
            Category::Fix => &self.fixes,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<String> {
        match category {
            Category::Breaking => &mut self.breaking,
            Category::Feature => &mut self.features,
            Category::Fix => &mut self.fixes,
        }
    }

    pub fn flags(&self) -> BumpFlags {
        BumpFlags {
            any_breaking: !self.breaking.is_empty(),
            any_feature: !self.features.is_empty(),
            any_fix: !self.fixes.is_empty(),
        }
    }

    /// Number of classified commits across all categories.
    pub fn len(&self) -> usize {
        self.breaking.len() + self.features.len() + self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies commits into release-note groups
pub struct ReleaseAnalyzer {
    commit_url: String,
}

impl ReleaseAnalyzer {
    /// Create an analyzer linking entries under `commit_url`
    pub fn new(commit_url: impl Into<String>) -> Self {
        ReleaseAnalyzer {
            commit_url: commit_url.into(),
        }
    }

    /// Group commits by category, dropping those without a known prefix
    pub fn group(&self, commits: &[CommitRecord]) -> CommitGroups {
        let mut groups = CommitGroups::default();

        for record in commits {
            match ClassifiedCommit::from_record(record.clone()) {
                Some(commit) => {
                    debug!(hash = %record.short_hash(), category = ?commit.category, "classified commit");
                    let entry = commit.entry(&self.commit_url);
                    groups.entries_mut(commit.category).push(entry);
                }
                None => {
                    debug!(hash = %record.short_hash(), "skipped unprefixed commit");
                    groups.skipped += 1;
                }
            }
        }

        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Version;

    const URL: &str = "https://example.com/commit";

    fn records(messages: &[&str]) -> Vec<CommitRecord> {
        messages
            .iter()
            .enumerate()
            .map(|(i, m)| CommitRecord::new(*m, format!("{:040x}", i + 1)))
            .collect()
    }

    fn next_version(
        analyzer: &ReleaseAnalyzer,
        current: Version,
        commits: &[CommitRecord],
    ) -> Version {
        current.derive(analyzer.group(commits).flags()).unwrap()
    }

    #[test]
    fn test_fix_only_bumps_patch() {
        let analyzer = ReleaseAnalyzer::new(URL);
        let commits = records(&["fix: a", "chore: b", "FIX: c"]);
        assert_eq!(
            next_version(&analyzer, Version::new(1, 2, 3), &commits),
            Version::new(1, 2, 4)
        );
    }

    #[test]
    fn test_feature_bumps_minor_regardless_of_fixes() {
        let analyzer = ReleaseAnalyzer::new(URL);
        let commits = records(&["fix: a", "feature: b", "fix: c"]);
        assert_eq!(
            next_version(&analyzer, Version::new(1, 2, 3), &commits),
            Version::new(1, 3, 0)
        );
    }

    #[test]
    fn test_breaking_bumps_major_regardless_of_others() {
        let analyzer = ReleaseAnalyzer::new(URL);
        let commits = records(&["feature: a", "Breaking-Change: b", "fix: c"]);
        assert_eq!(
            next_version(&analyzer, Version::new(1, 2, 3), &commits),
            Version::new(2, 0, 0)
        );
    }

    #[test]
    fn test_unclassified_commits_leave_version_unchanged() {
        let analyzer = ReleaseAnalyzer::new(URL);
        let commits = records(&["docs: readme", "", "Merge branch 'main'"]);
        assert_eq!(
            next_version(&analyzer, Version::new(0, 3, 1), &commits),
            Version::new(0, 3, 1)
        );
    }

    #[test]
    fn test_group_preserves_commit_order() {
        let analyzer = ReleaseAnalyzer::new(URL);
        let commits = records(&["fix: first", "feature: only", "fix: second", "misc"]);
        let groups = analyzer.group(&commits);

        assert_eq!(groups.fixes.len(), 2);
        assert!(groups.fixes[0].starts_with("*  first "));
        assert!(groups.fixes[1].starts_with("*  second "));
        assert_eq!(groups.features.len(), 1);
        assert!(groups.breaking.is_empty());
        assert_eq!(groups.skipped, 1);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_flags_reflect_non_empty_groups() {
        let analyzer = ReleaseAnalyzer::new(URL);
        let groups = analyzer.group(&records(&["feature: a"]));
        assert_eq!(
            groups.flags(),
            BumpFlags {
                any_breaking: false,
                any_feature: true,
                any_fix: false,
            }
        );
    }

    #[test]
    fn test_empty_history() {
        let analyzer = ReleaseAnalyzer::new(URL);
        let groups = analyzer.group(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.skipped, 0);
    }
}
