/// A commit as read from the log: subject line plus full identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub message: String,
    pub hash: String,
}

impl CommitRecord {
    pub fn new(message: impl Into<String>, hash: impl Into<String>) -> Self {
        CommitRecord {
            message: message.into(),
            hash: hash.into(),
        }
    }

    /// The first six characters of the hash, used as link text.
    pub fn short_hash(&self) -> &str {
        match self.hash.char_indices().nth(6) {
            Some((idx, _)) => &self.hash[..idx],
            None => &self.hash,
        }
    }
}

/// Release-note category a commit falls into.
///
/// Variants are declared in priority order; [`Category::ALL`] is the order
/// in which prefixes are tested and sections are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Breaking,
    Feature,
    Fix,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Breaking, Category::Feature, Category::Fix];

    /// Literal message prefix, matched case-insensitively.
    pub fn prefix(self) -> &'static str {
        match self {
            Category::Breaking => "breaking-change:",
            Category::Feature => "feature:",
            Category::Fix => "fix:",
        }
    }

    /// Section heading used in the changelog.
    pub fn heading(self) -> &'static str {
        match self {
            Category::Breaking => "Breaking Changes",
            Category::Feature => "New Features",
            Category::Fix => "Bug Fixes",
        }
    }

    /// Classify a commit message by its prefix.
    ///
    /// Returns `None` for empty or unprefixed messages.
    pub fn classify(message: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|category| starts_with_ignore_case(message, category.prefix()))
    }
}

fn starts_with_ignore_case(message: &str, prefix: &str) -> bool {
    message
        .as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

/// A commit that matched a category, ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedCommit {
    pub category: Category,
    pub record: CommitRecord,
}

impl ClassifiedCommit {
    /// Classify a record, or `None` if it carries no recognised prefix.
    pub fn from_record(record: CommitRecord) -> Option<Self> {
        let category = Category::classify(&record.message)?;
        Some(ClassifiedCommit { category, record })
    }

    /// Message with the category prefix cut off by length, not trimmed.
    pub fn description(&self) -> &str {
        &self.record.message[self.category.prefix().len()..]
    }

    /// Markdown list entry linking the commit under `commit_url`.
    ///
    /// `feature: add X` on `abcdef123456` renders as
    /// `*  add X ([abcdef](https://host/commit/abcdef123456))` plus a newline.
    pub fn entry(&self, commit_url: &str) -> String {
        format!(
            "* {} ([{}]({}/{}))\n",
            self.description(),
            self.record.short_hash(),
            commit_url.trim_end_matches('/'),
            self.record.hash
        )
    }
}
