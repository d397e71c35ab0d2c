//! Analysis engine for grouping commits and deriving the next version

pub mod release_analyzer;

pub use release_analyzer::{CommitGroups, ReleaseAnalyzer};
