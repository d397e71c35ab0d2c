//! Domain logic - pure release rules independent of git operations

pub mod commit;
pub mod tag;
pub mod version;

pub use commit::{Category, ClassifiedCommit, CommitRecord};
pub use tag::TagPattern;
pub use version::{Bump, BumpFlags, Version};
