//! Git operations using git2-rs.

pub mod identity;
pub mod repository;
pub mod status;

pub use identity::{Identity, resolve_identity};
pub use repository::{GitRepository, VersionControl};
pub use status::{FileState, StatusEntry, classify, scan_status};
