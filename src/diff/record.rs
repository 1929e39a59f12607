//! Per-path change records with their before/after content.

use std::fmt;

use crate::error::DiffError;
use crate::git::{StatusEntry, VersionControl};

/// How a path changed relative to the reference commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Untracked,
    Added,
    Modified,
    Deleted,
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeKind::Untracked => write!(f, "Untracked"),
            ChangeKind::Added => write!(f, "Added"),
            ChangeKind::Modified => write!(f, "Modified"),
            ChangeKind::Deleted => write!(f, "Deleted"),
        }
    }
}

/// A changed path and the content on either side of the change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub path: String,
    pub kind: ChangeKind,
    pub old_content: Option<Vec<u8>>,
    pub new_content: Option<Vec<u8>>,
}

impl ChangeRecord {
    /// Read both sides of `entry` and derive its kind.
    ///
    /// Returns `Ok(None)` when the path exists neither in the reference commit
    /// nor on disk (e.g. staged and then removed again).
    pub fn load<V: VersionControl + ?Sized>(
        vcs: &V,
        entry: &StatusEntry,
    ) -> Result<Option<Self>, DiffError> {
        let path = entry.path.clone();

        let new_content =
            vcs.read_working_file(&path)
                .map_err(|source| DiffError::ContentRead {
                    path: path.clone(),
                    source,
                })?;

        if entry.is_untracked() {
            return Ok(new_content.map(|content| ChangeRecord {
                path,
                kind: ChangeKind::Untracked,
                old_content: None,
                new_content: Some(content),
            }));
        }

        let old_content =
            vcs.read_reference_blob(&path)
                .map_err(|source| DiffError::BlobRead {
                    path: path.clone(),
                    source,
                })?;

        let kind = match (&old_content, &new_content) {
            (None, Some(_)) => ChangeKind::Added,
            (Some(_), None) => ChangeKind::Deleted,
            (Some(_), Some(_)) => ChangeKind::Modified,
            (None, None) => return Ok(None),
        };

        Ok(Some(ChangeRecord {
            path,
            kind,
            old_content,
            new_content,
        }))
    }
}
