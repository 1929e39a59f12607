//! Working tree status classification.

use std::fmt;

use git2::Status;
use tracing::debug;

use crate::error::VcsError;

use super::repository::VersionControl;

/// State of a path on one side of the index (staging area or working tree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileState {
    Unmodified,
    Untracked,
    Added,
    Modified,
    Deleted,
    Renamed,
    TypeChanged,
}

impl fmt::Display for FileState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FileState::Unmodified => "Unmodified",
            FileState::Untracked => "Untracked",
            FileState::Added => "Added",
            FileState::Modified => "Modified",
            FileState::Deleted => "Deleted",
            FileState::Renamed => "Renamed",
            FileState::TypeChanged => "TypeChanged",
        };
        f.write_str(s)
    }
}

/// A changed path with its staging and working tree state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub path: String,
    pub staging: FileState,
    pub worktree: FileState,
}

impl StatusEntry {
    pub fn new(path: impl Into<String>, staging: FileState, worktree: FileState) -> Self {
        Self {
            path: path.into(),
            staging,
            worktree,
        }
    }

    /// Whether the path is unknown to both the index and the reference commit.
    pub fn is_untracked(&self) -> bool {
        self.staging == FileState::Untracked
    }

    /// Whether either side reports a difference.
    pub fn is_changed(&self) -> bool {
        self.staging != FileState::Unmodified || self.worktree != FileState::Unmodified
    }
}

/// Split git2 status flags into `(staging, worktree)` states.
///
/// A path that only exists in the working tree is reported as untracked on
/// both sides so callers can tell it apart from a staged addition.
pub fn classify(status: Status) -> (FileState, FileState) {
    let index_bits = Status::INDEX_NEW
        | Status::INDEX_MODIFIED
        | Status::INDEX_DELETED
        | Status::INDEX_RENAMED
        | Status::INDEX_TYPECHANGE;

    if status.contains(Status::WT_NEW) && !status.intersects(index_bits) {
        return (FileState::Untracked, FileState::Untracked);
    }

    if status.contains(Status::CONFLICTED) {
        return (FileState::Modified, FileState::Modified);
    }

    let staging = if status.contains(Status::INDEX_NEW) {
        FileState::Added
    } else if status.contains(Status::INDEX_DELETED) {
        FileState::Deleted
    } else if status.contains(Status::INDEX_RENAMED) {
        FileState::Renamed
    } else if status.contains(Status::INDEX_TYPECHANGE) {
        FileState::TypeChanged
    } else if status.contains(Status::INDEX_MODIFIED) {
        FileState::Modified
    } else {
        FileState::Unmodified
    };

    let worktree = if status.contains(Status::WT_DELETED) {
        FileState::Deleted
    } else if status.contains(Status::WT_RENAMED) {
        FileState::Renamed
    } else if status.contains(Status::WT_TYPECHANGE) {
        FileState::TypeChanged
    } else if status.contains(Status::WT_MODIFIED) {
        FileState::Modified
    } else if status.contains(Status::WT_NEW) {
        FileState::Added
    } else {
        FileState::Unmodified
    };

    (staging, worktree)
}

/// List every changed path, in the order the repository reports them.
pub fn scan_status<V: VersionControl + ?Sized>(vcs: &V) -> Result<Vec<StatusEntry>, VcsError> {
    let entries: Vec<StatusEntry> = vcs
        .status()?
        .into_iter()
        .filter(StatusEntry::is_changed)
        .collect();

    debug!("Status scan found {} changed paths", entries.len());
    for entry in &entries {
        debug!("  {} (staged: {}, worktree: {})", entry.path, entry.staging, entry.worktree);
    }

    Ok(entries)
}
