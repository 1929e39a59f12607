//! Stage every changed path and commit with the accepted message.

use git2::Oid;
use tracing::{debug, info};

use crate::error::CommitError;
use crate::git::{VersionControl, scan_status};

/// Re-scan the working tree, stage each changed path, and commit.
///
/// Paths are re-read at commit time, so edits made while the operator was
/// reviewing are included. The author identity is resolved after staging.
pub fn commit_changes<V: VersionControl + ?Sized>(vcs: &V, message: String) -> Result<Oid, CommitError> {
    let entries = scan_status(vcs).map_err(CommitError::Rescan)?;

    for entry in &entries {
        debug!("Staging {} ({}/{})", entry.path, entry.staging, entry.worktree);
        vcs.stage_path(&entry.path)?;
    }

    let author = vcs.resolve_identity()?;
    let oid = vcs.commit(&message, &author)?;

    info!(
        "Committed {} path(s) as {} <{}>: {}",
        entries.len(),
        author.name,
        author.email,
        oid
    );
    Ok(oid)
}

/// First line of a commit message.
pub fn subject_line(message: &str) -> &str {
    message.lines().next().unwrap_or("").trim()
}
