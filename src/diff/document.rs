//! Aggregation of per-path blocks into one diff document.

use tracing::{debug, info};

use crate::error::DiffError;
use crate::git::{VersionControl, scan_status};

use super::file::render_change;
use super::record::ChangeRecord;

/// Every changed path's unified diff block, in status order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffDocument {
    text: String,
    file_count: usize,
}

impl DiffDocument {
    /// Concatenate blocks in the given order.
    pub fn from_blocks<I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut doc = DiffDocument::default();
        for block in blocks {
            doc.text.push_str(&block);
            doc.file_count += 1;
        }
        doc
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of paths that contributed a block.
    pub fn file_count(&self) -> usize {
        self.file_count
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }
}

/// Scan the working tree and build the complete diff document.
///
/// Paths without a visible difference are left out; an empty document means
/// there is nothing to commit.
pub fn build_diff_document<V: VersionControl + ?Sized>(vcs: &V) -> Result<DiffDocument, DiffError> {
    let entries = scan_status(vcs)?;

    let mut blocks = Vec::with_capacity(entries.len());
    for entry in &entries {
        let Some(change) = ChangeRecord::load(vcs, entry)? else {
            debug!("{} has no content on either side, skipping", entry.path);
            continue;
        };
        match render_change(&change) {
            Some(block) => blocks.push(block),
            None => debug!("{} ({}) produced no diff", change.path, change.kind),
        }
    }

    let document = DiffDocument::from_blocks(blocks);
    info!(
        "Diff covers {} of {} changed paths ({} bytes)",
        document.file_count(),
        entries.len(),
        document.len()
    );
    Ok(document)
}
