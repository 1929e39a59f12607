//! Unified diff blocks for a single path.

use git2::{ObjectType, Oid};
use tracing::{debug, warn};

use super::lines::{context_hunk, line_diff, render_hunk, split_lines};
use super::record::{ChangeKind, ChangeRecord};

/// Index value for the absent side of an addition or deletion.
const NULL_INDEX: &str = "0000000";

/// Regular non-executable file mode.
const FILE_MODE: &str = "100644";

/// Render the unified diff block for one change.
///
/// Returns `None` only when a modified path is byte-identical on both sides.
pub fn render_change(change: &ChangeRecord) -> Option<String> {
    match change.kind {
        ChangeKind::Untracked | ChangeKind::Added => {
            let content = change.new_content.as_deref().unwrap_or_default();
            Some(render_new_file(&change.path, content))
        }
        ChangeKind::Deleted => {
            let content = change.old_content.as_deref().unwrap_or_default();
            Some(render_deleted_file(&change.path, content))
        }
        ChangeKind::Modified => {
            let old = change.old_content.as_deref().unwrap_or_default();
            let new = change.new_content.as_deref().unwrap_or_default();
            render_modified_file(&change.path, old, new)
        }
    }
}

/// Git blob object id for `content`, as full lowercase hex.
pub fn blob_hash(content: &[u8]) -> String {
    match Oid::hash_object(ObjectType::Blob, content) {
        Ok(oid) => oid.to_string(),
        Err(e) => {
            warn!("Failed to hash blob content: {e}");
            NULL_INDEX.to_string()
        }
    }
}

fn render_new_file(path: &str, content: &[u8]) -> String {
    let lines = split_lines(&String::from_utf8_lossy(content));

    let mut out = format!(
        "diff --git a/{path} b/{path}\n\
         new file mode {FILE_MODE}\n\
         index {NULL_INDEX}..{hash}\n\
         --- /dev/null\n\
         +++ b/{path}\n\
         @@ -0,0 +1,{count} @@\n",
        hash = blob_hash(content),
        count = lines.len(),
    );
    for line in &lines {
        out.push('+');
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn render_deleted_file(path: &str, content: &[u8]) -> String {
    let lines = split_lines(&String::from_utf8_lossy(content));

    let mut out = format!(
        "diff --git a/{path} b/{path}\n\
         deleted file mode {FILE_MODE}\n\
         index {hash}..{NULL_INDEX}\n\
         --- a/{path}\n\
         +++ /dev/null\n\
         @@ -1,{count} +0,0 @@\n",
        hash = blob_hash(content),
        count = lines.len(),
    );
    for line in &lines {
        out.push('-');
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn render_modified_file(path: &str, old: &[u8], new: &[u8]) -> Option<String> {
    if old == new {
        return None;
    }

    let old_lines = split_lines(&String::from_utf8_lossy(old));
    let new_lines = split_lines(&String::from_utf8_lossy(new));
    let mut hunk = line_diff(&old_lines, &new_lines);
    if hunk.is_empty() {
        debug!("{path} differs only in line endings or a trailing newline");
        hunk = context_hunk(&new_lines);
    }

    Some(format!(
        "diff --git a/{path} b/{path}\n\
         index {old_hash}..{new_hash} {FILE_MODE}\n\
         --- a/{path}\n\
         +++ b/{path}\n\
         @@ -1,{old_count} +1,{new_count} @@\n\
         {body}",
        old_hash = blob_hash(old),
        new_hash = blob_hash(new),
        old_count = old_lines.len(),
        new_count = new_lines.len(),
        body = render_hunk(&hunk),
    ))
}
