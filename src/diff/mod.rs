//! Unified diff synthesis for the working tree.

pub mod document;
pub mod file;
pub mod lines;
pub mod record;

pub use document::{DiffDocument, build_diff_document};
pub use file::{blob_hash, render_change};
pub use lines::{DiffHunk, DiffLine, LineMarker, context_hunk, line_diff, split_lines};
pub use record::{ChangeKind, ChangeRecord};
