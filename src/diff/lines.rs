//! Position-aligned line comparison.
//!
//! Lines are compared index by index rather than through a longest-common-
//! subsequence search. A line inserted near the top of a file therefore shows
//! up as a remove/add pair on every following line instead of as one clean
//! insertion.

/// Marker for one line of a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMarker {
    Context,
    Added,
    Removed,
}

impl LineMarker {
    /// Prefix character used in unified diff output.
    pub fn prefix(self) -> char {
        match self {
            LineMarker::Context => ' ',
            LineMarker::Added => '+',
            LineMarker::Removed => '-',
        }
    }
}

/// One marked line of a hunk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub marker: LineMarker,
    pub text: String,
}

impl DiffLine {
    fn new(marker: LineMarker, text: &str) -> Self {
        Self {
            marker,
            text: text.to_string(),
        }
    }
}

/// Ordered lines produced for a single file.
pub type DiffHunk = Vec<DiffLine>;

/// Split content into lines, normalizing `\r\n` to `\n`.
///
/// A trailing newline ends the last line; it does not start an empty one.
pub fn split_lines(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n");
    let body = normalized.strip_suffix('\n').unwrap_or(&normalized);
    if normalized.is_empty() {
        return Vec::new();
    }
    body.split('\n').map(str::to_string).collect()
}

/// Every line marked as unchanged context.
pub fn context_hunk<S: AsRef<str>>(lines: &[S]) -> DiffHunk {
    lines
        .iter()
        .map(|line| DiffLine::new(LineMarker::Context, line.as_ref()))
        .collect()
}

/// Compare `old` and `new` position by position.
///
/// Returns an empty hunk when both sides are equal.
pub fn line_diff<S: AsRef<str>>(old: &[S], new: &[S]) -> DiffHunk {
    let same = old.len() == new.len()
        && old.iter().zip(new).all(|(a, b)| a.as_ref() == b.as_ref());
    if same {
        return Vec::new();
    }

    let mut hunk = Vec::with_capacity(old.len().max(new.len()));
    for i in 0..old.len().max(new.len()) {
        match (old.get(i), new.get(i)) {
            (None, Some(added)) => hunk.push(DiffLine::new(LineMarker::Added, added.as_ref())),
            (Some(removed), None) => {
                hunk.push(DiffLine::new(LineMarker::Removed, removed.as_ref()))
            }
            (Some(before), Some(after)) if before.as_ref() != after.as_ref() => {
                hunk.push(DiffLine::new(LineMarker::Removed, before.as_ref()));
                hunk.push(DiffLine::new(LineMarker::Added, after.as_ref()));
            }
            (Some(same), Some(_)) => hunk.push(DiffLine::new(LineMarker::Context, same.as_ref())),
            (None, None) => unreachable!("index below the longer side's length"),
        }
    }
    hunk
}

/// Render hunk lines with their marker prefix, one per line.
pub fn render_hunk(hunk: &[DiffLine]) -> String {
    let mut out = String::new();
    for line in hunk {
        out.push(line.marker.prefix());
        out.push_str(&line.text);
        out.push('\n');
    }
    out
}
