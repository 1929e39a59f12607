//! Cleanup of raw completion text into a commit message.
//!
//! Models asked for "only the commit message" still occasionally wrap it in a
//! markdown fence or quotes. Those wrappers are stripped; the message itself
//! is never rewritten.

/// Strip surrounding whitespace, a single markdown code fence and matching
/// outer quotes or backticks.
pub fn clean_message(raw: &str) -> String {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```")
        && let Some(inner) = rest.strip_suffix("```")
    {
        // Drop an info string such as ```text on the opening fence line.
        text = match inner.split_once('\n') {
            Some((info, body)) if !info.trim().contains(' ') => body,
            _ => inner,
        }
        .trim();
    }

    for quote in ['"', '\'', '`'] {
        if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
            text = text[1..text.len() - 1].trim();
            break;
        }
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_message_is_trimmed() {
        assert_eq!(
            clean_message("  feat(diff): add hunk renderer \n"),
            "feat(diff): add hunk renderer"
        );
    }

    #[test]
    fn test_fenced_message() {
        assert_eq!(
            clean_message("```\nfix(git): handle unborn HEAD\n```"),
            "fix(git): handle unborn HEAD"
        );
    }

    #[test]
    fn test_fenced_message_with_info_string() {
        assert_eq!(
            clean_message("```text\nchore: bump deps\n```"),
            "chore: bump deps"
        );
    }

    #[test]
    fn test_quoted_message() {
        assert_eq!(clean_message("\"docs: update readme\""), "docs: update readme");
        assert_eq!(clean_message("`test: cover retry loop`"), "test: cover retry loop");
    }

    #[test]
    fn test_inner_quotes_are_kept() {
        assert_eq!(
            clean_message("fix(cli): accept \"yes\" as confirmation"),
            "fix(cli): accept \"yes\" as confirmation"
        );
    }
}
