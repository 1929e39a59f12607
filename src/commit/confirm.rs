//! Operator confirmation of a proposed commit message.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

use crate::error::OperatorError;

/// Question shown after each proposal.
pub const CONFIRM_PROMPT: &str = "Do you want to use this commit message? (Y/n)";

/// Shown when the answer is neither yes nor no.
pub const INVALID_INPUT_NOTICE: &str = "Please answer 'y' or 'n'.";

/// Decision parsed from one line of operator input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accept,
    Reject,
    Invalid,
}

/// Parse an answer. Empty input accepts; matching is case-insensitive and
/// ignores surrounding whitespace.
pub fn parse_confirmation(input: &str) -> Confirmation {
    match input.trim().to_ascii_lowercase().as_str() {
        "" | "y" | "yes" => Confirmation::Accept,
        "n" | "no" => Confirmation::Reject,
        _ => Confirmation::Invalid,
    }
}

/// Header printed above each proposed message.
pub fn format_proposal(message: &str, attempt: u32, max_attempts: u32) -> String {
    format!("\nGenerated commit message (Attempt {attempt}/{max_attempts}):\n{message}")
}

/// The person deciding whether a proposed message is used.
pub trait Operator {
    /// Show a proposal together with its attempt number.
    fn present(&mut self, message: &str, attempt: u32, max_attempts: u32) -> Result<(), OperatorError>;

    /// Ask the confirmation question and return the raw answer.
    fn read_response(&mut self) -> Result<String, OperatorError>;

    /// Tell the operator `input` was not understood.
    fn report_invalid(&mut self, input: &str) -> Result<(), OperatorError>;
}

/// Operator on the process's stdin/stdout.
///
/// Uses a dialoguer prompt on a TTY and plain line reads otherwise, so
/// answers can be piped in.
pub struct TerminalOperator {
    interactive: bool,
}

impl TerminalOperator {
    pub fn new() -> Self {
        Self {
            interactive: io::stdin().is_terminal(),
        }
    }
}

impl Default for TerminalOperator {
    fn default() -> Self {
        Self::new()
    }
}

impl Operator for TerminalOperator {
    fn present(&mut self, message: &str, attempt: u32, max_attempts: u32) -> Result<(), OperatorError> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", format_proposal(message, attempt, max_attempts))?;
        out.flush()?;
        Ok(())
    }

    fn read_response(&mut self) -> Result<String, OperatorError> {
        if self.interactive {
            let answer: String = Input::new()
                .with_prompt(CONFIRM_PROMPT)
                .allow_empty(true)
                .interact_text()?;
            return Ok(answer);
        }

        let mut out = io::stdout().lock();
        write!(out, "{}: ", CONFIRM_PROMPT)?;
        out.flush()?;
        read_answer(&mut io::stdin().lock())
    }

    fn report_invalid(&mut self, input: &str) -> Result<(), OperatorError> {
        let mut out = io::stdout().lock();
        writeln!(out, "'{}' is not a valid answer. {}", input.trim(), INVALID_INPUT_NOTICE)?;
        Ok(())
    }
}

/// Read one answer line. End of input is an error rather than an implicit "yes".
pub fn read_answer<R: BufRead + ?Sized>(reader: &mut R) -> Result<String, OperatorError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(OperatorError::Closed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_empty_input_accepts() {
        assert_eq!(parse_confirmation(""), Confirmation::Accept);
        assert_eq!(parse_confirmation("   "), Confirmation::Accept);
        assert_eq!(parse_confirmation(""), parse_confirmation("y"));
    }

    #[test]
    fn test_yes_variants_accept() {
        for input in ["y", "Y", "yes", "YES", "Yes", " y \n"] {
            assert_eq!(parse_confirmation(input), Confirmation::Accept, "{input:?}");
        }
    }

    #[test]
    fn test_no_variants_reject() {
        for input in ["n", "N", "no", "NO", "No\n"] {
            assert_eq!(parse_confirmation(input), Confirmation::Reject, "{input:?}");
        }
    }

    #[test]
    fn test_other_input_is_invalid() {
        for input in ["maybe", "yep", "nope", "q", "1"] {
            assert_eq!(parse_confirmation(input), Confirmation::Invalid, "{input:?}");
        }
    }

    #[test]
    fn test_format_proposal() {
        assert_eq!(
            format_proposal("feat: add thing", 2, 5),
            "\nGenerated commit message (Attempt 2/5):\nfeat: add thing"
        );
    }

    #[test]
    fn test_read_answer_strips_newline() {
        let mut input = Cursor::new("yes\r\nno\n");
        assert_eq!(read_answer(&mut input).unwrap(), "yes");
        assert_eq!(read_answer(&mut input).unwrap(), "no");
    }

    #[test]
    fn test_read_answer_blank_line_is_empty_answer() {
        let mut input = Cursor::new("\n");
        assert_eq!(read_answer(&mut input).unwrap(), "");
    }

    #[test]
    fn test_read_answer_eof_is_closed() {
        let mut input = Cursor::new("");
        assert!(matches!(read_answer(&mut input), Err(OperatorError::Closed)));
    }
}
