//! gitai - A CLI tool that proposes commit messages for working tree changes.
//!
//! # Overview
//!
//! gitai diffs the working tree against HEAD, asks a chat-completions service
//! for a conventional commit message, lets the operator accept or reject each
//! proposal, and commits every change with the accepted message.

pub mod commit;
pub mod config;
pub mod diff;
pub mod error;
pub mod git;
pub mod llm;
pub mod logging;
pub mod pipeline;

// Re-export commonly used types
pub use commit::{MessageRetryLoop, Operator, RetryOutcome, TerminalOperator};
pub use config::Config;
pub use diff::{DiffDocument, build_diff_document};
pub use error::{CommitError, CompletionError, ConfigError, DiffError, GitaiError, OperatorError, RetryError, VcsError};
pub use git::{GitRepository, VersionControl};
pub use llm::{ChatCompletionClient, CompletionService};
pub use pipeline::{RunOutcome, run, run_with_setup};
