//! Operator-confirmed commit messages and the commit itself.

pub mod confirm;
pub mod coordinator;
pub mod retry;

pub use confirm::{Confirmation, Operator, TerminalOperator, parse_confirmation};
pub use coordinator::{commit_changes, subject_line};
pub use retry::{LoopState, MessageRetryLoop, RetryOutcome};
