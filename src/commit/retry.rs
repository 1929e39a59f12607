//! Generate-confirm-regenerate loop for commit messages.

use tracing::{debug, info};

use crate::diff::DiffDocument;
use crate::error::RetryError;
use crate::llm::CompletionService;

use super::confirm::{Confirmation, Operator, parse_confirmation};

/// Where the loop currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopState {
    Generating,
    AwaitingConfirmation(String),
    Regenerating,
    Accepted(String),
    Exhausted,
}

/// How the loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome {
    /// The operator accepted `message` on attempt number `attempt`.
    Accepted { message: String, attempt: u32 },
    /// Every attempt was rejected.
    Exhausted { attempts: u32 },
}

/// Proposes messages until one is accepted or `max_attempts` are rejected.
///
/// Invalid answers re-ask the question and do not use up an attempt.
/// Completion or operator failures end the loop immediately.
pub struct MessageRetryLoop<'a, C: ?Sized, O: ?Sized> {
    completion: &'a C,
    operator: &'a mut O,
    max_attempts: u32,
}

impl<'a, C, O> MessageRetryLoop<'a, C, O>
where
    C: CompletionService + ?Sized,
    O: Operator + ?Sized,
{
    /// `max_attempts` below 1 is treated as 1.
    pub fn new(completion: &'a C, operator: &'a mut O, max_attempts: u32) -> Self {
        Self {
            completion,
            operator,
            max_attempts: max_attempts.max(1),
        }
    }

    pub async fn run(mut self, diff: &DiffDocument) -> Result<RetryOutcome, RetryError> {
        let max = self.max_attempts;
        let mut attempt: u32 = 1;
        let mut state = LoopState::Generating;

        loop {
            debug!("Attempt {}/{}: {:?}", attempt, max, state);
            state = match state {
                LoopState::Generating => {
                    let message = self.completion.generate(diff.as_str()).await?;
                    LoopState::AwaitingConfirmation(message)
                }
                LoopState::AwaitingConfirmation(message) => {
                    self.operator.present(&message, attempt, max)?;
                    loop {
                        let answer = self.operator.read_response()?;
                        match parse_confirmation(&answer) {
                            Confirmation::Accept => break LoopState::Accepted(message),
                            Confirmation::Reject if attempt >= max => break LoopState::Exhausted,
                            Confirmation::Reject => break LoopState::Regenerating,
                            Confirmation::Invalid => self.operator.report_invalid(&answer)?,
                        }
                    }
                }
                LoopState::Regenerating => {
                    info!("Message rejected, regenerating ({}/{})", attempt, max);
                    attempt += 1;
                    LoopState::Generating
                }
                LoopState::Accepted(message) => {
                    info!("Message accepted on attempt {}", attempt);
                    return Ok(RetryOutcome::Accepted { message, attempt });
                }
                LoopState::Exhausted => {
                    info!("All {} attempts rejected", attempt);
                    return Ok(RetryOutcome::Exhausted { attempts: attempt });
                }
            };
        }
    }
}
