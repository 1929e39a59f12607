//! One gitai run: diff, confirm a message, commit.

use git2::Oid;
use tracing::info;

use crate::commit::{MessageRetryLoop, Operator, RetryOutcome, commit_changes, subject_line};
use crate::diff::{DiffDocument, build_diff_document};
use crate::error::GitaiError;
use crate::git::VersionControl;
use crate::llm::CompletionService;

pub const NO_CHANGES_MESSAGE: &str = "No changes detected.";
pub const EXHAUSTED_MESSAGE: &str = "Maximum attempts reached. Exiting without committing.";

/// Result of a run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing differs from HEAD. No message was requested.
    NoChanges,
    /// A commit was created with the accepted message.
    Committed { id: Oid, message: String },
    /// Every proposed message was rejected. Nothing was staged or committed.
    Exhausted { attempts: u32 },
}

impl RunOutcome {
    /// Line printed for the operator when the run ends.
    pub fn summary(&self) -> String {
        match self {
            RunOutcome::NoChanges => NO_CHANGES_MESSAGE.to_string(),
            RunOutcome::Committed { id, message } => {
                let id = id.to_string();
                format!("Committed {}: {}", &id[..7.min(id.len())], subject_line(message))
            }
            RunOutcome::Exhausted { .. } => EXHAUSTED_MESSAGE.to_string(),
        }
    }
}

/// Build the diff, run the confirmation loop, and commit if a message is accepted.
pub async fn run<V, C, O>(
    vcs: &V,
    completion: &C,
    operator: &mut O,
    max_attempts: u32,
) -> Result<RunOutcome, GitaiError>
where
    V: VersionControl + ?Sized,
    C: CompletionService + ?Sized,
    O: Operator + ?Sized,
{
    let Some(diff) = collect_changes(vcs)? else {
        return Ok(RunOutcome::NoChanges);
    };
    propose_and_commit(vcs, &diff, completion, operator, max_attempts).await
}

/// Like [`run`], but `setup` only runs once there is something to commit.
///
/// `setup` returns the completion service and the attempt limit, so a clean
/// working tree never needs an API key.
pub async fn run_with_setup<V, C, O, F>(vcs: &V, operator: &mut O, setup: F) -> Result<RunOutcome, GitaiError>
where
    V: VersionControl + ?Sized,
    C: CompletionService,
    O: Operator + ?Sized,
    F: FnOnce() -> Result<(C, u32), GitaiError>,
{
    let Some(diff) = collect_changes(vcs)? else {
        return Ok(RunOutcome::NoChanges);
    };
    let (completion, max_attempts) = setup()?;
    propose_and_commit(vcs, &diff, &completion, operator, max_attempts).await
}

fn collect_changes<V: VersionControl + ?Sized>(vcs: &V) -> Result<Option<DiffDocument>, GitaiError> {
    let diff = build_diff_document(vcs)?;
    if diff.is_empty() {
        info!("No changes detected");
        return Ok(None);
    }
    Ok(Some(diff))
}

async fn propose_and_commit<V, C, O>(
    vcs: &V,
    diff: &DiffDocument,
    completion: &C,
    operator: &mut O,
    max_attempts: u32,
) -> Result<RunOutcome, GitaiError>
where
    V: VersionControl + ?Sized,
    C: CompletionService + ?Sized,
    O: Operator + ?Sized,
{
    let outcome = MessageRetryLoop::new(completion, operator, max_attempts)
        .run(diff)
        .await?;

    match outcome {
        RetryOutcome::Accepted { message, .. } => {
            let id = commit_changes(vcs, message.clone())?;
            Ok(RunOutcome::Committed { id, message })
        }
        RetryOutcome::Exhausted { attempts } => Ok(RunOutcome::Exhausted { attempts }),
    }
}
