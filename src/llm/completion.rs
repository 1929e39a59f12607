//! Completion service abstraction.

use async_trait::async_trait;

use crate::error::CompletionError;

/// Something that turns a diff into a proposed commit message.
///
/// This abstraction allows mocking the HTTP service in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Propose a commit message for `diff`.
    async fn generate(&self, diff: &str) -> Result<String, CompletionError>;
}
