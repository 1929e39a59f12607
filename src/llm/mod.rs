//! Commit message generation through a chat-completions service.

pub mod client;
pub mod completion;
pub mod prompt;
pub mod response;

pub use client::ChatCompletionClient;
pub use completion::CompletionService;
pub use prompt::SYSTEM_PROMPT;
pub use response::clean_message;
