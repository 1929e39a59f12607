//! Error types for gitai modules using thiserror.

use thiserror::Error;

/// Errors from querying the repository (status, HEAD, reference tree).
#[derive(Error, Debug)]
pub enum VcsError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Bare repositories are not supported")]
    BareRepository,

    #[error("Failed to resolve HEAD: {0}")]
    Head(#[source] git2::Error),

    #[error("Failed to query working tree status: {0}")]
    Status(#[source] git2::Error),
}

/// Errors from building the diff document.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error(transparent)]
    Vcs(#[from] VcsError),

    #[error("Failed to read '{path}': {source}")]
    ContentRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{path}' from the reference commit: {source}")]
    BlobRead {
        path: String,
        #[source]
        source: git2::Error,
    },
}

/// Errors from the text-completion service.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("GROQ_API_KEY is not set")]
    MissingApiKey,

    #[error("Completion request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Completion API returned status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Unexpected completion response format: {0}")]
    InvalidResponse(String),

    #[error("Completion service returned an empty message")]
    EmptyMessage,
}

/// Errors from staging and committing.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Failed to re-scan changes before committing: {0}")]
    Rescan(#[source] VcsError),

    #[error("Failed to stage '{path}': {source}")]
    StagingFailed {
        path: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to create commit: {0}")]
    CommitFailed(#[source] git2::Error),

    #[error("Git config error: {0}")]
    ConfigError(#[source] git2::Error),

    #[error(
        "No commit identity configured. Set user.name and user.email with `git config` (locally or with --global)"
    )]
    MissingIdentity,
}

/// Errors from reading the operator's confirmation.
#[derive(Error, Debug)]
pub enum OperatorError {
    #[error("Failed to read confirmation: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Input closed before a confirmation was given")]
    Closed,
}

/// Errors from the message generation and confirmation loop.
#[derive(Error, Debug)]
pub enum RetryError {
    #[error("Failed to generate commit message: {0}")]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Operator(#[from] OperatorError),
}

/// Errors from loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("GROQ_API_KEY is not set. Please set it in {env_file} or as an environment variable")]
    MissingApiKey { env_file: String },

    #[error("GITAI_MAX_ATTEMPTS must be at least 1")]
    ZeroAttempts,
}

/// Top-level error for a full run.
#[derive(Error, Debug)]
pub enum GitaiError {
    #[error("Failed to collect changes: {0}")]
    Diff(#[from] DiffError),

    #[error(transparent)]
    Retry(#[from] RetryError),

    #[error("Failed to commit changes: {0}")]
    Commit(#[from] CommitError),

    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to set up completion client: {0}")]
    Setup(#[from] CompletionError),
}
