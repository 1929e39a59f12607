//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use git2::{IndexAddOption, Oid, Repository, Signature};

use gitai::error::{CompletionError, OperatorError};
use gitai::{CompletionService, GitRepository, Operator};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository with a local commit identity.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");
        {
            let mut config = repo.config().expect("Failed to open repo config");
            config.set_str("user.name", "Test User").expect("Failed to set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Failed to set user.email");
        }
        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `content` to `path` in the working tree, creating parent directories.
    pub fn write(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(full, content).expect("Failed to write test file");
    }

    /// Delete `path` from the working tree.
    pub fn remove(&self, path: &str) {
        std::fs::remove_file(self.dir.path().join(path)).expect("Failed to remove test file");
    }

    /// Stage everything in the working tree and commit it. Returns the commit OID.
    pub fn commit_all(&self, message: &str) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");

        let mut index = self.repo.index().expect("Failed to get index");
        index
            .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
            .expect("Failed to add files");
        index
            .update_all(["*"].iter(), None)
            .expect("Failed to update index");
        index.write().expect("Failed to write index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Open a fresh [`GitRepository`] handle on this repository.
    pub fn open(&self) -> GitRepository {
        let repo = Repository::open(self.dir.path()).expect("Failed to reopen repo");
        GitRepository::from_repository(repo).expect("Failed to wrap repo")
    }

    pub fn head_message(&self) -> String {
        let commit = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to read HEAD commit");
        commit.message().unwrap_or_default().to_string()
    }

    /// Paths recorded in the HEAD tree, sorted.
    pub fn head_paths(&self) -> Vec<String> {
        let tree = self
            .repo
            .head()
            .and_then(|h| h.peel_to_tree())
            .expect("Failed to read HEAD tree");
        let mut paths = Vec::new();
        tree.walk(git2::TreeWalkMode::PreOrder, |root, entry| {
            if entry.kind() == Some(git2::ObjectType::Blob) {
                paths.push(format!("{}{}", root, entry.name().unwrap_or_default()));
            }
            git2::TreeWalkResult::Ok
        })
        .expect("Failed to walk tree");
        paths.sort();
        paths
    }
}

/// Completion service returning canned messages in order and recording each diff.
pub struct ScriptedCompletion {
    messages: Mutex<VecDeque<String>>,
    pub diffs: Mutex<Vec<String>>,
}

impl ScriptedCompletion {
    pub fn new(messages: &[&str]) -> Self {
        Self {
            messages: Mutex::new(messages.iter().map(|m| m.to_string()).collect()),
            diffs: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.diffs.lock().expect("poisoned").len()
    }
}

#[async_trait]
impl CompletionService for ScriptedCompletion {
    async fn generate(&self, diff: &str) -> Result<String, CompletionError> {
        self.diffs.lock().expect("poisoned").push(diff.to_string());
        self.messages
            .lock()
            .expect("poisoned")
            .pop_front()
            .ok_or(CompletionError::EmptyMessage)
    }
}

/// Operator replaying canned answers.
#[derive(Default)]
pub struct ScriptedOperator {
    answers: VecDeque<String>,
    pub presented: Vec<(String, u32, u32)>,
    pub invalid: Vec<String>,
}

impl ScriptedOperator {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl Operator for ScriptedOperator {
    fn present(&mut self, message: &str, attempt: u32, max_attempts: u32) -> Result<(), OperatorError> {
        self.presented.push((message.to_string(), attempt, max_attempts));
        Ok(())
    }

    fn read_response(&mut self) -> Result<String, OperatorError> {
        self.answers.pop_front().ok_or(OperatorError::Closed)
    }

    fn report_invalid(&mut self, input: &str) -> Result<(), OperatorError> {
        self.invalid.push(input.to_string());
        Ok(())
    }
}
