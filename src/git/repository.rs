//! Repository capability trait and its git2 implementation.

use std::io;
use std::path::{Path, PathBuf};

use git2::{ErrorCode, ObjectType, Oid, Repository, Signature, StatusOptions, Tree};
use tracing::{debug, warn};

use crate::error::{CommitError, VcsError};

use super::identity::{self, Identity};
use super::status::{StatusEntry, classify};

/// Operations the diff engine and commit step need from version control.
///
/// The reference commit is fixed when the implementation is constructed
/// (HEAD for [`GitRepository`]).
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl {
    /// Every path whose state differs from the reference commit.
    fn status(&self) -> Result<Vec<StatusEntry>, VcsError>;

    /// Content of `path` in the reference commit, `None` if it does not exist there.
    fn read_reference_blob(&self, path: &str) -> Result<Option<Vec<u8>>, git2::Error>;

    /// Content of `path` in the working tree, `None` if it does not exist on disk.
    fn read_working_file(&self, path: &str) -> io::Result<Option<Vec<u8>>>;

    /// Stage the current working tree state of `path`.
    fn stage_path(&self, path: &str) -> Result<(), CommitError>;

    /// Author identity from local config, falling back to global config.
    fn resolve_identity(&self) -> Result<Identity, CommitError>;

    /// Commit the index on top of the reference commit.
    fn commit(&self, message: &str, author: &Identity) -> Result<Oid, CommitError>;
}

/// [`VersionControl`] backed by a git2 repository with a working directory.
pub struct GitRepository {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRepository {
    /// Discover the repository containing `path`.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, VcsError> {
        let repo = Repository::discover(path).map_err(VcsError::OpenRepository)?;
        Self::from_repository(repo)
    }

    pub fn from_repository(repo: Repository) -> Result<Self, VcsError> {
        let workdir = repo
            .workdir()
            .ok_or(VcsError::BareRepository)?
            .to_path_buf();
        Ok(Self { repo, workdir })
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    pub fn inner(&self) -> &Repository {
        &self.repo
    }

    /// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
    ///
    /// Returns `Ok(None)` for repos with no commits (unborn branch / not found).
    fn head_tree(&self) -> Result<Option<Tree<'_>>, git2::Error> {
        let head_ref = match self.repo.head() {
            Ok(r) => r,
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        head_ref.peel_to_tree().map(Some)
    }

    fn is_directory(&self, path: &str) -> bool {
        self.workdir
            .join(path)
            .symlink_metadata()
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}

impl VersionControl for GitRepository {
    fn status(&self) -> Result<Vec<StatusEntry>, VcsError> {
        // Surface a corrupt HEAD here rather than as a silent "all new" diff.
        self.head_tree().map_err(VcsError::Head)?;

        let mut opts = StatusOptions::new();
        opts.include_untracked(true)
            .recurse_untracked_dirs(true)
            .include_ignored(false)
            .include_unmodified(false);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(VcsError::Status)?;

        // Nested repositories and submodules show up as a single directory entry.
        let entries = statuses
            .iter()
            .filter_map(|entry| {
                let path = String::from_utf8_lossy(entry.path_bytes()).into_owned();
                if self.is_directory(&path) {
                    debug!("Skipping directory entry {}", path);
                    return None;
                }
                let (staging, worktree) = classify(entry.status());
                Some(StatusEntry::new(path, staging, worktree))
            })
            .collect();

        Ok(entries)
    }

    fn read_reference_blob(&self, path: &str) -> Result<Option<Vec<u8>>, git2::Error> {
        let Some(tree) = self.head_tree()? else {
            return Ok(None);
        };

        let entry = match tree.get_path(Path::new(path)) {
            Ok(entry) => entry,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e),
        };

        if entry.kind() != Some(ObjectType::Blob) {
            debug!("{} is not a blob in HEAD, treating as absent", path);
            return Ok(None);
        }

        let blob = self.repo.find_blob(entry.id())?;
        Ok(Some(blob.content().to_vec()))
    }

    fn read_working_file(&self, path: &str) -> io::Result<Option<Vec<u8>>> {
        match std::fs::read(self.workdir.join(path)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn stage_path(&self, path: &str) -> Result<(), CommitError> {
        let staging_failed = |source| CommitError::StagingFailed {
            path: path.to_string(),
            source,
        };

        let mut index = self.repo.index().map_err(staging_failed)?;
        let on_disk = self.workdir.join(path).symlink_metadata().is_ok();

        if on_disk {
            index.add_path(Path::new(path)).map_err(staging_failed)?;
        } else {
            index.remove_path(Path::new(path)).map_err(staging_failed)?;
        }

        index.write().map_err(staging_failed)?;
        debug!("Staged {} ({})", path, if on_disk { "add" } else { "remove" });
        Ok(())
    }

    fn resolve_identity(&self) -> Result<Identity, CommitError> {
        let config = self.repo.config().map_err(CommitError::ConfigError)?;
        identity::resolve_identity(&config).ok_or(CommitError::MissingIdentity)
    }

    fn commit(&self, message: &str, author: &Identity) -> Result<Oid, CommitError> {
        let mut index = self.repo.index().map_err(CommitError::CommitFailed)?;
        let tree_id = index.write_tree().map_err(CommitError::CommitFailed)?;
        let tree = self
            .repo
            .find_tree(tree_id)
            .map_err(CommitError::CommitFailed)?;

        let sig = Signature::now(&author.name, &author.email).map_err(CommitError::ConfigError)?;

        let parent = match self.repo.head() {
            Ok(head) => Some(head.peel_to_commit().map_err(CommitError::CommitFailed)?),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                warn!("HEAD is unborn, creating a root commit");
                None
            }
            Err(e) => return Err(CommitError::CommitFailed(e)),
        };
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .map_err(CommitError::CommitFailed)
    }
}
