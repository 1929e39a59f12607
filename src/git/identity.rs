//! Commit author identity resolution.

use git2::{Config, ConfigLevel};
use tracing::debug;

/// Name and email used for the commit author and committer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Config levels consulted for `user.name` / `user.email`, most specific first.
const IDENTITY_LEVELS: [ConfigLevel; 3] = [ConfigLevel::Local, ConfigLevel::Global, ConfigLevel::XDG];

/// Resolve the identity from the local repository config, falling back to the
/// global (and XDG) config for whichever field is unset locally.
pub fn resolve_identity(config: &Config) -> Option<Identity> {
    let name = lookup(config, "user.name")?;
    let email = lookup(config, "user.email")?;
    Some(Identity { name, email })
}

fn lookup(config: &Config, key: &str) -> Option<String> {
    for level in IDENTITY_LEVELS {
        let Ok(scoped) = config.open_level(level) else {
            continue;
        };
        match scoped.get_string(key) {
            Ok(value) if !value.trim().is_empty() => {
                debug!("Resolved {} from {:?} config", key, level);
                return Some(value);
            }
            _ => {}
        }
    }
    None
}
