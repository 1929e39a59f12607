//! Runtime configuration from `~/.gitai.env` and the process environment.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ConfigError;

/// Env file loaded from the home directory before reading variables.
pub const ENV_FILE_NAME: &str = ".gitai.env";

pub const API_KEY_VAR: &str = "GROQ_API_KEY";
pub const API_URL_VAR: &str = "GITAI_API_URL";
pub const MODEL_VAR: &str = "GITAI_MODEL";
pub const MAX_ATTEMPTS_VAR: &str = "GITAI_MAX_ATTEMPTS";
pub const TIMEOUT_VAR: &str = "GITAI_TIMEOUT";

pub const DEFAULT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;
/// Default timeout for the completion request (5 minutes).
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Settings for the completion service and the confirmation loop.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub max_attempts: u32,
    pub timeout: Duration,
}

impl Config {
    /// Load `~/.gitai.env` (if present) and then read the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let env_file = env_file_path();
        match env_file.as_deref() {
            Some(path) => load_env_file(path),
            None => warn!("Could not determine home directory, skipping {}", ENV_FILE_NAME),
        }
        Self::from_env()
    }

    /// Read configuration from the process environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = match env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => {
                return Err(ConfigError::MissingApiKey {
                    env_file: env_file_display(),
                });
            }
        };

        let max_attempts = parse_number_var(MAX_ATTEMPTS_VAR, u64::from(DEFAULT_MAX_ATTEMPTS));
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        let max_attempts = u32::try_from(max_attempts).unwrap_or(u32::MAX);

        Ok(Self {
            api_key,
            api_url: string_var(API_URL_VAR, DEFAULT_API_URL),
            model: string_var(MODEL_VAR, DEFAULT_MODEL),
            max_attempts,
            timeout: Duration::from_secs(parse_number_var(TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS)),
        })
    }

    /// Default settings pointed at a specific endpoint.
    pub fn with_endpoint(api_key: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: api_url.into(),
            model: DEFAULT_MODEL.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

fn env_file_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(ENV_FILE_NAME))
}

fn env_file_display() -> String {
    env_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| format!("~/{}", ENV_FILE_NAME))
}

/// Load variables from `path` without overriding ones already set.
fn load_env_file(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => debug!("Loaded environment from {}", path.display()),
        Err(e) if is_missing_file(&e) => debug!("No {} found, using environment variables", path.display()),
        Err(e) => warn!(
            "Could not load {} ({}), continuing with environment variables",
            path.display(),
            e
        ),
    }
}

fn is_missing_file(err: &dotenvy::Error) -> bool {
    matches!(err, dotenvy::Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
}

fn string_var(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => v,
        _ => default.to_string(),
    }
}

/// Read a non-negative integer variable.
///
/// Logs a warning if the variable is set but invalid (non-numeric or
/// negative) and falls back to `default`.
fn parse_number_var(name: &str, default: u64) -> u64 {
    match env::var(name) {
        Ok(v) if !v.is_empty() => match v.trim().parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                warn!("Invalid {} value '{}', using default {}", name, v, default);
                default
            }
        },
        _ => default,
    }
}
