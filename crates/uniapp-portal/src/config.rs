// ABOUTME: Configuration loading and validation for the uniapp portal.
// ABOUTME: Reads UNIAPP_* environment variables and resolves the record file location.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("UNIAPP_ON_CORRUPT must be 'empty' or 'abort', got: {0}")]
    InvalidCorruptPolicy(String),
}

/// What the composition root does when the record file cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptPolicy {
    /// Log a warning and start from an empty collection.
    #[default]
    Empty,
    /// Refuse to start.
    Abort,
}

impl FromStr for CorruptPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(CorruptPolicy::Empty),
            "abort" => Ok(CorruptPolicy::Abort),
            _ => Err(ConfigError::InvalidCorruptPolicy(s.to_string())),
        }
    }
}

/// Portal configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub home: PathBuf,
    pub data_file: PathBuf,
    pub on_corrupt: CorruptPolicy,
}

impl PortalConfig {
    /// Configuration rooted at `home` with the default file name and policy.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            data_file: home.join("students.data"),
            home,
            on_corrupt: CorruptPolicy::default(),
        }
    }

    /// Load configuration from environment variables with sensible defaults.
    ///
    /// Environment variables:
    /// - UNIAPP_HOME: data directory (default: ~/.uniapp)
    /// - UNIAPP_DATA_FILE: record file (default: <UNIAPP_HOME>/students.data)
    /// - UNIAPP_ON_CORRUPT: `empty` or `abort` (default: empty)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let home = var("UNIAPP_HOME").map(PathBuf::from).unwrap_or_else(|| {
            var("HOME")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/tmp"))
                .join(".uniapp")
        });

        let data_file = var("UNIAPP_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| home.join("students.data"));

        let on_corrupt = match var("UNIAPP_ON_CORRUPT") {
            Some(raw) => raw.parse()?,
            None => CorruptPolicy::default(),
        };

        Ok(Self {
            home,
            data_file,
            on_corrupt,
        })
    }
}
