use std::{fs, io, num::NonZeroUsize, path::Path};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for an [`Invoker`](crate::invoker::Invoker).
///
/// ```toml
/// # keep at most 64 undoable commands, evicting the oldest
/// history_limit = 64
/// ```
///
/// Leaving `history_limit` out keeps every executed command undoable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InvokerConfig {
    pub history_limit: Option<NonZeroUsize>,
}

impl InvokerConfig {
    #[must_use]
    pub fn with_history_limit(limit: NonZeroUsize) -> Self {
        Self {
            history_limit: Some(limit),
        }
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML, unknown keys or a zero limit.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`InvokerConfig::from_toml_str`].
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}
