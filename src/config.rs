use std::path::Path;

use serde::Deserialize;

use crate::logging::LoggerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to deserialize config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Settings of a [`MockMvc`](crate::mock::MockMvc) instance.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MockConfig {
    /// `Host` header added to requests that do not carry one.
    pub default_host: String,

    /// `Server` header added to every response when set.
    pub server_name: Option<String>,

    pub max_body_size: usize,

    /// Answer `If-Modified-Since` / `If-None-Match` with `304 Not Modified`.
    pub conditional_requests: bool,

    pub logger: LoggerConfig,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            default_host: "localhost".to_string(),
            server_name: None,
            max_body_size: 1024 * 1024, // 1 MB
            conditional_requests: true,
            logger: LoggerConfig::default(),
        }
    }
}

impl MockConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str::<MockConfig>(content)?)
    }

    pub fn try_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads `path`, falling back to the default config when it cannot be
    /// read or deserialized.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        match Self::try_from_file(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}, fall back to default config");
                MockConfig::default()
            }
        }
    }
}
