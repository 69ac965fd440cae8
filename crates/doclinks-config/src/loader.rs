//! Loading configuration from TOML and YAML sources

use crate::LinksConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error
    #[cfg(feature = "toml")]
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[cfg(feature = "toml")]
    #[error("Failed to serialize config as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// YAML parse error
    #[cfg(feature = "yaml")]
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File extension does not map to an enabled format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

impl LinksConfig {
    /// Parse configuration from a TOML string
    #[cfg(feature = "toml")]
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse configuration from a YAML string
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Serialize configuration as pretty TOML
    #[cfg(feature = "toml")]
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a file, choosing the format by extension
    ///
    /// `.toml` is parsed as TOML; `.yaml` and `.yml` as YAML. Any other
    /// extension, or a format whose feature is disabled, is rejected.
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "Loading doclinks config");

        match extension.as_deref() {
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_toml_str(&content),
            #[cfg(feature = "yaml")]
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
