//! Configuration system for kp.
//!
//! kp uses TOML configuration files named `.kp.toml`. Configuration is resolved by walking up
//! the directory tree from the current working directory, collecting any `.kp.toml` files found,
//! then loading `~/.kp.toml` as the global config with lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    fmt,
    path::{Path, PathBuf},
};

pub use discovery::{CONFIG_FILENAME, discover_config_files, global_config_path, is_global_config};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawOutputSettings, RawRakeSettings, parse_config_file, parse_config_str,
};
pub use resolve::resolve_path;
use serde::{Deserialize, Serialize};
pub use templates::config_template;
use tracing::debug;
pub use validate::ConfigWarning;
use validate::validate_config;

/// Top-level merged configuration for kp.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Extraction settings.
    pub rake: RakeSettings,
    /// Output settings.
    pub output: OutputSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.kp.toml` files.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        let parsed = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                debug!(path = %path.display(), "parsed config file");
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            rake: SerializableRakeSettings {
                stopwords: self
                    .rake
                    .stopwords
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect(),
            },
            output: self.output.clone(),
        };
        toml::to_string_pretty(&serializable)
            .map_err(|source| ConfigError::SerializeToml { source })
    }
}

/// Keyphrase extraction settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RakeSettings {
    /// Resolved stop word files, in the order they are merged.
    ///
    /// Empty means the built-in English list.
    pub stopwords: Vec<PathBuf>,
}

/// Output format for extracted keyphrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `score<TAB>phrase` line per keyphrase.
    #[default]
    Text,
    /// A JSON array of `{ "phrase", "score" }` objects.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Maximum keyphrases to print; `None` prints all.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Output format.
    pub format: OutputFormat,
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Extraction settings.
    rake: SerializableRakeSettings,
    /// Output settings.
    output: OutputSettings,
}

/// Extraction settings with paths rendered as strings.
#[derive(Serialize)]
struct SerializableRakeSettings {
    /// Resolved stop word files.
    stopwords: Vec<String>,
}
