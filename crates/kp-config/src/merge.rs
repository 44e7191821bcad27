//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::path::{Path, PathBuf};

use crate::{
    Config, ConfigError, OutputSettings, RakeSettings,
    parse::{RawConfig, RawOutputSettings},
    resolve::resolve_path,
};

/// A parsed config file with its source path.
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Directory that relative paths in this file are resolved against.
    fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins
/// - Stop word files: the first file that sets `stopwords` supplies the whole list,
///   resolved against that file's directory
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let rake = merge_rake_settings(configs)?;
    let output = merge_output_settings(configs);
    let config_root = configs.first().map(|c| c.dir().to_path_buf());

    Ok(Config {
        rake,
        output,
        config_root,
    })
}

/// Takes the stop word list from the highest-precedence file that defines one.
fn merge_rake_settings(configs: &[ParsedConfig]) -> Result<RakeSettings, ConfigError> {
    let declared = configs.iter().find_map(|parsed| {
        let stopwords = parsed.config.rake.as_ref()?.stopwords.as_ref()?;
        Some((parsed.dir(), stopwords))
    });

    let Some((dir, stopwords)) = declared else {
        return Ok(RakeSettings::default());
    };

    let stopwords = stopwords
        .iter()
        .map(|path| resolve_path(path, dir))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RakeSettings { stopwords })
}

/// Merges output settings, taking first defined value for each field.
fn merge_output_settings(configs: &[ParsedConfig]) -> OutputSettings {
    let mut result = OutputSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref output) = parsed.config.output {
            apply_raw_output(&mut result, output);
        }
    }

    result
}

/// Applies raw output settings to result, overwriting any present values.
fn apply_raw_output(result: &mut OutputSettings, raw: &RawOutputSettings) {
    if let Some(v) = raw.limit {
        result.limit = Some(v);
    }
    if let Some(v) = raw.format {
        result.format = v;
    }
}
