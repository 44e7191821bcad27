//! Configuration file discovery.
//!
//! Discovers `.kp.toml` files by walking up the directory tree from a starting point,
//! then appending the global `~/.kp.toml` if present.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".kp.toml";

/// Discovers all configuration files relevant to the given directory.
///
/// Returns paths in precedence order: closest to `cwd` first, global (`~/.kp.toml`) last.
/// Discovery stops at the first file with `root = true`; the global file is
/// skipped in that case.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let config_path = dir.join(CONFIG_FILENAME);
        if !config_path.is_file() {
            continue;
        }
        let is_root = is_root_config(&config_path);
        configs.push(config_path);
        if is_root {
            debug!(files = configs.len(), "config discovery stopped at root config");
            return configs;
        }
    }

    if let Some(global_path) = global_config_path()
        && global_path.is_file()
        && !configs.contains(&global_path)
    {
        configs.push(global_path);
    }

    debug!(files = configs.len(), "discovered config files");
    configs
}

/// Returns the path to the global configuration file (`~/.kp.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::test_support::TestDir;

    /// Drops the global config so tests do not depend on the user's home.
    fn local_only(configs: &[PathBuf]) -> Vec<&PathBuf> {
        configs.iter().filter(|p| !is_global_config(p)).collect()
    }

    #[test]
    fn test_discover_no_configs() {
        let test_dir = TestDir::new();
        let subdir = test_dir.create_dir("a/b/c");

        let configs = discover_config_files(&subdir);
        assert!(local_only(&configs).is_empty());
    }

    #[test]
    fn test_discover_precedence_order() {
        let test_dir = TestDir::new();
        let root_config = test_dir.create_config_at_root();
        let mid_config = test_dir.create_config("a/b");
        let working_dir = test_dir.create_dir("a/b/c/d");

        let configs = discover_config_files(&working_dir);
        assert_eq!(local_only(&configs), [&mid_config, &root_config]);
    }

    #[test]
    fn test_discover_skips_directory_named_like_config() {
        let test_dir = TestDir::new();
        fs::create_dir_all(test_dir.path().join(CONFIG_FILENAME)).unwrap();
        let subdir = test_dir.create_dir("subdir");

        let configs = discover_config_files(&subdir);
        assert!(local_only(&configs).is_empty());
    }

    #[test]
    fn test_root_config_stops_discovery() {
        let test_dir = TestDir::new();
        test_dir.create_config_at_root();
        let root_config = test_dir.create_root_config("project");
        let child_config = test_dir.create_config("project/sub");
        let working_dir = test_dir.create_dir("project/sub/deep");

        let configs = discover_config_files(&working_dir);

        // No parent, no global
        assert_eq!(configs, [child_config, root_config]);
    }

    #[test]
    fn test_global_config_path() {
        let global = global_config_path().unwrap();
        assert!(global.ends_with(CONFIG_FILENAME));
        assert!(is_global_config(&global));
        assert!(!is_global_config(Path::new("/some/other/path/.kp.toml")));
    }
}
