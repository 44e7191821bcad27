//! Path resolution for configured files.
//!
//! Resolves relative and tilde-prefixed paths against the directory of the
//! config file that declared them. Existence is not checked here; missing
//! files are reported by validation and by the loader that opens them.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a configured path to an absolute path.
///
/// - `~` and `~/...` expand to the home directory
/// - Relative paths are joined onto `config_dir`
/// - Absolute paths are returned unchanged
pub fn resolve_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        return Ok(home_dir()?.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_path() {
        let resolved = resolve_path("lists/smart.txt", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/lists/smart.txt"));
    }

    #[test]
    fn test_resolve_parent_relative_path() {
        let resolved = resolve_path("../shared/stop.txt", Path::new("/project/sub")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/sub/../shared/stop.txt"));
    }

    #[test]
    fn test_resolve_absolute_path() {
        let resolved = resolve_path("/etc/kp/stop.txt", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/etc/kp/stop.txt"));
    }

    #[test]
    fn test_resolve_tilde_path() {
        let home = BaseDirs::new().unwrap().home_dir().to_path_buf();
        let resolved = resolve_path("~/stop.txt", Path::new("/project")).unwrap();
        assert_eq!(resolved, home.join("stop.txt"));
        assert_eq!(resolve_path("~", Path::new("/project")).unwrap(), home);
    }

    #[test]
    fn test_tilde_inside_name_is_literal() {
        let resolved = resolve_path("~stop.txt", Path::new("/project")).unwrap();
        assert_eq!(resolved, PathBuf::from("/project/~stop.txt"));
    }
}
