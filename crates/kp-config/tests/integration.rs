//! Integration tests for kp-config.
//!
//! Tests the full configuration loading pipeline: discovery -> parse -> resolve -> merge.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use kp_config::{Config, ConfigError, ConfigWarning, OutputFormat};

/// Test helper to create a temporary directory structure for tests.
struct TestEnv {
    /// Owned temporary directory.
    root: tempfile::TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
        }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Creates a directory and returns its path.
    fn create_dir(&self, rel_path: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Creates a file with content and returns its path.
    fn create_file(&self, rel_path: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}

#[test]
fn test_load_root_config_only() {
    let env = TestEnv::new();
    let stop = env.create_file("lists/smart.txt", "of\nthe\n");
    env.create_file(
        ".kp.toml",
        r#"
root = true

[rake]
stopwords = "lists/smart.txt"

[output]
limit = 15
"#,
    );

    let config = Config::load(env.path()).unwrap();

    assert_eq!(config.rake.stopwords, [stop]);
    assert_eq!(config.output.limit, Some(15));
    assert_eq!(config.output.format, OutputFormat::Text);
    assert_eq!(config.config_root.as_deref(), Some(env.path()));
    assert!(config.validate().is_empty());
}

#[test]
fn test_nested_configs_merge() {
    let env = TestEnv::new();
    env.create_file(
        ".kp.toml",
        "root = true\n[rake]\nstopwords = \"root.txt\"\n[output]\nlimit = 5\n",
    );
    env.create_file("project/.kp.toml", "[output]\nformat = \"json\"\n");
    let subdir = env.create_dir("project/src");

    let config = Config::load(&subdir).unwrap();

    assert_eq!(config.rake.stopwords, [env.path().join("root.txt")]);
    assert_eq!(config.output.limit, Some(5));
    assert_eq!(config.output.format, OutputFormat::Json);
    assert_eq!(config.config_root, Some(env.path().join("project")));

    // root.txt was never created
    assert!(matches!(
        config.validate().as_slice(),
        [ConfigWarning::StopWordFileMissing { .. }]
    ));
}

#[test]
fn test_invalid_config_is_error() {
    let env = TestEnv::new();
    env.create_file(".kp.toml", "root = true\n[output]\nlimit = \"many\"\n");

    let err = Config::load(env.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseToml { .. }));
}

#[test]
fn test_load_from_explicit_files() {
    let env = TestEnv::new();
    let high = env.create_file("a/.kp.toml", "[output]\nlimit = 1\n");
    let low = env.create_file("b/.kp.toml", "[output]\nlimit = 2\nformat = \"json\"\n");

    let config = Config::load_from_files(&[high, low]).unwrap();
    assert_eq!(config.output.limit, Some(1));
    assert_eq!(config.output.format, OutputFormat::Json);
}
