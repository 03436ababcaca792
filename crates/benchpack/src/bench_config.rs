use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use benchpack_common::PackageManager;
use benchpack_error::ConfigError;
use benchpack_fs::FileSystem;

/// System-wide bench configuration shared by every bench on the machine.
pub const DEFAULT_BENCH_CONFIG_PATH: &str = "/etc/bench/gitconfig.toml";

/// Overrides [`DEFAULT_BENCH_CONFIG_PATH`] when set and non-empty.
pub const BENCH_CONFIG_ENV: &str = "BENCH_GITCONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct BenchConfig {
  pub package_management: PackageManagement,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PackageManagement {
  pub javascript: String,
}

impl BenchConfig {
  /// Explicit path first, then the environment override, then the system default.
  pub fn path(explicit: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
      return path.to_path_buf();
    }

    if let Ok(env_path) = std::env::var(BENCH_CONFIG_ENV) {
      let trimmed = env_path.trim();
      if !trimmed.is_empty() {
        return PathBuf::from(trimmed);
      }
    }

    PathBuf::from(DEFAULT_BENCH_CONFIG_PATH)
  }

  pub fn load(fs: &dyn FileSystem, path: &Path) -> anyhow::Result<Self> {
    let source = fs
      .read_to_string(path)
      .with_context(|| format!("Failed to read bench configuration at {}", path.display()))?;
    Self::from_toml(&source).with_context(|| format!("Invalid bench configuration at {}", path.display()))
  }

  pub fn from_toml(source: &str) -> anyhow::Result<Self> {
    Ok(toml::from_str(source)?)
  }

  pub fn package_manager(&self) -> Result<PackageManager, ConfigError> {
    self.package_management.javascript.parse()
  }
}

#[test]
fn test_package_manager() {
  let config = BenchConfig::from_toml("[package_management]\njavascript = \"yarn\"\n").unwrap();
  assert_eq!(config.package_manager().unwrap(), PackageManager::Yarn);

  let config = BenchConfig::from_toml("[package_management]\njavascript = \"pnpm\"\n").unwrap();
  assert!(matches!(config.package_manager(), Err(ConfigError::UnknownPackageManager(value)) if value == "pnpm"));
}

#[test]
fn test_missing_section() {
  assert!(BenchConfig::from_toml("[git]\nuser = \"bench\"\n").is_err());
}

#[test]
fn test_explicit_path_wins() {
  assert_eq!(BenchConfig::path(Some(Path::new("/tmp/gitconfig.toml"))), PathBuf::from("/tmp/gitconfig.toml"));
}

#[test]
#[serial_test::serial]
fn test_env_override() {
  temp_env::with_var(BENCH_CONFIG_ENV, Some("  /tmp/x.toml "), || {
    assert_eq!(BenchConfig::path(None), PathBuf::from("/tmp/x.toml"));
    assert_eq!(BenchConfig::path(Some(Path::new("/opt/gitconfig.toml"))), PathBuf::from("/opt/gitconfig.toml"));
  });

  temp_env::with_var(BENCH_CONFIG_ENV, Some("   "), || {
    assert_eq!(BenchConfig::path(None), PathBuf::from(DEFAULT_BENCH_CONFIG_PATH));
  });

  temp_env::with_var_unset(BENCH_CONFIG_ENV, || {
    assert_eq!(BenchConfig::path(None), PathBuf::from(DEFAULT_BENCH_CONFIG_PATH));
  });
}

#[test]
fn test_load() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("gitconfig.toml");
  std::fs::write(&path, "[package_management]\njavascript = \"npm\"\n").unwrap();

  let config = BenchConfig::load(&benchpack_fs::OsFileSystem, &path).unwrap();
  assert_eq!(config.package_manager().unwrap(), PackageManager::Npm);

  let err = BenchConfig::load(&benchpack_fs::OsFileSystem, &dir.path().join("missing.toml")).unwrap_err();
  assert!(err.to_string().contains("missing.toml"));
}
