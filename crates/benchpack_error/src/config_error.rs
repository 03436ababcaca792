use thiserror::Error;

/// Misconfigurations that abort the whole build. They are never retried, the
/// operator has to fix the bench setup or the app's `build.json`.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("Package manager (per Bench) is neither NPM or Yarn, got '{0}'.")]
  UnknownPackageManager(String),

  #[error("Cannot determine Rollup options for file '{0}'")]
  UnknownOutputExtension(String),
}

#[test]
fn test_messages_name_the_offending_value() {
  let error = ConfigError::UnknownPackageManager("pnpm".to_string());
  assert!(error.to_string().contains("'pnpm'"));

  let error = ConfigError::UnknownOutputExtension("app.bundle".to_string());
  assert_eq!(error.to_string(), "Cannot determine Rollup options for file 'app.bundle'");
}
