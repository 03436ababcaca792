mod config_error;

use std::{
  fmt::Display,
  ops::{Deref, DerefMut},
};

pub use crate::config_error::ConfigError;

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// Looks for a `ConfigError` among the collected errors.
  pub fn config_error(&self) -> Option<&ConfigError> {
    self.0.iter().find_map(|error| error.downcast_ref::<ConfigError>())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    for (idx, error) in self.0.iter().enumerate() {
      if idx > 0 {
        writeln!(f)?;
      }
      write!(f, "{error:#}")?;
    }
    Ok(())
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<ConfigError> for BuildError {
  fn from(error: ConfigError) -> Self {
    Self(vec![error.into()])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn test_config_error_is_found_in_build_error() {
  let error = BuildError::from(vec![
    anyhow::anyhow!("unrelated"),
    ConfigError::UnknownOutputExtension("app.bundle".to_string()).into(),
  ]);

  assert!(matches!(
    error.config_error(),
    Some(ConfigError::UnknownOutputExtension(file)) if file == "app.bundle"
  ));
  assert_eq!(error.to_string().lines().count(), 2);
}
