/// Environment variable the bench exports to tell production builds apart.
pub const RUN_MODE_ENV: &str = "FRAPPE_ENV";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
  #[default]
  Development,
  /// Enables minification.
  Production,
}

impl RunMode {
  pub fn from_env() -> Self {
    Self::from_env_value(std::env::var(RUN_MODE_ENV).ok().as_deref())
  }

  pub fn from_env_value(value: Option<&str>) -> Self {
    match value {
      Some("production") => Self::Production,
      _ => Self::Development,
    }
  }

  pub fn is_production(self) -> bool {
    matches!(self, Self::Production)
  }
}

#[test]
fn test_from_env_value() {
  assert_eq!(RunMode::from_env_value(Some("production")), RunMode::Production);
  assert_eq!(RunMode::from_env_value(Some("develop")), RunMode::Development);
  assert_eq!(RunMode::from_env_value(Some("Production")), RunMode::Development);
  assert_eq!(RunMode::from_env_value(None), RunMode::Development);
}
