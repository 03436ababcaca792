use std::str::FromStr;

use serde::Serialize;

use benchpack_error::ConfigError;

/// The JS package manager the bench is set up with. Some plugins are published under
/// different names depending on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
  Npm,
  Yarn,
}

impl FromStr for PackageManager {
  type Err = ConfigError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "npm" => Ok(Self::Npm),
      "yarn" => Ok(Self::Yarn),
      _ => Err(ConfigError::UnknownPackageManager(s.to_string())),
    }
  }
}

#[test]
fn test_from_str() {
  assert_eq!("npm".parse::<PackageManager>().unwrap(), PackageManager::Npm);
  assert_eq!("yarn".parse::<PackageManager>().unwrap(), PackageManager::Yarn);

  let err = "pnpm".parse::<PackageManager>().unwrap_err();
  assert!(matches!(&err, ConfigError::UnknownPackageManager(value) if value == "pnpm"));
  assert!("NPM".parse::<PackageManager>().is_err());
}
