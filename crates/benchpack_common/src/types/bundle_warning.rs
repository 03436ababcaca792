use serde::{Deserialize, Serialize};

/// A diagnostic reported back by the bundler runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleWarning {
  pub code: String,
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub loc: Option<WarningLocation>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub frame: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningLocation {
  pub file: String,
  pub line: u32,
  pub column: u32,
}
