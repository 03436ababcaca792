use std::path::PathBuf;

use serde::Serialize;

use benchpack_utils::indexmap::FxIndexMap;

use crate::OutputFormat;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputOptions {
  pub file: PathBuf,
  pub format: OutputFormat,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  /// External module id -> global variable the bundle reads it from.
  #[serde(skip_serializing_if = "FxIndexMap::is_empty")]
  pub globals: FxIndexMap<String, String>,
  pub sourcemap: bool,
}
