use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  /// A single immediately-invoked function, the shape of every script bundle.
  Iife,
  /// Only used by stylesheet bundles, whose script output is an empty placeholder.
  Cjs,
}
