use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveOptions {
  /// Directories searched for bare imports, in priority order.
  pub paths: Vec<PathBuf>,
}
