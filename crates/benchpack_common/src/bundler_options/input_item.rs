use std::path::{Path, PathBuf};

use serde::Serialize;

use benchpack_utils::path_ext::PathExt;

/// A single entry handed to the bundler, always an absolute path once it left the
/// manifest compiler.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct InputItem {
  pub import: String,
}

impl InputItem {
  pub fn path(&self) -> &Path {
    Path::new(&self.import)
  }
}

impl From<PathBuf> for InputItem {
  fn from(value: PathBuf) -> Self {
    Self { import: value.expect_to_slash() }
  }
}
