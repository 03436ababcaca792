use std::{io, path::Path};

/// Read-only view of the disk. Nothing in the configuration pipeline writes files,
/// that is left to the bundler runner.
pub trait FileSystem: Send + Sync {
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn exists(&self, path: &Path) -> bool;
}
