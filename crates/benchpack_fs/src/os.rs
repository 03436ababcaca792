use std::{io, path::Path};

use crate::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn exists(&self, path: &Path) -> bool {
    path.exists()
  }
}

#[test]
fn test_os_file_system() {
  let dir = tempfile::tempdir().unwrap();
  let file = dir.path().join("apps.txt");
  std::fs::write(&file, "frappe\n").unwrap();

  let fs = OsFileSystem;
  assert!(fs.exists(&file));
  assert!(fs.exists(dir.path()));
  assert!(!fs.exists(&dir.path().join("missing")));
  assert_eq!(fs.read_to_string(&file).unwrap(), "frappe\n");
}
