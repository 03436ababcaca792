use std::path::{Path, PathBuf};

use sugar_path::SugarPath;

pub trait PathExt {
  fn expect_to_slash(&self) -> String;

  /// Resolves `self` against `base` the way `path.resolve(base, self)` does in node:
  /// absolute paths win, `.` and `..` segments are collapsed.
  fn resolve_from(&self, base: &Path) -> PathBuf;

  /// Case-sensitive check on the final extension, without the leading dot.
  fn has_extension(&self, ext: &str) -> bool;
}

impl PathExt for Path {
  fn expect_to_slash(&self) -> String {
    self
      .to_slash()
      .unwrap_or_else(|| panic!("Failed to convert {:?} to slash str", self.display()))
      .into_owned()
  }

  fn resolve_from(&self, base: &Path) -> PathBuf {
    base.join(self).normalize()
  }

  fn has_extension(&self, ext: &str) -> bool {
    self.extension().is_some_and(|actual| actual == ext)
  }
}

#[test]
fn test_resolve_from() {
  let base = Path::new("/bench/apps/frappe/frappe");

  assert_eq!(
    Path::new("public/js/desk.js").resolve_from(base),
    PathBuf::from("/bench/apps/frappe/frappe/public/js/desk.js")
  );
  assert_eq!(Path::new("../node_modules").resolve_from(base), PathBuf::from("/bench/apps/frappe/node_modules"));
  assert_eq!(Path::new("/etc/hosts").resolve_from(base), PathBuf::from("/etc/hosts"));
}

#[test]
fn test_has_extension() {
  assert!(Path::new("js/desk.min.js").has_extension("js"));
  assert!(Path::new("css/desk.min.css").has_extension("css"));
  assert!(!Path::new("app.bundle").has_extension("js"));
  assert!(!Path::new("js").has_extension("js"));
}
