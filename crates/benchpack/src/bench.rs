use std::path::{Path, PathBuf};

use anyhow::Context;
use sugar_path::SugarPath;

use benchpack_common::{BuildManifest, ScssOptions};
use benchpack_fs::{FileSystem, OsFileSystem};

/// The on-disk layout of a bench:
///
/// ```text
/// <root>/apps/<app>/<app>/public/build.json
/// <root>/apps/<app>/node_modules
/// <root>/sites/apps.txt
/// <root>/sites/assets
/// ```
#[derive(Debug)]
pub struct Bench<F: FileSystem = OsFileSystem> {
  root: PathBuf,
  apps: Vec<String>,
  fs: F,
}

impl Bench<OsFileSystem> {
  pub fn load(root: &Path) -> anyhow::Result<Self> {
    Self::with_fs(root, OsFileSystem)
  }
}

impl<F: FileSystem> Bench<F> {
  /// Reads the installed apps from `sites/apps.txt`.
  ///
  /// The root must be valid UTF-8: every path handed to the bundler is derived from it
  /// and serialized as a string.
  pub fn with_fs(root: &Path, fs: F) -> anyhow::Result<Self> {
    let root = root.absolutize();
    if root.to_str().is_none() {
      anyhow::bail!("Bench path {} is not valid UTF-8", root.display());
    }

    let apps_txt = root.join("sites").join("apps.txt");
    let content = fs
      .read_to_string(&apps_txt)
      .with_context(|| format!("Failed to read the apps list at {}", apps_txt.display()))?;

    let apps = content.lines().map(str::trim).filter(|app| !app.is_empty()).map(String::from).collect();
    tracing::debug!(root = %root.display(), ?apps, "loaded bench");

    Ok(Self { root, apps, fs })
  }

  pub fn root(&self) -> &Path {
    &self.root
  }

  pub fn apps(&self) -> &[String] {
    &self.apps
  }

  pub fn fs(&self) -> &F {
    &self.fs
  }

  pub fn apps_path(&self) -> PathBuf {
    self.root.join("apps")
  }

  pub fn sites_path(&self) -> PathBuf {
    self.root.join("sites")
  }

  pub fn assets_path(&self) -> PathBuf {
    self.sites_path().join("assets")
  }

  /// The python package of an app, e.g. `apps/frappe/frappe`.
  pub fn app_path(&self, app: &str) -> PathBuf {
    self.apps_path().join(app).join(app)
  }

  pub fn public_path(&self, app: &str) -> PathBuf {
    self.app_path(app).join("public")
  }

  pub fn build_manifest_path(&self, app: &str) -> PathBuf {
    self.public_path(app).join("build.json")
  }

  /// `Ok(None)` when the app ships no `build.json`.
  pub fn build_manifest(&self, app: &str) -> anyhow::Result<Option<BuildManifest>> {
    let path = self.build_manifest_path(app);
    if !self.fs.exists(&path) {
      tracing::debug!(app, "no build manifest");
      return Ok(None);
    }

    let source = self
      .fs
      .read_to_string(&path)
      .with_context(|| format!("Failed to read {}", path.display()))?;
    let manifest =
      BuildManifest::from_json(&source).with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(Some(manifest))
  }

  /// Sass resolves imports from frappe's `node_modules` first, then from every app folder.
  pub fn scss_options(&self) -> ScssOptions {
    let node_modules_path = self.app_path("frappe").join("../node_modules").normalize();
    let app_folders = self.apps.iter().map(|app| self.app_path(app).join("..").normalize());

    ScssOptions { include_paths: std::iter::once(node_modules_path).chain(app_folders).collect() }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn bench(apps_txt: &str) -> (tempfile::TempDir, Bench) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("sites")).unwrap();
    std::fs::write(dir.path().join("sites/apps.txt"), apps_txt).unwrap();
    let bench = Bench::load(dir.path()).unwrap();
    (dir, bench)
  }

  #[test]
  fn test_apps_list() {
    let (_dir, bench) = bench("frappe\n\n  erpnext \n");
    assert_eq!(bench.apps(), ["frappe", "erpnext"]);
  }

  #[test]
  fn test_layout() {
    let (dir, bench) = bench("frappe\n");
    let root = dir.path().normalize();

    assert_eq!(bench.app_path("frappe"), root.join("apps/frappe/frappe"));
    assert_eq!(bench.public_path("frappe"), root.join("apps/frappe/frappe/public"));
    assert_eq!(bench.assets_path(), root.join("sites/assets"));
    assert_eq!(bench.build_manifest_path("frappe"), root.join("apps/frappe/frappe/public/build.json"));
  }

  #[test]
  fn test_scss_options() {
    let (dir, bench) = bench("frappe\nerpnext\n");
    let root = dir.path().normalize();

    assert_eq!(
      bench.scss_options().include_paths,
      [root.join("apps/frappe/node_modules"), root.join("apps/frappe"), root.join("apps/erpnext")]
    );
  }

  #[cfg(unix)]
  #[test]
  fn test_non_utf8_root() {
    use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

    let root = Path::new("/tmp").join(OsStr::from_bytes(b"bench-\xff"));
    let err = Bench::load(&root).unwrap_err();
    assert!(err.to_string().contains("not valid UTF-8"));
  }

  #[test]
  fn test_missing_apps_txt() {
    let dir = tempfile::tempdir().unwrap();
    let err = Bench::load(dir.path()).unwrap_err();
    assert!(err.to_string().contains("apps.txt"));
  }

  #[test]
  fn test_missing_build_manifest() {
    let (_dir, bench) = bench("frappe\n");
    assert!(bench.build_manifest("frappe").unwrap().is_none());
  }
}
