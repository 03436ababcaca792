use anyhow::Context;
use serde::Deserialize;

use benchpack_utils::indexmap::FxIndexMap;

/// Prefix marking inputs that live in the app's dependency tree rather than its sources.
pub const NODE_MODULES_PREFIX: &str = "node_modules/";

/// The part of an app's `build.json` this crate cares about. Other members are ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BuildManifest {
  /// Output file -> ordered input files. Declaration order is preserved.
  #[serde(default)]
  pub bundle: Option<FxIndexMap<String, Vec<String>>>,
}

impl BuildManifest {
  pub fn from_json(source: &str) -> anyhow::Result<Self> {
    serde_json::from_str(source).context("Invalid build manifest")
  }

  pub fn bundles(&self) -> impl Iterator<Item = (&str, &[String])> {
    self.bundle.iter().flatten().map(|(output, inputs)| (output.as_str(), inputs.as_slice()))
  }
}

#[test]
fn test_bundles_keep_declaration_order() {
  let manifest = BuildManifest::from_json(
    r#"{
      "bundle": {
        "js/zeta.min.js": ["public/js/z.js"],
        "css/alpha.css": ["public/less/a.less", "node_modules/pkg/b.css"]
      },
      "css/legacy.css": ["public/css/legacy.css"]
    }"#,
  )
  .unwrap();

  let bundles: Vec<_> = manifest.bundles().collect();
  assert_eq!(bundles.len(), 2);
  assert_eq!(bundles[0].0, "js/zeta.min.js");
  assert_eq!(bundles[1].0, "css/alpha.css");
  assert_eq!(bundles[1].1, ["public/less/a.less", "node_modules/pkg/b.css"]);
}

#[test]
fn test_manifest_without_bundle() {
  let manifest = BuildManifest::from_json(r#"{ "js/legacy.js": ["a.js"] }"#).unwrap();
  assert_eq!(manifest.bundles().count(), 0);

  assert!(BuildManifest::from_json("{ not json").is_err());
}
