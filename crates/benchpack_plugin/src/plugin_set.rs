use benchpack_common::PackageManager;

/// Package names of the plugins whose name depends on the package manager.
/// Everything else in the chain is published under a single name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginSet {
  pub multi_entry: &'static str,
  pub commonjs: &'static str,
  pub node_resolve: &'static str,
  pub buble: &'static str,
}

impl PluginSet {
  pub const NPM: Self = Self {
    multi_entry: "@rollup/plugin-multi-entry",
    commonjs: "@rollup/plugin-commonjs",
    node_resolve: "@rollup/plugin-node-resolve",
    buble: "@rollup/plugin-buble",
  };

  pub const YARN: Self = Self {
    multi_entry: "rollup-plugin-multi-entry",
    commonjs: "rollup-plugin-commonjs",
    node_resolve: "rollup-plugin-node-resolve",
    buble: "rollup-plugin-buble",
  };

  pub const POSTCSS: &'static str = "rollup-plugin-postcss";
  pub const TERSER: &'static str = "rollup-plugin-terser";
  pub const VUE: &'static str = "rollup-plugin-vue";

  pub fn for_package_manager(package_manager: PackageManager) -> Self {
    match package_manager {
      PackageManager::Npm => Self::NPM,
      PackageManager::Yarn => Self::YARN,
    }
  }
}

#[test]
fn test_for_package_manager() {
  let npm = PluginSet::for_package_manager(PackageManager::Npm);
  assert_eq!(npm.commonjs, "@rollup/plugin-commonjs");
  assert_eq!(npm.buble, "@rollup/plugin-buble");

  let yarn = PluginSet::for_package_manager(PackageManager::Yarn);
  assert_eq!(yarn.multi_entry, "rollup-plugin-multi-entry");
  assert_eq!(yarn.node_resolve, "rollup-plugin-node-resolve");
}
