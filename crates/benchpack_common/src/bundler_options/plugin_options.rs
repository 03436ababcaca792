use std::path::PathBuf;

use serde::Serialize;

use crate::ResolveOptions;

/// One entry of a plugin chain. `module` is the package the runner has to load, it
/// differs between package managers for some plugins.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "plugin", rename_all = "kebab-case")]
pub enum PluginOptions {
  MultiEntry { module: String },
  /// `.html` templates become `frappe.templates[...]` assignments.
  FrappeHtml,
  /// Stylesheet imports inside scripts are replaced by an empty module.
  IgnoreCss,
  Vue { module: String },
  Buble { module: String, options: BubleOptions },
  #[serde(rename = "commonjs")]
  CommonJs { module: String },
  NodeResolve { module: String, options: NodeResolveOptions },
  Terser { module: String },
  #[serde(rename = "postcss")]
  PostCss { module: String, options: PostCssOptions },
}

impl PluginOptions {
  pub fn name(&self) -> &'static str {
    match self {
      Self::MultiEntry { .. } => "multi-entry",
      Self::FrappeHtml => "frappe-html",
      Self::IgnoreCss => "ignore-css",
      Self::Vue { .. } => "vue",
      Self::Buble { .. } => "buble",
      Self::CommonJs { .. } => "commonjs",
      Self::NodeResolve { .. } => "node-resolve",
      Self::Terser { .. } => "terser",
      Self::PostCss { .. } => "postcss",
    }
  }

  /// `None` for the plugins that live in the bench itself.
  pub fn module(&self) -> Option<&str> {
    match self {
      Self::FrappeHtml | Self::IgnoreCss => None,
      Self::MultiEntry { module }
      | Self::Vue { module }
      | Self::Buble { module, .. }
      | Self::CommonJs { module }
      | Self::NodeResolve { module, .. }
      | Self::Terser { module }
      | Self::PostCss { module, .. } => Some(module),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BubleOptions {
  pub object_assign: String,
  pub transforms: BubleTransforms,
  /// Globs of files buble must not touch.
  pub exclude: Vec<String>,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BubleTransforms {
  pub dangerous_for_of: bool,
  pub classes: bool,
  /// Async functions are shipped untouched.
  pub async_await: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeResolveOptions {
  pub custom_resolve_options: ResolveOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCssOptions {
  pub extract: PathBuf,
  #[serde(rename = "use")]
  pub loaders: Vec<PreprocessorLoader>,
  pub include: Vec<String>,
  pub minimize: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "loader", content = "options", rename_all = "lowercase")]
pub enum PreprocessorLoader {
  Less {
    /// Folders `@import` is resolved from.
    paths: Vec<PathBuf>,
  },
  Sass(ScssOptions),
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScssOptions {
  pub include_paths: Vec<PathBuf>,
}

#[test]
fn test_plugin_serialization() {
  let plugin = PluginOptions::CommonJs { module: "@rollup/plugin-commonjs".to_string() };
  assert_eq!(
    serde_json::to_value(&plugin).unwrap(),
    serde_json::json!({ "plugin": "commonjs", "module": "@rollup/plugin-commonjs" })
  );

  assert_eq!(serde_json::to_value(PluginOptions::IgnoreCss).unwrap(), serde_json::json!({ "plugin": "ignore-css" }));
  assert_eq!(PluginOptions::IgnoreCss.module(), None);
}

#[test]
fn test_preprocessor_loader_serialization() {
  let loader = PreprocessorLoader::Sass(ScssOptions { include_paths: vec![PathBuf::from("/bench/node_modules")] });
  assert_eq!(
    serde_json::to_value(&loader).unwrap(),
    serde_json::json!({ "loader": "sass", "options": { "includePaths": ["/bench/node_modules"] } })
  );
}
