mod bundler_options;
mod types;

pub use bundler_options::{
  BundlerOptions,
  bundle_kind::BundleKind,
  input_item::InputItem,
  input_options::InputOptions,
  on_warn::OnWarn,
  output_format::OutputFormat,
  output_options::OutputOptions,
  plugin_options::{
    BubleOptions, BubleTransforms, NodeResolveOptions, PluginOptions, PostCssOptions,
    PreprocessorLoader, ScssOptions,
  },
  resolve_options::ResolveOptions,
};

pub use crate::types::{
  build_manifest::{BuildManifest, NODE_MODULES_PREFIX},
  bundle_warning::{BundleWarning, WarningLocation},
  package_manager::PackageManager,
  run_mode::{RUN_MODE_ENV, RunMode},
};
