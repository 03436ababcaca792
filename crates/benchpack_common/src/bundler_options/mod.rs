pub mod bundle_kind;
pub mod input_item;
pub mod input_options;
pub mod on_warn;
pub mod output_format;
pub mod output_options;
pub mod plugin_options;
pub mod resolve_options;

use serde::Serialize;

use crate::{InputOptions, OutputOptions};

/// Everything the bundler runner needs to produce one asset.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundlerOptions {
  /// The output name exactly as written in `build.json`, relative to the assets folder.
  pub output_file: String,
  pub input_options: InputOptions,
  pub output_options: OutputOptions,
}
