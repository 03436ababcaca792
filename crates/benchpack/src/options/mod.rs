mod script;
mod stylesheet;

use std::path::PathBuf;

use benchpack_common::{BundleKind, BundlerOptions, RunMode};
use benchpack_fs::FileSystem;
use benchpack_plugin::PluginSet;

use crate::Bench;

pub use self::{script::get_options_for_js, stylesheet::get_options_for_css};

/// Everything the option builders read besides the bundle itself. Computed once per
/// run and passed down explicitly.
#[derive(Debug)]
pub struct BuildContext<'a, F: FileSystem> {
  pub bench: &'a Bench<F>,
  pub plugins: PluginSet,
  pub run_mode: RunMode,
}

impl<'a, F: FileSystem> BuildContext<'a, F> {
  pub fn new(bench: &'a Bench<F>, plugins: PluginSet, run_mode: RunMode) -> Self {
    Self { bench, plugins, run_mode }
  }
}

pub fn get_bundler_options<F: FileSystem>(
  ctx: &BuildContext<'_, F>,
  kind: BundleKind,
  output_file: &str,
  input_files: Vec<PathBuf>,
) -> BundlerOptions {
  match kind {
    BundleKind::Script => get_options_for_js(ctx, output_file, input_files),
    BundleKind::Stylesheet => get_options_for_css(ctx, output_file, input_files),
  }
}
