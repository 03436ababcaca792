use std::path::PathBuf;

use itertools::Itertools;
use sugar_path::SugarPath;

use benchpack_common::{
  BubleOptions, BubleTransforms, BundlerOptions, InputOptions, NodeResolveOptions, OnWarn,
  OutputFormat, OutputOptions, PluginOptions, ResolveOptions,
};
use benchpack_fs::FileSystem;
use benchpack_plugin::PluginSet;
use benchpack_utils::{indexmap::FxIndexMap, path_ext::PathExt};

use super::BuildContext;

/// Global name of the iife wrapper.
const BUNDLE_NAME: &str = "Rollup";

/// Directories bare imports are resolved from: every app's `node_modules`, then every
/// app folder so a script of another app can be imported by its full path. Only the
/// ones present on disk are kept.
pub fn node_resolve_paths<F: FileSystem>(ctx: &BuildContext<'_, F>) -> Vec<PathBuf> {
  let bench = ctx.bench;
  let node_modules = bench.apps().iter().map(|app| bench.app_path(app).join("../node_modules").normalize());
  let app_folders = bench.apps().iter().map(|app| bench.app_path(app).join("..").normalize());

  node_modules.chain(app_folders).filter(|path| bench.fs().exists(path)).collect_vec()
}

pub fn get_options_for_js<F: FileSystem>(
  ctx: &BuildContext<'_, F>,
  output_file: &str,
  input_files: Vec<PathBuf>,
) -> BundlerOptions {
  let bench_root = ctx.bench.root();
  let PluginSet { multi_entry, commonjs, node_resolve, buble } = ctx.plugins;

  let mut plugins = vec![
    PluginOptions::MultiEntry { module: multi_entry.to_string() },
    PluginOptions::FrappeHtml,
    PluginOptions::IgnoreCss,
    PluginOptions::Vue { module: PluginSet::VUE.to_string() },
    PluginOptions::Buble {
      module: buble.to_string(),
      options: BubleOptions {
        object_assign: "Object.assign".to_string(),
        transforms: BubleTransforms { dangerous_for_of: true, classes: false, async_await: false },
        exclude: vec![
          bench_root.join("**/*.css").expect_to_slash(),
          bench_root.join("**/*.less").expect_to_slash(),
        ],
      },
    },
    PluginOptions::CommonJs { module: commonjs.to_string() },
    PluginOptions::NodeResolve {
      module: node_resolve.to_string(),
      options: NodeResolveOptions {
        custom_resolve_options: ResolveOptions { paths: node_resolve_paths(ctx) },
      },
    },
  ];

  if ctx.run_mode.is_production() {
    plugins.push(PluginOptions::Terser { module: PluginSet::TERSER.to_string() });
  }

  let mut globals = FxIndexMap::default();
  globals.insert("jquery".to_string(), "window.jQuery".to_string());

  BundlerOptions {
    output_file: output_file.to_string(),
    input_options: InputOptions {
      input: input_files.into_iter().map(Into::into).collect(),
      plugins,
      context: Some("window".to_string()),
      external: vec!["jquery".to_string()],
      on_warn: OnWarn::Script,
    },
    output_options: OutputOptions {
      file: ctx.bench.assets_path().join(output_file).normalize(),
      format: OutputFormat::Iife,
      name: Some(BUNDLE_NAME.to_string()),
      globals,
      sourcemap: true,
    },
  }
}
