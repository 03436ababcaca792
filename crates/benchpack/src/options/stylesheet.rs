use std::path::PathBuf;

use sugar_path::SugarPath;

use benchpack_common::{
  BundlerOptions, InputOptions, OnWarn, OutputFormat, OutputOptions, PluginOptions,
  PostCssOptions, PreprocessorLoader,
};
use benchpack_fs::FileSystem;
use benchpack_plugin::PluginSet;
use benchpack_utils::{indexmap::FxIndexMap, path_ext::PathExt};

use super::BuildContext;

/// Only stylesheets in this top-level assets folder are minified in production.
const MINIFIED_FOLDER: &str = "css/";

/// The script side of a stylesheet bundle. It is always empty, the css is extracted by
/// postcss, but the bundler insists on writing it.
const PLACEHOLDER_OUTPUT: &str = "css/rollup.manifest.css";

pub fn should_minimize_css(output_file: &str, is_production: bool) -> bool {
  output_file.starts_with(MINIFIED_FOLDER) && is_production
}

pub fn get_options_for_css<F: FileSystem>(
  ctx: &BuildContext<'_, F>,
  output_file: &str,
  input_files: Vec<PathBuf>,
) -> BundlerOptions {
  let bench = ctx.bench;
  let bench_root = bench.root();
  let assets_path = bench.assets_path();
  let output_path = assets_path.join(output_file).normalize();

  let plugins = vec![
    PluginOptions::MultiEntry { module: ctx.plugins.multi_entry.to_string() },
    PluginOptions::PostCss {
      module: PluginSet::POSTCSS.to_string(),
      options: PostCssOptions {
        extract: output_path,
        loaders: vec![
          PreprocessorLoader::Less { paths: vec![bench.public_path("frappe").join("less")] },
          PreprocessorLoader::Sass(bench.scss_options()),
        ],
        include: vec![
          bench_root.join("**/*.less").expect_to_slash(),
          bench_root.join("**/*.scss").expect_to_slash(),
          bench_root.join("**/*.css").expect_to_slash(),
        ],
        minimize: should_minimize_css(output_file, ctx.run_mode.is_production()),
      },
    },
  ];

  BundlerOptions {
    output_file: output_file.to_string(),
    input_options: InputOptions {
      input: input_files.into_iter().map(Into::into).collect(),
      plugins,
      context: None,
      external: vec![],
      on_warn: OnWarn::Stylesheet,
    },
    output_options: OutputOptions {
      file: assets_path.join(PLACEHOLDER_OUTPUT),
      format: OutputFormat::Cjs,
      name: None,
      globals: FxIndexMap::default(),
      sourcemap: false,
    },
  }
}

#[test]
fn test_should_minimize_css() {
  assert!(should_minimize_css("css/desk.min.css", true));
  assert!(!should_minimize_css("css/desk.min.css", false));
  assert!(!should_minimize_css("website/css/website.css", true));
  assert!(!should_minimize_css("scss/desk.css", true));
}
