use std::path::{Path, PathBuf};

use benchpack::{
  Bench, BuildContext, BundleKind, ConfigError, OutputFormat, PackageManager, PluginOptions,
  PluginSet, RunMode, compile_bench, get_bundler_options, get_options_for,
};
use serde_json::json;

struct TestBench {
  _dir: tempfile::TempDir,
  bench: Bench,
}

impl TestBench {
  fn new() -> Self {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write(root, "sites/apps.txt", "frappe\nerpnext\n");
    std::fs::create_dir_all(root.join("sites/assets")).unwrap();
    std::fs::create_dir_all(root.join("apps/frappe/node_modules/vue/dist")).unwrap();
    std::fs::create_dir_all(root.join("apps/erpnext/erpnext")).unwrap();
    write(
      root,
      "apps/frappe/frappe/public/build.json",
      r#"{
        "bundle": {
          "js/desk.min.js": ["public/js/a.js", "public/js/b.js"],
          "js/libs.min.js": ["node_modules/vue/dist/vue.js"],
          "css/desk.min.css": ["public/less/desk.less", "public/scss/desk.scss"],
          "website/css/website.css": ["public/less/website.less"]
        }
      }"#,
    );

    let bench = Bench::load(root).unwrap();
    Self { _dir: dir, bench }
  }

  fn root(&self) -> PathBuf {
    self.bench.root().to_path_buf()
  }

  fn ctx(&self, run_mode: RunMode) -> BuildContext<'_, benchpack::OsFileSystem> {
    BuildContext::new(&self.bench, PluginSet::NPM, run_mode)
  }
}

fn write(root: &Path, relative: &str, content: &str) {
  let path = root.join(relative);
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();
  std::fs::write(path, content).unwrap();
}

fn find<'a>(options: &'a [benchpack::BundlerOptions], output_file: &str) -> &'a benchpack::BundlerOptions {
  options.iter().find(|options| options.output_file == output_file).unwrap()
}

#[test]
fn script_inputs_keep_their_order() {
  let test_bench = TestBench::new();
  let root = test_bench.root();
  let ctx = test_bench.ctx(RunMode::Development);

  let options = get_bundler_options(
    &ctx,
    BundleKind::Script,
    "app.js",
    vec![root.join("a.js"), root.join("b.js")],
  );

  let inputs: Vec<_> = options.input_options.input.iter().map(|item| item.path().to_path_buf()).collect();
  assert_eq!(inputs, [root.join("a.js"), root.join("b.js")]);
  assert_eq!(options.output_file, "app.js");
  assert_eq!(options.output_options.file, root.join("sites/assets/app.js"));
}

#[test]
fn manifest_bundles_are_compiled_in_order() {
  let test_bench = TestBench::new();
  let root = test_bench.root();
  let options = get_options_for(&test_bench.ctx(RunMode::Development), "frappe").unwrap();

  let outputs: Vec<_> = options.iter().map(|options| options.output_file.as_str()).collect();
  assert_eq!(outputs, ["js/desk.min.js", "js/libs.min.js", "css/desk.min.css", "website/css/website.css"]);

  let desk = find(&options, "js/desk.min.js");
  let inputs: Vec<_> = desk.input_options.input.iter().map(|item| item.path().to_path_buf()).collect();
  assert_eq!(
    inputs,
    [root.join("apps/frappe/frappe/public/js/a.js"), root.join("apps/frappe/frappe/public/js/b.js")]
  );
}

#[test]
fn dependency_inputs_resolve_next_to_the_app() {
  let test_bench = TestBench::new();
  let root = test_bench.root();
  let options = get_options_for(&test_bench.ctx(RunMode::Development), "frappe").unwrap();

  let libs = find(&options, "js/libs.min.js");
  assert_eq!(libs.input_options.input[0].path(), root.join("apps/frappe/node_modules/vue/dist/vue.js"));
}

#[test]
fn unknown_output_extension_is_fatal() {
  let test_bench = TestBench::new();
  write(&test_bench.root(), "apps/erpnext/erpnext/public/build.json", r#"{ "bundle": { "app.bundle": ["a.js"] } }"#);

  let err = get_options_for(&test_bench.ctx(RunMode::Development), "erpnext").unwrap_err();
  assert!(err.to_string().contains("app.bundle"));
  assert!(matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::UnknownOutputExtension(_))));

  let err = compile_bench(&test_bench.ctx(RunMode::Development), &[]).unwrap_err();
  assert!(matches!(err.config_error(), Some(ConfigError::UnknownOutputExtension(file)) if file == "app.bundle"));
}

#[test]
fn missing_manifest_compiles_to_nothing() {
  let test_bench = TestBench::new();
  assert!(get_options_for(&test_bench.ctx(RunMode::Production), "erpnext").unwrap().is_empty());
}

#[test]
fn script_plugin_chain() {
  let test_bench = TestBench::new();
  let options = get_options_for(&test_bench.ctx(RunMode::Development), "frappe").unwrap();
  let desk = find(&options, "js/desk.min.js");

  let names: Vec<_> = desk.input_options.plugin_names().collect();
  assert_eq!(
    names,
    ["multi-entry", "frappe-html", "ignore-css", "vue", "buble", "commonjs", "node-resolve"]
  );
  assert_eq!(desk.output_options.format, OutputFormat::Iife);
  assert_eq!(desk.output_options.globals.get("jquery").map(String::as_str), Some("window.jQuery"));
  assert_eq!(desk.input_options.external, ["jquery"]);
}

#[test]
fn production_scripts_are_minified() {
  let test_bench = TestBench::new();

  let development = get_options_for(&test_bench.ctx(RunMode::Development), "frappe").unwrap();
  assert!(!find(&development, "js/desk.min.js").input_options.has_plugin("terser"));

  let production = get_options_for(&test_bench.ctx(RunMode::Production), "frappe").unwrap();
  let desk = find(&production, "js/desk.min.js");
  assert!(desk.input_options.has_plugin("terser"));
  assert_eq!(desk.input_options.plugin_names().last(), Some("terser"));
}

#[test]
fn node_resolve_paths_only_keep_existing_directories() {
  let test_bench = TestBench::new();
  let root = test_bench.root();
  let options = get_options_for(&test_bench.ctx(RunMode::Development), "frappe").unwrap();

  let paths = find(&options, "js/desk.min.js")
    .input_options
    .plugins
    .iter()
    .find_map(|plugin| match plugin {
      PluginOptions::NodeResolve { options, .. } => Some(options.custom_resolve_options.paths.clone()),
      _ => None,
    })
    .unwrap();

  assert_eq!(paths, [root.join("apps/frappe/node_modules"), root.join("apps/frappe"), root.join("apps/erpnext")]);
}

fn postcss_minimize(options: &benchpack::BundlerOptions) -> bool {
  options
    .input_options
    .plugins
    .iter()
    .find_map(|plugin| match plugin {
      PluginOptions::PostCss { options, .. } => Some(options.minimize),
      _ => None,
    })
    .unwrap()
}

#[test]
fn stylesheets_under_css_are_minified_in_production() {
  let test_bench = TestBench::new();

  let production = get_options_for(&test_bench.ctx(RunMode::Production), "frappe").unwrap();
  assert!(postcss_minimize(find(&production, "css/desk.min.css")));
  assert!(!postcss_minimize(find(&production, "website/css/website.css")));

  let development = get_options_for(&test_bench.ctx(RunMode::Development), "frappe").unwrap();
  assert!(!postcss_minimize(find(&development, "css/desk.min.css")));
}

#[test]
fn stylesheet_bundle_shape() {
  let test_bench = TestBench::new();
  let root = test_bench.root();
  let options = get_options_for(&test_bench.ctx(RunMode::Development), "frappe").unwrap();
  let desk = find(&options, "css/desk.min.css");

  let names: Vec<_> = desk.input_options.plugin_names().collect();
  assert_eq!(names, ["multi-entry", "postcss"]);
  assert_eq!(desk.output_options.format, OutputFormat::Cjs);
  assert_eq!(desk.output_options.file, root.join("sites/assets/css/rollup.manifest.css"));

  let extract = desk.input_options.plugins.iter().find_map(|plugin| match plugin {
    PluginOptions::PostCss { options, .. } => Some(options.extract.clone()),
    _ => None,
  });
  assert_eq!(extract, Some(root.join("sites/assets/css/desk.min.css")));
}

#[test]
fn yarn_plugin_names() {
  let test_bench = TestBench::new();
  let plugins = PluginSet::for_package_manager(PackageManager::Yarn);
  let ctx = BuildContext::new(&test_bench.bench, plugins, RunMode::Development);

  let options = get_options_for(&ctx, "frappe").unwrap();
  let modules: Vec<_> =
    find(&options, "js/desk.min.js").input_options.plugins.iter().filter_map(PluginOptions::module).collect();

  assert_eq!(
    modules,
    [
      "rollup-plugin-multi-entry",
      "rollup-plugin-vue",
      "rollup-plugin-buble",
      "rollup-plugin-commonjs",
      "rollup-plugin-node-resolve"
    ]
  );
}

#[test]
fn compile_bench_serializes_for_the_runner() {
  let test_bench = TestBench::new();
  let options = compile_bench(&test_bench.ctx(RunMode::Development), &[]).unwrap();
  assert_eq!(options.len(), 4);

  let value = serde_json::to_value(&options[0]).unwrap();
  assert_eq!(value["outputFile"], json!("js/desk.min.js"));
  assert_eq!(value["inputOptions"]["context"], json!("window"));
  assert_eq!(value["inputOptions"]["onWarn"], json!("script"));
  assert_eq!(value["inputOptions"]["plugins"][4]["options"]["transforms"]["asyncAwait"], json!(false));
  assert_eq!(value["outputOptions"]["format"], json!("iife"));
  assert_eq!(value["outputOptions"]["name"], json!("Rollup"));
  assert_eq!(value["outputOptions"]["globals"]["jquery"], json!("window.jQuery"));
  assert_eq!(value["outputOptions"]["sourcemap"], json!(true));
}

#[test]
fn compile_bench_only_compiles_selected_apps() {
  let test_bench = TestBench::new();
  write(
    &test_bench.root(),
    "apps/erpnext/erpnext/public/build.json",
    r#"{ "bundle": { "js/erpnext.min.js": ["public/js/erpnext.js"] } }"#,
  );
  let ctx = test_bench.ctx(RunMode::Development);

  let options = compile_bench(&ctx, &["erpnext".to_string()]).unwrap();
  let outputs: Vec<_> = options.iter().map(|options| options.output_file.as_str()).collect();
  assert_eq!(outputs, ["js/erpnext.min.js"]);

  let options = compile_bench(&ctx, &[]).unwrap();
  assert_eq!(options.len(), 5);
}

#[test]
fn compile_bench_skips_apps_that_are_not_installed() {
  let test_bench = TestBench::new();
  let ctx = test_bench.ctx(RunMode::Development);

  let options = compile_bench(&ctx, &["hrms".to_string(), "frappe".to_string()]).unwrap();
  assert_eq!(options.len(), 4);
  assert!(options.iter().all(|options| options.output_options.file.starts_with(test_bench.root().join("sites/assets"))));

  assert!(compile_bench(&ctx, &["hrms".to_string()]).unwrap().is_empty());
}
