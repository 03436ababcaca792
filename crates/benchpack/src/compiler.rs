use std::path::{Path, PathBuf};

use benchpack_common::{BundleKind, BundlerOptions, NODE_MODULES_PREFIX};
use benchpack_error::{BuildError, BuildResult};
use benchpack_fs::FileSystem;
use benchpack_utils::path_ext::PathExt;

use crate::options::{BuildContext, get_bundler_options};

/// Inputs are relative to the app's package, except dependencies which live next to it.
pub fn resolve_input(app_path: &Path, input_file: &str) -> PathBuf {
  if input_file.starts_with(NODE_MODULES_PREFIX) {
    Path::new(input_file).resolve_from(&app_path.join(".."))
  } else {
    Path::new(input_file).resolve_from(app_path)
  }
}

/// Bundler options for every bundle declared in the `build.json` of `app`, in declaration order.
pub fn get_options_for<F: FileSystem>(
  ctx: &BuildContext<'_, F>,
  app: &str,
) -> anyhow::Result<Vec<BundlerOptions>> {
  let Some(manifest) = ctx.bench.build_manifest(app)? else {
    return Ok(vec![]);
  };

  let app_path = ctx.bench.app_path(app);

  manifest
    .bundles()
    .map(|(output_file, input_files)| -> anyhow::Result<BundlerOptions> {
      let kind = BundleKind::classify(output_file)?;
      let input_files =
        input_files.iter().map(|input_file| resolve_input(&app_path, input_file)).collect();

      tracing::debug!(app, output_file, %kind, "compiled bundle");
      Ok(get_bundler_options(ctx, kind, output_file, input_files))
    })
    .collect()
}

/// Compiles `apps`, or every app of the bench when empty. Failures of all apps are
/// collected before giving up.
pub fn compile_bench<F: FileSystem>(
  ctx: &BuildContext<'_, F>,
  apps: &[String],
) -> BuildResult<Vec<BundlerOptions>> {
  let apps = if apps.is_empty() { ctx.bench.apps() } else { apps };

  let mut options = vec![];
  let mut errors = vec![];

  for app in apps {
    if !ctx.bench.apps().contains(app) {
      tracing::warn!(app, "app is not installed on this bench, skipping");
      continue;
    }

    match get_options_for(ctx, app) {
      Ok(app_options) => options.extend(app_options),
      Err(error) => errors.push(error.context(format!("Failed to compile bundles of '{app}'"))),
    }
  }

  if errors.is_empty() { Ok(options) } else { Err(BuildError::from(errors)) }
}

#[test]
fn test_resolve_input() {
  let app_path = Path::new("/bench/apps/frappe/frappe");

  assert_eq!(
    resolve_input(app_path, "public/js/frappe/desk.js"),
    PathBuf::from("/bench/apps/frappe/frappe/public/js/frappe/desk.js")
  );
  assert_eq!(
    resolve_input(app_path, "node_modules/vue/dist/vue.js"),
    PathBuf::from("/bench/apps/frappe/node_modules/vue/dist/vue.js")
  );
  assert_eq!(
    resolve_input(app_path, "public/node_modules/x.js"),
    PathBuf::from("/bench/apps/frappe/frappe/public/node_modules/x.js")
  );
}
