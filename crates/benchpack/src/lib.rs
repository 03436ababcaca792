mod bench;
mod bench_config;
mod compiler;
mod options;

pub use crate::{
  bench::Bench,
  bench_config::{BENCH_CONFIG_ENV, BenchConfig, DEFAULT_BENCH_CONFIG_PATH, PackageManagement},
  compiler::{compile_bench, get_options_for, resolve_input},
  options::{BuildContext, get_bundler_options, get_options_for_css, get_options_for_js},
};
pub use benchpack_common::*;
pub use benchpack_error::{BuildError, BuildResult, ConfigError};
pub use benchpack_fs::{FileSystem, OsFileSystem};
pub use benchpack_plugin::{Plugin, PluginSet};
