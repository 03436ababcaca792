use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::types::{bundle_kind::BundleKind, package_manager::PackageManager};

#[derive(Subcommand)]
pub enum Command {
  /// Print the bundler options of every bundle declared by the apps as JSON.
  Compile(CompileArgs),
  /// Report bundler diagnostics the way the bench shows them.
  Warnings(WarningsArgs),
}

#[derive(Args)]
pub struct CompileArgs {
  #[clap(flatten)]
  pub bench: BenchArgs,

  #[clap(flatten)]
  pub output: OutputArgs,
}

#[derive(Args)]
pub struct BenchArgs {
  /// Root of the bench, defaults to the current directory.
  #[clap(long)]
  pub bench_path: Option<PathBuf>,

  /// Only compile these apps.
  #[clap(long, action = clap::ArgAction::Append)]
  pub app: Vec<String>,

  /// Bench system configuration holding the package manager.
  #[clap(long)]
  pub config: Option<PathBuf>,

  /// Skip the bench configuration and use this package manager.
  #[clap(long)]
  pub package_manager: Option<PackageManager>,

  /// Build as if `FRAPPE_ENV=production` was set.
  #[clap(long)]
  pub production: bool,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long)]
  pub pretty: bool,
}

#[derive(Args)]
pub struct WarningsArgs {
  #[clap(long)]
  pub kind: BundleKind,

  /// JSON array of warnings reported by the bundler runner.
  pub file: PathBuf,
}
