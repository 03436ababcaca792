mod args;
mod types;

use std::{path::Path, process::ExitCode};

use ansi_term::Colour;
use anyhow::Context;
use args::{BenchArgs, Command, CompileArgs, WarningsArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use benchpack::{
  Bench, BenchConfig, BuildContext, BuildError, BundleWarning, OnWarn, OsFileSystem, PackageManager,
  PluginSet, RunMode, compile_bench,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[command(subcommand)]
  command: Command,
}

fn init_tracing() {
  let filter = EnvFilter::try_from_env("BENCHPACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn package_manager(args: &BenchArgs) -> anyhow::Result<PackageManager> {
  if let Some(package_manager) = &args.package_manager {
    return Ok(package_manager.clone().into());
  }

  let path = BenchConfig::path(args.config.as_deref());
  let config = BenchConfig::load(&OsFileSystem, &path)?;
  Ok(config.package_manager()?)
}

fn compile(args: CompileArgs) -> Result<(), BuildError> {
  let CompileArgs { bench: bench_args, output } = args;

  let plugins = PluginSet::for_package_manager(package_manager(&bench_args)?);
  let run_mode = if bench_args.production { RunMode::Production } else { RunMode::from_env() };

  let bench_path = match bench_args.bench_path {
    Some(path) => path,
    None => std::env::current_dir().context("Failed to get current dir")?,
  };
  let bench = Bench::load(&bench_path)?;

  tracing::debug!(?plugins, ?run_mode, "compiling bundles");
  let ctx = BuildContext::new(&bench, plugins, run_mode);
  let options = compile_bench(&ctx, &bench_args.app)?;

  let json = if output.pretty { serde_json::to_string_pretty(&options) } else { serde_json::to_string(&options) };
  println!("{}", json.context("Failed to serialize bundler options")?);

  Ok(())
}

fn read_warnings(path: &Path) -> anyhow::Result<Vec<BundleWarning>> {
  let source =
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  serde_json::from_str(&source).with_context(|| format!("Invalid warnings in {}", path.display()))
}

fn report_warnings(args: WarningsArgs) -> Result<(), BuildError> {
  let on_warn: OnWarn = args.kind.into();

  for warning in read_warnings(&args.file)? {
    if let Some(rendered) = on_warn.render(&warning) {
      println!("{rendered}");
    }
  }

  Ok(())
}

fn main() -> ExitCode {
  init_tracing();
  let args = Commands::parse();

  let result = match args.command {
    Command::Compile(args) => compile(args),
    Command::Warnings(args) => report_warnings(args),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {:#}", Colour::Red.paint("Error:"), error);
      }
      ExitCode::FAILURE
    }
  }
}
