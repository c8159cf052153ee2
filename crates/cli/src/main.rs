use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use landmines_lib::BuildTool;
use landmines_lib::config::{GuardConfig, Verbosity, build_tool_from_env, resolve_root};

mod cmd;
mod output;

use cmd::{Invocation, cmd_print, cmd_run, cmd_status};
use output::{OutputFormat, print_error};

/// landmines - clobber the build output directory when build semantics change
#[derive(Parser)]
#[command(name = "landmines")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Project root the output directory is resolved against
  #[arg(long, global = true, value_name = "DIR", default_value = ".")]
  root: PathBuf,

  /// Build tool (default: first entry of GYP_GENERATORS, else ninja)
  #[arg(short = 't', long, global = true, value_name = "ID")]
  build_tool: Option<String>,

  /// Script that prints landmines to stdout; repeat to run several in order.
  /// An extra script can be given with EXTRA_LANDMINES_SCRIPT.
  #[arg(short = 's', long = "landmine-script", global = true, value_name = "PATH")]
  landmine_scripts: Vec<PathBuf>,

  /// Emit debugging diagnostics (also enabled by LANDMINES_VERBOSE)
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Check landmines and clobber the output directory if they changed (default)
  Run,

  /// Print the current landmines without touching anything
  Print,

  /// Show paths and whether the next run would clobber
  Status,
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let verbosity = Verbosity::from_flag_or_env(cli.verbose);
  init_tracing(verbosity);

  match run(cli, verbosity) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}

fn init_tracing(verbosity: Verbosity) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .without_time()
    .init();
}

fn run(cli: Cli, verbosity: Verbosity) -> Result<()> {
  let build_tool = match &cli.build_tool {
    Some(id) => BuildTool::parse(id)?,
    None => build_tool_from_env()?,
  };

  // Skip categories must succeed without looking at the filesystem
  let root = if build_tool.is_skip() {
    cli.root.clone()
  } else {
    resolve_root(&cli.root).with_context(|| format!("Failed to resolve project root {}", cli.root.display()))?
  };
  let config = GuardConfig::from_env(root).with_verbosity(verbosity);
  debug!(
    build_tool = %build_tool,
    root = %config.root.display(),
    verbosity = ?config.verbosity,
    scripts = cli.landmine_scripts.len(),
    "resolved invocation"
  );

  let invocation = Invocation {
    config,
    build_tool,
    scripts: cli.landmine_scripts,
    output: cli.output,
  };

  match cli.command.unwrap_or(Commands::Run) {
    Commands::Run => cmd_run(invocation),
    Commands::Print => cmd_print(invocation),
    Commands::Status => cmd_status(invocation),
  }
}
