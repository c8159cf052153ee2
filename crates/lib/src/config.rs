//! Guard configuration.
//!
//! Everything the guard learns from the process environment is read here,
//! once, into a [`GuardConfig`] value. The rest of the crate never touches
//! environment variables.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::build_tool::BuildTool;
use crate::consts::{DEFAULT_OUT_DIR_NAME, EXTRA_SCRIPT_ENV, GENERATORS_ENV, OUT_DIR_ENV, VERBOSE_ENV};
use crate::error::GuardError;
use crate::provider::{HostProvider, LandmineProvider, ScriptProvider};

/// How much diagnostic output the subscriber lets through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
  /// Errors only.
  #[default]
  ErrorOnly,
  /// Debug-level diagnostics as well.
  Diagnostic,
}

impl Verbosity {
  /// Diagnostic when `flag` is set or the verbose variable is present at all.
  pub fn from_flag_or_env(flag: bool) -> Self {
    if flag || std::env::var_os(VERBOSE_ENV).is_some() {
      Self::Diagnostic
    } else {
      Self::ErrorOnly
    }
  }

  /// Filter directive for a `tracing` subscriber.
  pub fn filter_directive(self) -> &'static str {
    match self {
      Self::ErrorOnly => "error",
      Self::Diagnostic => "debug",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuardConfig {
  /// Project root that output directories are resolved against.
  pub root: PathBuf,
  /// Output directory name for the make/ninja family.
  pub out_dir_name: String,
  /// Script appended after the configured providers.
  pub extra_script: Option<PathBuf>,
  /// Log level the caller's subscriber was installed with.
  pub verbosity: Verbosity,
}

impl GuardConfig {
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self {
      root: root.into(),
      out_dir_name: DEFAULT_OUT_DIR_NAME.to_string(),
      extra_script: None,
      verbosity: Verbosity::default(),
    }
  }

  /// Configuration for `root` with overrides taken from the environment.
  ///
  /// Empty values are treated as unset; an empty output directory name would
  /// otherwise resolve to the project root itself.
  pub fn from_env(root: impl Into<PathBuf>) -> Self {
    let mut config = Self::new(root);
    if let Some(name) = non_empty_var(OUT_DIR_ENV) {
      config.out_dir_name = name;
    }
    config.extra_script = non_empty_var(EXTRA_SCRIPT_ENV).map(PathBuf::from);
    config
  }

  pub fn with_out_dir_name(mut self, name: impl Into<String>) -> Self {
    self.out_dir_name = name.into();
    self
  }

  pub fn with_extra_script(mut self, script: impl Into<PathBuf>) -> Self {
    self.extra_script = Some(script.into());
    self
  }

  pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
    self.verbosity = verbosity;
    self
  }

  /// Output directory for `tool`, or `None` for skip categories.
  pub fn output_dir(&self, tool: BuildTool) -> Option<PathBuf> {
    tool.output_dir(&self.root, &self.out_dir_name)
  }

  /// Providers in invocation order.
  ///
  /// The built-in host provider always runs first, followed by the given
  /// scripts in order. The extra script, if configured, runs last.
  pub fn providers(&self, build_tool: BuildTool, scripts: &[PathBuf]) -> Vec<Box<dyn LandmineProvider>> {
    let mut providers: Vec<Box<dyn LandmineProvider>> = vec![Box::new(HostProvider::new(build_tool))];
    providers.extend(
      scripts
        .iter()
        .map(|path| Box::new(ScriptProvider::new(path)) as Box<dyn LandmineProvider>),
    );

    if let Some(extra) = &self.extra_script {
      providers.push(Box::new(ScriptProvider::new(extra)));
    }
    providers
  }
}

/// Canonicalize the project root without Windows `\\?\` prefixes.
pub fn resolve_root(root: &Path) -> io::Result<PathBuf> {
  dunce::canonicalize(root)
}

/// The build tool named by the generators variable, defaulting to ninja.
pub fn build_tool_from_env() -> Result<BuildTool, GuardError> {
  BuildTool::from_generators(std::env::var(GENERATORS_ENV).ok().as_deref())
}

fn non_empty_var(key: &str) -> Option<String> {
  std::env::var(key).ok().filter(|value| !value.is_empty())
}
