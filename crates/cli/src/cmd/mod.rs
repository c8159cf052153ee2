mod print;
mod run;
mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};

use landmines_lib::{BuildTool, GuardConfig, LandmineSet, collect_landmines};

use crate::output::OutputFormat;

pub use print::cmd_print;
pub use run::cmd_run;
pub use status::cmd_status;

/// Everything a command needs, resolved once from flags and environment.
pub struct Invocation {
  pub config: GuardConfig,
  pub build_tool: BuildTool,
  pub scripts: Vec<PathBuf>,
  pub output: OutputFormat,
}

impl Invocation {
  /// Run the configured providers in order.
  ///
  /// Skip-category builds never run providers.
  pub fn collect(&self) -> Result<LandmineSet> {
    if self.build_tool.is_skip() {
      return Ok(LandmineSet::new());
    }
    let providers = self.config.providers(self.build_tool, &self.scripts);
    collect_landmines(&providers).context("Failed to collect landmines")
  }
}
