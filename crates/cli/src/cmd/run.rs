//! Run command implementation.
//!
//! Evaluates the current landmines, clobbers the output directory when they
//! changed, and records them for the next build.

use anyhow::{Context, Result};

use landmines_lib::Guard;

use super::Invocation;
use crate::output::{print_diff, print_json};

pub fn cmd_run(invocation: Invocation) -> Result<()> {
  let landmines = invocation.collect()?;
  let guard = Guard::new(invocation.config);

  let decision = guard
    .evaluate_and_update_tool(invocation.build_tool, &landmines)
    .context("Landmine check failed")?;

  if invocation.output.is_json() {
    print_json(&decision)?;
  } else if let Some(diff) = &decision.diff {
    println!("Clobbering due to:");
    print_diff(diff);
  }

  Ok(())
}
