//! Status command implementation.
//!
//! Shows the resolved output directory and marker, and whether the next run
//! would clobber. Read-only.

use anyhow::{Context, Result};

use landmines_lib::Guard;

use super::Invocation;
use crate::output::{print_diff, print_info, print_json, print_stat, print_success, print_warning};

pub fn cmd_status(invocation: Invocation) -> Result<()> {
  let landmines = invocation.collect()?;
  let guard = Guard::new(invocation.config);

  let inspection = guard
    .inspect(invocation.build_tool, &landmines)
    .context("Failed to inspect landmines")?;

  if invocation.output.is_json() {
    let json_output = serde_json::json!({
      "inspection": inspection,
      "landmines": landmines,
      "root": guard.config().root,
    });
    return print_json(&json_output);
  }

  print_stat("Build tool", inspection.build_tool.as_str());
  print_stat("Root", &guard.config().root.display().to_string());

  let (Some(output_dir), Some(marker_path)) = (&inspection.output_dir, &inspection.marker_path) else {
    println!();
    print_info(&format!(
      "Build tool '{}' does not use landmines",
      inspection.build_tool
    ));
    return Ok(());
  };

  let exists = if inspection.output_dir_exists { "" } else { " (missing)" };
  print_stat("Output dir", &format!("{}{}", output_dir.display(), exists));
  print_stat("Marker", &marker_path.display().to_string());
  print_stat("Landmines", &landmines.len().to_string());
  println!();

  match &inspection.diff {
    Some(diff) => {
      print_warning("Landmines changed; the next run will clobber the output directory");
      print_diff(diff);
    }
    None if !inspection.has_marker => print_info("No marker yet; the next run will plant one"),
    None => print_success("Landmines unchanged"),
  }

  Ok(())
}
