use anyhow::Result;

use super::Invocation;
use crate::output::print_json;

/// Print the landmines the providers produce right now, touching nothing.
pub fn cmd_print(invocation: Invocation) -> Result<()> {
  let landmines = invocation.collect()?;

  if invocation.output.is_json() {
    print_json(&landmines)?;
  } else {
    print!("{}", landmines.render());
  }

  Ok(())
}
