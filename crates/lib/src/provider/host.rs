use crate::build_tool::BuildTool;
use crate::platform::HostPlatform;

use super::{LandmineProvider, ProviderError};

/// Built-in provider that runs ahead of any configured scripts.
///
/// Switching build tools or building on a different host both change the
/// meaning of whatever is already in the output directory.
#[derive(Debug, Clone)]
pub struct HostProvider {
  build_tool: BuildTool,
  platform: HostPlatform,
}

impl HostProvider {
  pub fn new(build_tool: BuildTool) -> Self {
    Self::with_platform(build_tool, HostPlatform::current())
  }

  pub fn with_platform(build_tool: BuildTool, platform: HostPlatform) -> Self {
    Self { build_tool, platform }
  }
}

impl LandmineProvider for HostProvider {
  fn name(&self) -> String {
    "host".to_string()
  }

  fn produce_lines(&self) -> Result<Vec<String>, ProviderError> {
    let mut lines = vec![format!("build_tool:{}", self.build_tool)];
    lines.extend(self.platform.landmine_lines());
    Ok(lines)
  }
}
