use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{LandmineProvider, ProviderError};

/// Runs an executable script and takes one landmine per stdout line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptProvider {
  path: PathBuf,
}

impl ScriptProvider {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl LandmineProvider for ScriptProvider {
  fn name(&self) -> String {
    self.path.display().to_string()
  }

  fn produce_lines(&self) -> Result<Vec<String>, ProviderError> {
    debug!(script = %self.path.display(), "running landmine script");

    let output = Command::new(&self.path).output().map_err(|source| ProviderError::Spawn {
      path: self.path.clone(),
      source,
    })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
      debug!(script = %self.path.display(), stderr = %stderr.trim(), "landmine script stderr");
    }

    if !output.status.success() {
      return Err(ProviderError::ExitStatus {
        path: self.path.clone(),
        status: output.status.to_string(),
      });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| ProviderError::InvalidOutput {
      path: self.path.clone(),
    })?;

    Ok(stdout.lines().map(str::to_string).collect())
  }
}
