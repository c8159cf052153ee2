//! Landmine providers.
//!
//! A provider is anything that can describe the current build's
//! clobber-sensitive conditions as text lines. Providers run one after
//! another in the configured order and their lines are concatenated.

mod host;
mod script;

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;

use crate::landmine::LandmineSet;

pub use host::HostProvider;
pub use script::ScriptProvider;

#[derive(Debug, Error)]
pub enum ProviderError {
  #[error("Failed to run landmine script {path}: {source}")]
  Spawn {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Landmine script {path} exited with {status}")]
  ExitStatus { path: PathBuf, status: String },

  #[error("Landmine script {path} wrote non-UTF-8 output")]
  InvalidOutput { path: PathBuf },
}

/// A source of landmine lines.
pub trait LandmineProvider {
  /// Short label for logs.
  fn name(&self) -> String;

  /// Lines describing the current build, in a stable order.
  fn produce_lines(&self) -> Result<Vec<String>, ProviderError>;
}

/// A fixed list of lines.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
  label: String,
  lines: Vec<String>,
}

impl StaticProvider {
  pub fn new<I, S>(label: impl Into<String>, lines: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      label: label.into(),
      lines: lines.into_iter().map(Into::into).collect(),
    }
  }
}

impl LandmineProvider for StaticProvider {
  fn name(&self) -> String {
    self.label.clone()
  }

  fn produce_lines(&self) -> Result<Vec<String>, ProviderError> {
    Ok(self.lines.clone())
  }
}

/// Run every provider in order and concatenate their trimmed lines.
///
/// The first failing provider aborts collection so a partial set never
/// reaches the guard.
pub fn collect_landmines(providers: &[Box<dyn LandmineProvider>]) -> Result<LandmineSet, ProviderError> {
  let mut landmines = LandmineSet::new();
  for provider in providers {
    let lines = provider.produce_lines()?;
    debug!(provider = %provider.name(), lines = lines.len(), "collected landmines");
    landmines.extend(lines);
  }
  Ok(landmines)
}
