//! Error types for the landmine guard

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal outcomes of evaluating and updating the landmine marker.
///
/// None of these are retried. When any of them is returned the marker still
/// holds its previous contents.
#[derive(Debug, Error)]
pub enum GuardError {
  #[error("Unexpected build tool '{0}' (expected one of: {expected})", expected = crate::build_tool::supported_ids())]
  UnsupportedBuildTool(String),

  #[error("Failed to create output directory {path}: {source}")]
  DirectoryCreateFailed {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to clobber output directory {path}: {source}")]
  DirectoryDeleteFailed {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to read landmine marker {path}: {source}")]
  MarkerReadFailed {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("Failed to write landmine marker {path}: {source}")]
  MarkerWriteFailed {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

pub type Result<T> = std::result::Result<T, GuardError>;
