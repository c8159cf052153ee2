//! The persisted landmine marker.
//!
//! # Storage Layout
//!
//! ```text
//! <root>/
//! ├── .landmines        # previous LandmineSet, one line per landmine
//! └── out/              # build output directory guarded by the marker
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

use crate::consts::MARKER_FILENAME;
use crate::error::GuardError;
use crate::landmine::LandmineSet;

/// What a previous run left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerContents {
  /// File text with `\r\n` and lone `\r` line endings folded to `\n`.
  pub text: String,
  /// Last modification time, shown in the clobber diff header.
  pub modified: Option<SystemTime>,
}

impl MarkerContents {
  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
  path: PathBuf,
}

impl Marker {
  pub fn new(path: PathBuf) -> Self {
    Self { path }
  }

  /// The marker that guards `out_dir`, stored beside it.
  pub fn for_output_dir(out_dir: &Path) -> Self {
    let parent = out_dir.parent().unwrap_or(out_dir);
    Self::new(parent.join(MARKER_FILENAME))
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Read the marker. `Ok(None)` means no previous run recorded one.
  ///
  /// Anything other than "not found" is an error: an unreadable marker must
  /// never be mistaken for an empty one.
  pub fn read(&self) -> Result<Option<MarkerContents>, GuardError> {
    let text = match fs::read_to_string(&self.path) {
      Ok(text) => text,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = %self.path.display(), "no landmine marker");
        return Ok(None);
      }
      Err(e) => return Err(self.read_error(e)),
    };

    let modified = fs::metadata(&self.path).and_then(|m| m.modified()).ok();
    Ok(Some(MarkerContents {
      text: normalize_newlines(&text),
      modified,
    }))
  }

  /// Replace the marker with `landmines`.
  ///
  /// Writes to a temporary file in the same directory, then renames it over
  /// the marker so a crash never leaves a half-written file. The file is
  /// created world-readable (subject to the umask) like a plain write.
  pub fn write(&self, landmines: &LandmineSet) -> Result<(), GuardError> {
    let dir = self.path.parent().unwrap_or(Path::new("."));

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
      use std::os::unix::fs::PermissionsExt;
      builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(|e| self.write_error(e))?;
    tmp
      .write_all(landmines.render().as_bytes())
      .and_then(|()| tmp.flush())
      .map_err(|e| self.write_error(e))?;
    tmp.persist(&self.path).map_err(|e| self.write_error(e.error))?;

    debug!(path = %self.path.display(), lines = landmines.len(), "wrote landmine marker");
    Ok(())
  }

  fn read_error(&self, source: io::Error) -> GuardError {
    GuardError::MarkerReadFailed {
      path: self.path.clone(),
      source,
    }
  }

  fn write_error(&self, source: io::Error) -> GuardError {
    GuardError::MarkerWriteFailed {
      path: self.path.clone(),
      source,
    }
  }
}

/// Fold CRLF and lone CR line endings to LF.
fn normalize_newlines(text: &str) -> String {
  if !text.contains('\r') {
    return text.to_string();
  }
  text.replace("\r\n", "\n").replace('\r', "\n")
}
