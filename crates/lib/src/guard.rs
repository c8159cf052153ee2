//! The landmine guard.
//!
//! Once per build the guard compares the landmines produced for this build
//! with the marker left by the previous one. Any difference, including a
//! change of order, clobbers the build output directory. The marker is then
//! rewritten so the next build compares against this one.
//!
//! ```text
//!   INITIAL ──write marker──▶ STABLE ◀──unchanged──┐
//!                               │                  │
//!                               └──changed──▶ delete output dir
//!                                               then write marker
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use serde::Serialize;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::build_tool::BuildTool;
use crate::config::GuardConfig;
use crate::diff::landmine_diff;
use crate::error::{GuardError, Result};
use crate::landmine::LandmineSet;
use crate::marker::{Marker, MarkerContents};

/// Recursive deletion of a build output directory.
pub trait Clobber {
  /// Delete `out_dir` and everything under it, returning how many entries
  /// were removed below it.
  fn clobber(&self, out_dir: &Path) -> io::Result<usize>;
}

/// Deletes with [`fs::remove_dir_all`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveDirAll;

impl Clobber for RemoveDirAll {
  fn clobber(&self, out_dir: &Path) -> io::Result<usize> {
    let entries = WalkDir::new(out_dir).min_depth(1).into_iter().filter_map(|e| e.ok()).count();
    fs::remove_dir_all(out_dir)?;
    Ok(entries)
  }
}

/// What the guard did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
  /// Skip-category build tool; nothing was touched.
  Skipped,
  /// No landmines now and none recorded before; nothing was touched.
  NoLandmines,
  /// No previous marker. The output directory was kept and the marker written.
  FirstRun,
  /// Landmines match the marker.
  Unchanged,
  /// Landmines differ from the marker; the output directory was deleted.
  Clobbered,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClobberDecision {
  pub build_tool: BuildTool,
  pub outcome: Outcome,
  /// `None` for skip categories.
  pub output_dir: Option<PathBuf>,
  /// `None` for skip categories.
  pub marker_path: Option<PathBuf>,
  /// Unified diff of old to new landmines, present only on clobber.
  pub diff: Option<String>,
  /// Filesystem entries deleted by the clobber.
  pub removed_entries: usize,
}

impl ClobberDecision {
  pub fn clobbered(&self) -> bool {
    self.outcome == Outcome::Clobbered
  }

  fn skipped(build_tool: BuildTool) -> Self {
    Self {
      build_tool,
      outcome: Outcome::Skipped,
      output_dir: None,
      marker_path: None,
      diff: None,
      removed_entries: 0,
    }
  }
}

/// Read-only view of what the next evaluation would do.
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
  pub build_tool: BuildTool,
  pub output_dir: Option<PathBuf>,
  pub marker_path: Option<PathBuf>,
  pub has_marker: bool,
  pub output_dir_exists: bool,
  pub would_clobber: bool,
  pub diff: Option<String>,
}

pub struct Guard<C = RemoveDirAll> {
  config: GuardConfig,
  clobber: C,
}

impl Guard<RemoveDirAll> {
  pub fn new(config: GuardConfig) -> Self {
    Self::with_clobber(config, RemoveDirAll)
  }
}

impl<C: Clobber> Guard<C> {
  pub fn with_clobber(config: GuardConfig, clobber: C) -> Self {
    Self { config, clobber }
  }

  pub fn config(&self) -> &GuardConfig {
    &self.config
  }

  /// Evaluate `landmines` for the build tool named `build_tool_id`.
  ///
  /// Fails with [`GuardError::UnsupportedBuildTool`] before touching the
  /// filesystem when the identifier is not recognized.
  pub fn evaluate_and_update(&self, build_tool_id: &str, landmines: &LandmineSet) -> Result<ClobberDecision> {
    let build_tool = BuildTool::parse(build_tool_id)?;
    self.evaluate_and_update_tool(build_tool, landmines)
  }

  /// Compare `landmines` with the marker, clobber on difference, and record
  /// `landmines` as the new marker.
  ///
  /// On error the marker is left exactly as it was, so a failed clobber is
  /// retried by the next build.
  pub fn evaluate_and_update_tool(&self, build_tool: BuildTool, landmines: &LandmineSet) -> Result<ClobberDecision> {
    let Some(out_dir) = self.config.output_dir(build_tool) else {
      debug!(build_tool = %build_tool, "build tool does not use landmines, skipping");
      return Ok(ClobberDecision::skipped(build_tool));
    };
    let marker = Marker::for_output_dir(&out_dir);

    debug!(build_tool = %build_tool, landmines = ?landmines.lines(), "evaluating landmines");

    let previous = marker.read()?;
    let new_text = landmines.render();

    let mut decision = ClobberDecision {
      build_tool,
      outcome: Outcome::Unchanged,
      output_dir: Some(out_dir.clone()),
      marker_path: Some(marker.path().to_path_buf()),
      diff: None,
      removed_entries: 0,
    };

    if landmines.is_empty() && previous.as_ref().is_none_or(MarkerContents::is_empty) {
      debug!(marker = %marker.path().display(), "no landmines recorded or produced");
      decision.outcome = Outcome::NoLandmines;
      return Ok(decision);
    }

    ensure_dir(&out_dir)?;

    match previous {
      None => {
        debug!(marker = %marker.path().display(), "first run, planting landmines");
        decision.outcome = Outcome::FirstRun;
      }
      Some(old) if old.text == new_text => {
        debug!(marker = %marker.path().display(), "landmines unchanged");
      }
      Some(old) => {
        let diff = landmine_diff(&old.text, &new_text, old.modified, SystemTime::now());
        info!(output_dir = %out_dir.display(), "landmines changed, clobbering");
        debug!("landmine diff:\n{}", diff);

        let removed = self
          .clobber
          .clobber(&out_dir)
          .map_err(|source| GuardError::DirectoryDeleteFailed {
            path: out_dir.clone(),
            source,
          })?;
        debug!(removed, "output directory removed");
        ensure_dir(&out_dir)?;

        decision.outcome = Outcome::Clobbered;
        decision.diff = Some(diff);
        decision.removed_entries = removed;
      }
    }

    marker.write(landmines)?;
    Ok(decision)
  }

  /// Report what [`Guard::evaluate_and_update_tool`] would do, without
  /// creating, deleting, or writing anything.
  pub fn inspect(&self, build_tool: BuildTool, landmines: &LandmineSet) -> Result<Inspection> {
    let Some(out_dir) = self.config.output_dir(build_tool) else {
      return Ok(Inspection {
        build_tool,
        output_dir: None,
        marker_path: None,
        has_marker: false,
        output_dir_exists: false,
        would_clobber: false,
        diff: None,
      });
    };
    let marker = Marker::for_output_dir(&out_dir);
    let previous = marker.read()?;
    let new_text = landmines.render();

    let diff = previous
      .as_ref()
      .filter(|old| old.text != new_text)
      .map(|old| landmine_diff(&old.text, &new_text, old.modified, SystemTime::now()));

    Ok(Inspection {
      build_tool,
      output_dir_exists: out_dir.is_dir(),
      output_dir: Some(out_dir),
      marker_path: Some(marker.path().to_path_buf()),
      has_marker: previous.is_some(),
      would_clobber: diff.is_some(),
      diff,
    })
  }
}

fn ensure_dir(path: &Path) -> Result<()> {
  match fs::create_dir_all(path) {
    Ok(()) => Ok(()),
    Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
    Err(source) => Err(GuardError::DirectoryCreateFailed {
      path: path.to_path_buf(),
      source,
    }),
  }
}
