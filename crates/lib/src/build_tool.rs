//! Build-tool identifiers and where each one puts its output.
//!
//! | identifier                        | output directory                 |
//! |-----------------------------------|----------------------------------|
//! | `xcode`                           | `<root>/xcodebuild`              |
//! | `make`, `ninja`, `ninja-ios`      | `<root>/<CHROMIUM_OUT_DIR\|out>` |
//! | `msvs`, `vs`, `ib`                | `<root>/build`                   |
//! | `dump_dependency_json`, `eclipse` | none, the guard does nothing     |

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::GuardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildTool {
  Xcode,
  Make,
  Ninja,
  NinjaIos,
  Msvs,
  Vs,
  Ib,
  DumpDependencyJson,
  Eclipse,
}

impl BuildTool {
  pub const ALL: [BuildTool; 9] = [
    BuildTool::Xcode,
    BuildTool::Make,
    BuildTool::Ninja,
    BuildTool::NinjaIos,
    BuildTool::Msvs,
    BuildTool::Vs,
    BuildTool::Ib,
    BuildTool::DumpDependencyJson,
    BuildTool::Eclipse,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Xcode => "xcode",
      Self::Make => "make",
      Self::Ninja => "ninja",
      Self::NinjaIos => "ninja-ios",
      Self::Msvs => "msvs",
      Self::Vs => "vs",
      Self::Ib => "ib",
      Self::DumpDependencyJson => "dump_dependency_json",
      Self::Eclipse => "eclipse",
    }
  }

  /// Parse an identifier. Matching is case-sensitive.
  pub fn parse(id: &str) -> Result<Self, GuardError> {
    Self::ALL
      .into_iter()
      .find(|tool| tool.as_str() == id)
      .ok_or_else(|| GuardError::UnsupportedBuildTool(id.to_string()))
  }

  /// Pick the build tool from a `GYP_GENERATORS` value.
  ///
  /// Only the first comma-separated generator counts. `<tool>-ninja` builds
  /// with ninja and `<tool>-android` with `<tool>`. Unset or empty means ninja.
  pub fn from_generators(generators: Option<&str>) -> Result<Self, GuardError> {
    let first = generators
      .and_then(|value| value.split(',').next())
      .map(str::trim)
      .unwrap_or_default();

    if first.is_empty() {
      return Ok(Self::Ninja);
    }
    if first.ends_with("-ninja") {
      return Ok(Self::Ninja);
    }
    if let Some(base) = first.strip_suffix("-android") {
      let base = base.split('-').next().unwrap_or(base);
      return Self::parse(base);
    }
    Self::parse(first)
  }

  /// Invocations that only dump metadata or generate IDE projects; the guard
  /// must leave the filesystem alone for these.
  pub fn is_skip(&self) -> bool {
    matches!(self, Self::DumpDependencyJson | Self::Eclipse)
  }

  /// Resolve the build output directory under `root`.
  ///
  /// `out_dir_name` is only consulted for the `make`/`ninja` family. Returns
  /// `None` for skip categories.
  pub fn output_dir(&self, root: &Path, out_dir_name: &str) -> Option<PathBuf> {
    match self {
      Self::Xcode => Some(root.join("xcodebuild")),
      Self::Make | Self::Ninja | Self::NinjaIos => Some(root.join(out_dir_name)),
      Self::Msvs | Self::Vs | Self::Ib => Some(root.join("build")),
      Self::DumpDependencyJson | Self::Eclipse => None,
    }
  }
}

impl FromStr for BuildTool {
  type Err = GuardError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl fmt::Display for BuildTool {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl Serialize for BuildTool {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

/// Comma-separated list of every recognized identifier, for error messages.
pub fn supported_ids() -> String {
  BuildTool::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
}
