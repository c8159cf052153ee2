//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use landmines_lib::provider::HostProvider;
use landmines_lib::{BuildTool, LandmineProvider, LandmineSet};
use tempfile::TempDir;

/// Variables the binary reads; cleared so the host environment cannot leak in.
const GUARD_ENV_VARS: &[&str] = &[
  "CHROMIUM_OUT_DIR",
  "EXTRA_LANDMINES_SCRIPT",
  "LANDMINES_VERBOSE",
  "GYP_GENERATORS",
  "RUST_LOG",
];

/// Marker text the built-in host provider contributes ahead of any script.
pub fn host_landmines(tool: BuildTool) -> String {
  LandmineSet::from_lines(HostProvider::new(tool).produce_lines().unwrap()).render()
}

/// Isolated project root.
///
/// Each test gets its own temporary directory acting as the source root, with
/// build output under `out/` and the marker at `.landmines`.
pub struct TestEnv {
  pub temp: TempDir,
}

impl TestEnv {
  pub fn new() -> Self {
    Self {
      temp: TempDir::new().unwrap(),
    }
  }

  pub fn root(&self) -> &Path {
    self.temp.path()
  }

  pub fn out_dir(&self) -> PathBuf {
    self.root().join("out")
  }

  pub fn marker_path(&self) -> PathBuf {
    self.root().join(".landmines")
  }

  pub fn marker(&self) -> String {
    std::fs::read_to_string(self.marker_path()).unwrap()
  }

  pub fn plant_marker(&self, content: &str) {
    std::fs::write(self.marker_path(), content).unwrap();
  }

  /// Create a file inside the output directory, as a previous build would.
  pub fn build_artifact(&self, relative_path: &str) -> PathBuf {
    let path = self.out_dir().join(relative_path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "artifact").unwrap();
    path
  }

  /// Write an executable script that prints `lines`, one per line.
  #[cfg(unix)]
  pub fn landmine_script(&self, name: &str, lines: &[&str]) -> PathBuf {
    let body: String = lines.iter().map(|l| format!("echo '{}'\n", l)).collect();
    self.raw_script(name, &body)
  }

  #[cfg(unix)]
  pub fn raw_script(&self, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = self.root().join("scripts").join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
  }

  /// Get a pre-configured Command for the landmines binary rooted at this env.
  pub fn landmines_cmd(&self) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("landmines");
    for var in GUARD_ENV_VARS {
      cmd.env_remove(var);
    }
    cmd.arg("--root").arg(self.root());
    cmd
  }
}
