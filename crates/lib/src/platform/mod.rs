//! Host platform detection for the built-in landmine provider.

pub mod arch;
pub mod os;

use arch::Arch;
use os::Os;

/// The OS and architecture of the machine running the build, each optional
/// because unknown hosts are still allowed to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostPlatform {
  pub os: Option<Os>,
  pub arch: Option<Arch>,
}

impl HostPlatform {
  pub fn new(os: Option<Os>, arch: Option<Arch>) -> Self {
    Self { os, arch }
  }

  /// Detect the current platform at runtime
  pub fn current() -> Self {
    Self {
      os: Os::current(),
      arch: Arch::current(),
    }
  }

  /// Landmine lines describing this host, skipping anything unrecognized.
  pub fn landmine_lines(&self) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    if let Some(os) = self.os {
      lines.push(format!("host_os:{}", os));
    }
    if let Some(arch) = self.arch {
      lines.push(format!("host_arch:{}", arch));
    }
    lines
  }
}
