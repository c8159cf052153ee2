//! landmines-lib: forced clean rebuilds for changed build semantics
//!
//! A landmine is a line of text describing something that, when it changes
//! between builds, makes the existing build output unusable: a toolchain
//! revision, a generator choice, a target OS. This crate provides:
//! - `BuildTool`: which output directory a build uses
//! - `LandmineProvider`: sources of landmine lines, run in order
//! - `Marker`: the landmines recorded by the previous build
//! - `Guard`: compares, clobbers the output directory on change, and records

pub mod build_tool;
pub mod config;
pub mod consts;
pub mod diff;
pub mod error;
pub mod guard;
pub mod landmine;
pub mod marker;
pub mod platform;
pub mod provider;
pub mod util;

pub use build_tool::BuildTool;
pub use config::{GuardConfig, Verbosity};
pub use error::GuardError;
pub use guard::{Clobber, ClobberDecision, Guard, Inspection, Outcome, RemoveDirAll};
pub use landmine::LandmineSet;
pub use marker::Marker;
pub use provider::{LandmineProvider, ProviderError, collect_landmines};
