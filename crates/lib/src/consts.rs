//! Fixed names shared between the library and the CLI.

/// File name of the marker, placed next to the build output directory.
pub const MARKER_FILENAME: &str = ".landmines";

/// Output directory name used by `make`/`ninja` when no override is set.
pub const DEFAULT_OUT_DIR_NAME: &str = "out";

/// Overrides the output directory name for `make`/`ninja`/`ninja-ios`.
pub const OUT_DIR_ENV: &str = "CHROMIUM_OUT_DIR";

/// Path of an extra landmine script appended after the configured ones.
pub const EXTRA_SCRIPT_ENV: &str = "EXTRA_LANDMINES_SCRIPT";

/// Presence of this variable turns on diagnostic logging.
pub const VERBOSE_ENV: &str = "LANDMINES_VERBOSE";

/// Comma-separated generator list; the first entry picks the build tool.
pub const GENERATORS_ENV: &str = "GYP_GENERATORS";
