//! Compile-time build metadata exposed on the CLI surface.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("SHADE_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("SHADE_BUILD_TIMESTAMP");

/// Version block printed by `shade --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("SHADE_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("SHADE_BUILD_TIMESTAMP")
);

/// Help trailer block that surfaces build metadata in `shade --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("SHADE_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("SHADE_BUILD_TIMESTAMP")
);
