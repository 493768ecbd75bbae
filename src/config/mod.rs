//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`SHADE_LATITUDE`, `SHADE_LONGITUDE`,
//!    `SHADE_SUN_API_URL`, `SHADE_IT2API`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./shade.toml in the current directory
//! 4. $XDG_CONFIG_HOME/shade/shade.toml (or ~/.config/shade/shade.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

mod defaults;
mod env;
mod init;
mod sources;
mod targets;
mod types;

pub use init::{
    config_root_dir, default_global_config_path, initialize_config_at_path,
    initialize_default_global_config,
};
pub use targets::expand_path;
pub use types::{
    Config, GlobalConfigInitResult, ItermConfig, LoadedConfig, ShellConfig, SunConfig,
    WindowsTerminalConfig,
};

use env::apply_runtime_env_overrides;
use sources::read_config_text_with_sources;
use types::FileConfig;

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config = parse_config(&text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    tracing::debug!(source = ?source, "loaded config");
    Ok(LoadedConfig {
        config,
        source: source.path(),
    })
}

/// Parse and validate TOML text into a [`Config`].
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let parsed: FileConfig = toml::from_str(text)?;
    let config = parsed.into_config();
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    env::check_coordinate("sun.latitude", config.sun.latitude, 90.0)?;
    env::check_coordinate("sun.longitude", config.sun.longitude, 180.0)?;
    if config.shell.enabled && config.shell.init_file.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "shell.init_file must not be empty while the shell sink is enabled".to_string(),
        ));
    }
    for (profile, pair) in &config.profiles {
        if pair.light.trim().is_empty() && pair.dark.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "profiles.\"{profile}\" needs a light or dark preset"
            )));
        }
    }
    Ok(())
}
