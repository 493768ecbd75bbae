//! Configuration data model.
//!
//! Struct/enum definitions plus default values. Loading and precedence live
//! in `config::mod`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::defaults::*;
use crate::presets::PresetPair;

/// Top-level runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub sun: SunConfig,
    pub shell: ShellConfig,
    pub windows_terminal: WindowsTerminalConfig,
    pub iterm: ItermConfig,
    /// Profile name -> light/dark preset names for the live flow.
    pub profiles: BTreeMap<String, PresetPair>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sun: SunConfig::default(),
            shell: ShellConfig::default(),
            windows_terminal: WindowsTerminalConfig::default(),
            iterm: ItermConfig::default(),
            profiles: default_profile_presets(),
        }
    }
}

/// `[sun]`: observer location and time service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub api_url: String,
    pub timeout_secs: u64,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            api_url: DEFAULT_SUN_API_URL.to_string(),
            timeout_secs: DEFAULT_SUN_TIMEOUT_SECS,
        }
    }
}

/// `[shell]`: editor background variable and pager theme.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub enabled: bool,
    pub init_file: String,
    /// Empty disables the pager sink.
    pub pager_config: String,
    pub pager_light_theme: String,
    pub pager_dark_theme: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            init_file: DEFAULT_SHELL_INIT_FILE.to_string(),
            pager_config: DEFAULT_PAGER_CONFIG.to_string(),
            pager_light_theme: DEFAULT_PAGER_LIGHT_THEME.to_string(),
            pager_dark_theme: DEFAULT_PAGER_DARK_THEME.to_string(),
        }
    }
}

/// `[windows_terminal]`: settings document and its mirrors.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowsTerminalConfig {
    /// Unset disables the settings sink.
    pub settings_path: Option<String>,
    pub mirror_paths: Vec<String>,
    pub light_scheme: String,
    pub dark_scheme: String,
}

impl Default for WindowsTerminalConfig {
    fn default() -> Self {
        Self {
            settings_path: None,
            mirror_paths: vec![DEFAULT_SETTINGS_MIRROR.to_string()],
            light_scheme: DEFAULT_LIGHT_SCHEME.to_string(),
            dark_scheme: DEFAULT_DARK_SCHEME.to_string(),
        }
    }
}

/// `[iterm]`: live application bridge.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItermConfig {
    pub program: String,
    pub poll_interval_ms: u64,
}

impl Default for ItermConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_IT2API_PROGRAM.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

/// On-disk shape. An empty `[profiles]` table keeps the bundled profiles.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub sun: SunConfig,
    pub shell: ShellConfig,
    pub windows_terminal: WindowsTerminalConfig,
    pub iterm: ItermConfig,
    pub profiles: BTreeMap<String, PresetPair>,
}

impl FileConfig {
    pub(super) fn into_config(self) -> Config {
        let profiles = if self.profiles.is_empty() {
            default_profile_presets()
        } else {
            self.profiles
        };
        Config {
            sun: self.sun,
            shell: self.shell,
            windows_terminal: self.windows_terminal,
            iterm: self.iterm,
            profiles,
        }
    }
}

/// Loaded config plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File the config was read from; `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

/// Outcome of `shade init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalConfigInitResult {
    Created { path: PathBuf },
    AlreadyInitialized { path: PathBuf },
    Overwritten { path: PathBuf, backup_path: PathBuf },
}
