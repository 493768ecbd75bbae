//! Default configuration constants and the bundled profile table.

use std::collections::BTreeMap;

use crate::presets::PresetPair;

/// Embedded default `shade.toml` template written by `shade init`.
pub(super) const DEFAULT_SHADE_CONFIG_TEMPLATE: &str = include_str!("../templates/shade.toml");
/// Config file name used for local and global lookups.
pub(super) const CONFIG_FILE_NAME: &str = "shade.toml";
/// Directory under the config root holding `shade.toml`.
pub(super) const CONFIG_DIR_NAME: &str = "shade";

/// Downtown Los Angeles.
pub(super) const DEFAULT_LATITUDE: f64 = 34.0536909;
pub(super) const DEFAULT_LONGITUDE: f64 = -118.242766;
pub(super) const DEFAULT_SUN_API_URL: &str = "https://api.sunrise-sunset.org/json";
pub(super) const DEFAULT_SUN_TIMEOUT_SECS: u64 = 20;

pub(super) const DEFAULT_SHELL_INIT_FILE: &str = "~/.zshrc";
pub(super) const DEFAULT_PAGER_CONFIG: &str = "~/.config/bat/config";
pub(super) const DEFAULT_PAGER_LIGHT_THEME: &str = "gruvbox-light";
pub(super) const DEFAULT_PAGER_DARK_THEME: &str = "gruvbox";

pub(super) const DEFAULT_SETTINGS_MIRROR: &str = "~/.config/wsl/settings.json";
pub(super) const DEFAULT_LIGHT_SCHEME: &str = "Gruvbox Light";
pub(super) const DEFAULT_DARK_SCHEME: &str = "Gruvbox Dark";

pub(super) const DEFAULT_IT2API_PROGRAM: &str = "it2api";
pub(super) const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Profiles managed out of the box.
pub(super) fn default_profile_presets() -> BTreeMap<String, PresetPair> {
    let mut profiles = BTreeMap::new();
    // Built-in iTerm2 presets.
    profiles.insert(
        "Solarized (Auto)".to_string(),
        PresetPair::new("Solarized Light", "Solarized Dark"),
    );
    profiles.insert(
        "Tango (Auto)".to_string(),
        PresetPair::new("Tango Light", "Tango Dark"),
    );
    profiles.insert(
        "Default (Auto)".to_string(),
        PresetPair::new("Light Background", "Dark Background"),
    );
    // Custom.
    profiles.insert(
        "Gruvbox (Auto)".to_string(),
        PresetPair::new("Gruvbox Light", "Gruvbox Dark"),
    );
    profiles
}
