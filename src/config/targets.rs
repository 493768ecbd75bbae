//! Builds sync targets from a resolved [`Config`].

use std::path::PathBuf;
use std::time::Duration;

use super::Config;
use crate::presets::{PresetPair, PresetTable, SchemePair};
use crate::sinks::{PagerConfig, ShellInitFile, ShellSinks, TerminalSettings};
use crate::source::sun::{Location, SunClient};
use crate::sync::sun::SunTargets;
use crate::sync::watch::WatchTargets;
use crate::terminal::it2api::It2ApiBridge;

/// Expand a leading `~` and environment variables in a configured path.
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(raw).as_ref()),
    }
}

impl Config {
    pub fn preset_table(&self) -> PresetTable {
        PresetTable::new(self.profiles.clone())
    }

    pub fn scheme_pair(&self) -> SchemePair {
        SchemePair::new(
            self.windows_terminal.light_scheme.clone(),
            self.windows_terminal.dark_scheme.clone(),
        )
    }

    pub fn location(&self) -> Location {
        Location {
            latitude: self.sun.latitude,
            longitude: self.sun.longitude,
        }
    }

    /// Per-request timeout for the sun service; `timeout_secs = 0` disables it.
    pub fn sun_timeout(&self) -> Option<Duration> {
        (self.sun.timeout_secs > 0).then(|| Duration::from_secs(self.sun.timeout_secs))
    }

    pub fn sun_client(&self) -> SunClient {
        SunClient::new(self.sun.api_url.clone(), self.sun_timeout())
    }

    pub fn it2api_bridge(&self) -> It2ApiBridge {
        It2ApiBridge::new(
            self.iterm.program.clone(),
            Duration::from_millis(self.iterm.poll_interval_ms),
        )
    }

    /// Shell init + pager sinks, or `None` when `[shell].enabled = false`.
    pub fn shell_sinks(&self) -> Option<ShellSinks> {
        if !self.shell.enabled {
            return None;
        }
        let pager_path = self.shell.pager_config.trim();
        let pager = (!pager_path.is_empty()).then(|| {
            PagerConfig::new(
                expand_path(pager_path),
                PresetPair::new(
                    self.shell.pager_light_theme.clone(),
                    self.shell.pager_dark_theme.clone(),
                ),
            )
        });
        Some(ShellSinks {
            init_file: ShellInitFile::new(expand_path(&self.shell.init_file)),
            pager,
        })
    }

    /// Settings sink, or `None` when no settings path is configured.
    pub fn terminal_settings(&self) -> Option<TerminalSettings> {
        let primary = self.windows_terminal.settings_path.as_deref()?.trim();
        if primary.is_empty() {
            return None;
        }
        let mirrors = self
            .windows_terminal
            .mirror_paths
            .iter()
            .map(|path| expand_path(path))
            .collect();
        Some(TerminalSettings::new(expand_path(primary), mirrors))
    }

    pub fn watch_targets(&self) -> WatchTargets {
        WatchTargets {
            presets: self.preset_table(),
            shell: self.shell_sinks(),
        }
    }

    pub fn sun_targets(&self) -> SunTargets {
        SunTargets {
            location: self.location(),
            settings: self.terminal_settings(),
            schemes: self.scheme_pair(),
            shell: self.shell_sinks(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_path_resolves_home() {
        let home = dirs::home_dir().expect("home dir");
        assert_eq!(expand_path("~/.zshrc"), home.join(".zshrc"));
        assert_eq!(expand_path("/etc/zshrc"), PathBuf::from("/etc/zshrc"));
    }

    #[test]
    fn empty_pager_path_disables_pager() {
        let mut config = Config::default();
        config.shell.pager_config = String::new();
        let sinks = config.shell_sinks().unwrap();
        assert!(sinks.pager.is_none());
    }

    #[test]
    fn disabled_shell_yields_no_sinks() {
        let mut config = Config::default();
        config.shell.enabled = false;
        assert!(config.shell_sinks().is_none());
        assert!(config.watch_targets().shell.is_none());
    }

    #[test]
    fn settings_sink_requires_a_path() {
        let mut config = Config::default();
        assert!(config.terminal_settings().is_none());
        config.windows_terminal.settings_path = Some("/mnt/c/settings.json".into());
        let settings = config.terminal_settings().unwrap();
        assert_eq!(settings.primary(), PathBuf::from("/mnt/c/settings.json"));
    }

    #[test]
    fn default_targets_use_gruvbox_schemes() {
        let targets = Config::default().sun_targets();
        assert_eq!(targets.schemes, SchemePair::new("Gruvbox Light", "Gruvbox Dark"));
        assert_eq!(targets.location.latitude, 34.0536909);
    }

    #[test]
    fn zero_timeout_disables_the_request_timeout() {
        let mut config = Config::default();
        assert_eq!(config.sun_timeout(), Some(Duration::from_secs(20)));
        config.sun.timeout_secs = 0;
        assert_eq!(config.sun_timeout(), None);
    }
}
