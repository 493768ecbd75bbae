//! Config-path helpers and default config initialization.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_SHADE_CONFIG_TEMPLATE};
use super::GlobalConfigInitResult;

/// Return the default per-user config path (`~/.config/shade/shade.toml`).
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// `shade init`: [`initialize_config_at_path`] on the per-user config path.
pub fn initialize_default_global_config(
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid(
            "unable to resolve default config path for ~/.config/shade/shade.toml".to_string(),
        )
    })?;
    initialize_config_at_path(&path, force)
}

/// Write the bundled template to `path`.
///
/// An existing file is left alone unless `force` is set, in which case it is
/// first copied to a sibling `<name>.<unix-secs>[.<n>].bak`.
pub fn initialize_config_at_path(
    path: &Path,
    force: bool,
) -> Result<GlobalConfigInitResult, ConfigError> {
    let path_buf = path.to_path_buf();
    let backup_path = if path.exists() {
        if !force {
            return Ok(GlobalConfigInitResult::AlreadyInitialized { path: path_buf });
        }
        let backup = backup_path_for(path);
        fs::copy(path, &backup)?;
        Some(backup)
    } else {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        None
    };

    fs::write(path, DEFAULT_SHADE_CONFIG_TEMPLATE)?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(match backup_path {
        Some(backup_path) => GlobalConfigInitResult::Overwritten {
            path: path_buf,
            backup_path,
        },
        None => GlobalConfigInitResult::Created { path: path_buf },
    })
}

fn backup_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map_or_else(|| CONFIG_FILE_NAME.into(), |n| n.to_string_lossy());
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut candidate = path.with_file_name(format!("{name}.{stamp}.bak"));
    let mut n = 1;
    while candidate.exists() {
        candidate = path.with_file_name(format!("{name}.{stamp}.{n}.bak"));
        n += 1;
    }
    candidate
}

/// `$XDG_CONFIG_HOME` when set to an absolute path, else `~/.config`.
pub fn config_root_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .filter(|dir| dir.is_absolute())
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
}
