//! Shell init file and pager config sinks.
//!
//! The last line of the shell init file is `export NVIM_BACKGROUND=<color>`
//! and doubles as the only durable record of the previously applied color.

use std::fs;
use std::path::{Path, PathBuf};

use crate::appearance::Appearance;
use crate::error::ShadeError;
use crate::presets::PresetPair;

/// Variable exported on the last line of the shell init file.
pub const BACKGROUND_VARIABLE: &str = "NVIM_BACKGROUND";

/// Shell init file whose trailing line records the editor background.
#[derive(Debug, Clone)]
pub struct ShellInitFile {
    path: PathBuf,
}

impl ShellInitFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the last line when its color differs from `appearance`.
    ///
    /// Returns `true` when the file was written. All other lines are kept
    /// byte for byte.
    pub fn apply(&self, appearance: Appearance) -> Result<bool, ShadeError> {
        let text = self.read()?;
        let lines: Vec<&str> = text.split_inclusive('\n').collect();
        let old_color = self.color_of(&lines)?;
        let new_color = appearance.color_word();
        if old_color == new_color {
            tracing::debug!(path = %self.path.display(), color = new_color, "shell init already current");
            return Ok(false);
        }

        let mut updated = lines[..lines.len() - 1].concat();
        updated.push_str(&export_line(appearance));
        fs::write(&self.path, updated).map_err(|e| ShadeError::io(&self.path, e))?;
        tracing::info!(
            path = %self.path.display(),
            from = old_color,
            to = new_color,
            "updated editor background"
        );
        Ok(true)
    }

    fn read(&self) -> Result<String, ShadeError> {
        fs::read_to_string(&self.path).map_err(|e| ShadeError::io(&self.path, e))
    }

    fn color_of<'a>(&self, lines: &[&'a str]) -> Result<&'a str, ShadeError> {
        let last = lines.last().ok_or_else(|| {
            ShadeError::Malformed(format!("{} is empty", self.path.display()))
        })?;
        stored_color_in(last).ok_or_else(|| {
            ShadeError::Malformed(format!(
                "last line of {} is not a `{BACKGROUND_VARIABLE}=` assignment: {:?}",
                self.path.display(),
                last.trim_end()
            ))
        })
    }
}

/// Value of a `[export ]NVIM_BACKGROUND=<value>` line, trimmed. Any other
/// line yields `None`.
fn stored_color_in(line: &str) -> Option<&str> {
    let (key, value) = line.rsplit_once('=')?;
    let key = key.trim();
    let name = key
        .strip_prefix("export")
        .filter(|rest| rest.starts_with(char::is_whitespace))
        .map(str::trim_start)
        .unwrap_or(key);
    (name == BACKGROUND_VARIABLE).then(|| value.trim())
}

fn export_line(appearance: Appearance) -> String {
    format!("export {BACKGROUND_VARIABLE}={}\n", appearance.color_word())
}

/// Single-line pager config selecting a syntax theme.
#[derive(Debug, Clone)]
pub struct PagerConfig {
    path: PathBuf,
    themes: PresetPair,
}

impl PagerConfig {
    pub fn new(path: impl Into<PathBuf>, themes: PresetPair) -> Self {
        Self {
            path: path.into(),
            themes,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrite the config with the theme flag for `appearance`.
    pub fn write(&self, appearance: Appearance) -> Result<(), ShadeError> {
        let contents = format!("--theme=\"{}\"", self.themes.pick(appearance));
        fs::write(&self.path, contents).map_err(|e| ShadeError::io(&self.path, e))?;
        tracing::info!(path = %self.path.display(), "updated pager theme");
        Ok(())
    }
}

/// Shell init file plus the pager config that follows it.
#[derive(Debug, Clone)]
pub struct ShellSinks {
    pub init_file: ShellInitFile,
    pub pager: Option<PagerConfig>,
}

impl ShellSinks {
    /// Apply `appearance`; the pager is only rewritten when the init file was.
    ///
    /// Returns the paths that were written.
    pub fn apply(&self, appearance: Appearance) -> Result<Vec<PathBuf>, ShadeError> {
        let mut written = Vec::new();
        if !self.init_file.apply(appearance)? {
            return Ok(written);
        }
        written.push(self.init_file.path().to_path_buf());
        if let Some(pager) = &self.pager {
            pager.write(appearance)?;
            written.push(pager.path().to_path_buf());
        }
        Ok(written)
    }
}
