//! Windows Terminal `settings.json` sink.
//!
//! The document is read whole, one nested field is patched in memory, and the
//! whole document is written back (2-space indent) to the primary path and to
//! every mirror path. Key order is preserved.

use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ShadeError;

/// Parsed terminal settings document.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDocument {
    value: Value,
}

impl SettingsDocument {
    pub fn parse(path: &Path, text: &str) -> Result<Self, ShadeError> {
        let value = serde_json::from_str(text).map_err(|e| ShadeError::json(path, e))?;
        Ok(Self { value })
    }

    /// Current `profiles.defaults.colorScheme`, if set.
    pub fn color_scheme(&self) -> Result<Option<&str>, ShadeError> {
        let defaults = self
            .value
            .get("profiles")
            .and_then(|profiles| profiles.get("defaults"))
            .ok_or_else(|| ShadeError::Malformed("settings have no `profiles.defaults`".into()))?;
        Ok(defaults.get("colorScheme").and_then(Value::as_str))
    }

    pub fn set_color_scheme(&mut self, scheme: &str) -> Result<(), ShadeError> {
        defaults_mut(&mut self.value)?.insert("colorScheme".into(), Value::from(scheme));
        Ok(())
    }

    pub fn to_pretty_string(&self) -> Result<String, ShadeError> {
        serde_json::to_string_pretty(&self.value)
            .map_err(|e| ShadeError::Malformed(format!("failed to serialize settings: {e}")))
    }
}

fn defaults_mut(value: &mut Value) -> Result<&mut Map<String, Value>, ShadeError> {
    value
        .get_mut("profiles")
        .and_then(|profiles| profiles.get_mut("defaults"))
        .and_then(Value::as_object_mut)
        .ok_or_else(|| ShadeError::Malformed("settings have no `profiles.defaults` object".into()))
}

/// Primary settings file plus the mirrors kept in sync with it.
#[derive(Debug, Clone)]
pub struct TerminalSettings {
    primary: PathBuf,
    mirrors: Vec<PathBuf>,
}

impl TerminalSettings {
    pub fn new(primary: impl Into<PathBuf>, mirrors: Vec<PathBuf>) -> Self {
        Self {
            primary: primary.into(),
            mirrors,
        }
    }

    pub fn primary(&self) -> &Path {
        &self.primary
    }

    pub fn load(&self) -> Result<SettingsDocument, ShadeError> {
        let text =
            fs::read_to_string(&self.primary).map_err(|e| ShadeError::io(&self.primary, e))?;
        SettingsDocument::parse(&self.primary, &text)
    }

    /// Write `doc` to the primary path and every mirror; returns written paths.
    pub fn save(&self, doc: &SettingsDocument) -> Result<Vec<PathBuf>, ShadeError> {
        let text = doc.to_pretty_string()?;
        let mut written = Vec::with_capacity(1 + self.mirrors.len());
        for path in std::iter::once(&self.primary).chain(&self.mirrors) {
            fs::write(path, &text).map_err(|e| ShadeError::io(path, e))?;
            tracing::info!(path = %path.display(), "updated terminal settings");
            written.push(path.clone());
        }
        Ok(written)
    }

    /// Set the default color scheme to `scheme` unless it already is.
    ///
    /// Returns the written paths; empty when nothing changed.
    pub fn apply(&self, scheme: &str) -> Result<Vec<PathBuf>, ShadeError> {
        let mut doc = self.load()?;
        if doc.color_scheme()? == Some(scheme) {
            tracing::debug!(scheme, "terminal color scheme already current");
            return Ok(Vec::new());
        }
        doc.set_color_scheme(scheme)?;
        self.save(&doc)
    }
}
