//! Static lookup from logical targets to concrete preset names.
//!
//! The live-application flow maps each profile name to a light/dark preset
//! pair. The settings-file flow uses a single fixed [`SchemePair`].

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::appearance::Appearance;

/// Light and dark preset names for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PresetPair {
    pub light: String,
    pub dark: String,
}

impl PresetPair {
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    pub fn pick(&self, appearance: Appearance) -> &str {
        match appearance {
            Appearance::Dark => &self.dark,
            Appearance::Light => &self.light,
        }
    }
}

/// Immutable profile-name -> preset-pair table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresetTable {
    entries: BTreeMap<String, PresetPair>,
}

impl PresetTable {
    pub fn new(entries: BTreeMap<String, PresetPair>) -> Self {
        Self { entries }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Preset name for `profile`, or `None` when the profile is not managed
    /// and must be left untouched.
    pub fn resolve(&self, profile: &str, appearance: Appearance) -> Option<&str> {
        self.entries.get(profile).map(|pair| pair.pick(appearance))
    }

    /// Distinct preset names needed for `profiles`, unmanaged ones dropped.
    ///
    /// Lets callers fetch each preset object once no matter how many
    /// profiles share it.
    pub fn distinct_presets<'a, I>(&self, profiles: I, appearance: Appearance) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        profiles
            .into_iter()
            .filter_map(|name| self.resolve(name, appearance))
            .filter(|preset| !preset.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Fixed color-scheme pair written into the terminal settings document.
pub type SchemePair = PresetPair;
