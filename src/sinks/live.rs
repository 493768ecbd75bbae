//! Live terminal application sink: assigns color presets to profiles.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::appearance::Appearance;
use crate::error::{AppError, ShadeError};
use crate::presets::PresetTable;
use crate::terminal::{ColorPreset, TerminalApp};

/// What a live preset pass touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveOutcome {
    /// Preset names fetched from the application, sorted.
    pub presets_fetched: Vec<String>,
    /// Profiles that had a preset applied, in application order.
    pub profiles_updated: Vec<String>,
}

/// Apply the resolved preset to every managed profile.
///
/// Each distinct preset is fetched once, concurrently, before any profile is
/// touched. Profiles missing from `table` are skipped.
pub async fn apply_color_presets(
    app: &Arc<dyn TerminalApp>,
    table: &PresetTable,
    appearance: Appearance,
) -> Result<LiveOutcome, ShadeError> {
    tracing::info!(dark = appearance.is_dark(), "setting color presets");
    let profiles = app.profiles().await?;
    let names = table.distinct_presets(profiles.iter().map(|p| p.name.as_str()), appearance);
    let lookup = fetch_presets(app, names).await?;

    let mut outcome = LiveOutcome {
        presets_fetched: {
            let mut fetched: Vec<String> = lookup.keys().cloned().collect();
            fetched.sort();
            fetched
        },
        profiles_updated: Vec::new(),
    };
    for profile in &profiles {
        let Some(name) = table.resolve(&profile.name, appearance) else {
            continue;
        };
        let Some(preset) = lookup.get(name) else {
            continue;
        };
        app.set_color_preset(profile, preset).await?;
        tracing::debug!(profile = %profile.name, preset = %preset.name, "applied color preset");
        outcome.profiles_updated.push(profile.name.clone());
    }
    Ok(outcome)
}

async fn fetch_presets(
    app: &Arc<dyn TerminalApp>,
    names: BTreeSet<String>,
) -> Result<HashMap<String, ColorPreset>, ShadeError> {
    let mut tasks = JoinSet::new();
    for name in names {
        let app = Arc::clone(app);
        tasks.spawn(async move {
            let preset = app.color_preset(&name).await;
            (name, preset)
        });
    }

    let mut lookup = HashMap::new();
    while let Some(joined) = tasks.join_next().await {
        let (name, preset) = joined.map_err(|e| AppError::Task(e.to_string()))?;
        let preset = preset?;
        tracing::info!(name = %name, "fetched color preset");
        lookup.insert(name, preset);
    }
    Ok(lookup)
}
