//! Live observation loop.
//!
//! A forced first pass applies the current theme, then every subscription
//! notification runs gate, resolve and propagate to completion before the
//! next notification is awaited. Any error ends the loop.

use std::future::Future;
use std::sync::Arc;

use super::SyncReport;
use crate::appearance::Appearance;
use crate::error::ShadeError;
use crate::gate::ChangeGate;
use crate::presets::PresetTable;
use crate::sinks::{apply_color_presets, ShellSinks};
use crate::source::{detect_appearance, ThemeInput};
use crate::terminal::TerminalApp;
use crate::ui::RenderSink;

/// Everything the live flow writes to.
#[derive(Debug, Clone)]
pub struct WatchTargets {
    pub presets: PresetTable,
    pub shell: Option<ShellSinks>,
}

/// Apply `appearance` to the application's profiles and the shell sinks.
pub async fn propagate(
    app: &Arc<dyn TerminalApp>,
    targets: &WatchTargets,
    appearance: Appearance,
) -> Result<SyncReport, ShadeError> {
    let mut report = SyncReport::new(appearance);
    let outcome = apply_color_presets(app, &targets.presets, appearance).await?;
    report.presets_fetched = outcome.presets_fetched;
    report.profiles_updated = outcome.profiles_updated;
    if let Some(shell) = &targets.shell {
        report.written = shell.apply(appearance)?;
    }
    Ok(report)
}

/// Run until `shutdown` resolves or an error occurs.
pub async fn watch<F>(
    app: Arc<dyn TerminalApp>,
    targets: &WatchTargets,
    render: &dyn RenderSink,
    shutdown: F,
) -> Result<(), ShadeError>
where
    F: Future<Output = ()>,
{
    let mut gate = ChangeGate::new();

    let initial = detect_appearance(Some(ThemeInput::DirectQuery(app.as_ref()))).await?;
    gate.observe(initial);
    render.activity(&format!("Applying {initial} presets"));
    propagate(&app, targets, initial).await?.render(render);

    let mut subscription = app.subscribe_effective_theme().await?;
    tokio::pin!(shutdown);
    loop {
        let appearance = tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("watch loop stopped");
                return Ok(());
            }
            detected = detect_appearance(Some(ThemeInput::Subscription(&mut subscription))) => detected?,
        };
        if !gate.observe(appearance) {
            continue;
        }
        render.activity(&format!("Theme changed to {appearance}"));
        propagate(&app, targets, appearance).await?.render(render);
    }
}
