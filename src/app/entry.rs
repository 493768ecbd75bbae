//! Subcommand dispatch for the shade CLI.

use std::future::Future;
use std::io::IsTerminal;
use std::sync::Arc;

use crate::cli::{Args, Command};
use shade::config::{
    initialize_default_global_config, load_config, Config, GlobalConfigInitResult,
};
use shade::error::ShadeError;
use shade::sync::{sun::sync_once, watch::watch};
use shade::terminal::TerminalApp;
use shade::ui::{RenderSink, Renderer};

/// Run the parsed command and return the process exit code.
pub(crate) async fn run(args: Args) -> i32 {
    let renderer = Renderer::new(!args.no_color && std::io::stdout().is_terminal());

    let result = match args.command {
        Command::Init { force } => run_init(&renderer, force),
        Command::Watch => match load(&renderer, args.config.as_deref()) {
            Some(config) => run_watch(&config, &renderer, shutdown_signal())
                .await
                .map_err(|e| e.to_string()),
            None => return 1,
        },
        Command::Sun => match load(&renderer, args.config.as_deref()) {
            Some(config) => run_sun(&config, &renderer).await.map_err(|e| e.to_string()),
            None => return 1,
        },
    };

    match result {
        Ok(()) => 0,
        Err(msg) => {
            renderer.error(&msg);
            1
        }
    }
}

fn load(renderer: &dyn RenderSink, path_override: Option<&str>) -> Option<Config> {
    match load_config(path_override) {
        Ok(loaded) => {
            if let Some(source) = &loaded.source {
                tracing::debug!(path = %source.display(), "using config file");
            }
            Some(loaded.config)
        }
        Err(e) => {
            renderer.error(&format!("failed to load config: {e}"));
            None
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "unable to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}

/// Handle `shade init [--force]`.
fn run_init(renderer: &dyn RenderSink, force: bool) -> Result<(), String> {
    match initialize_default_global_config(force)
        .map_err(|e| format!("failed to initialize ~/.config/shade: {e}"))?
    {
        GlobalConfigInitResult::Created { path } => {
            renderer.activity("initialized shade config");
            renderer.field("path", &path.display().to_string());
            Ok(())
        }
        GlobalConfigInitResult::Overwritten { path, backup_path } => {
            renderer.activity("reinitialized shade config");
            renderer.field("path", &path.display().to_string());
            renderer.field("backup", &backup_path.display().to_string());
            Ok(())
        }
        GlobalConfigInitResult::AlreadyInitialized { path } => Err(format!(
            "shade is already initialized at {}. Use `shade init --force` to overwrite.",
            path.display()
        )),
    }
}

/// Handle `shade watch`.
async fn run_watch<F>(
    config: &Config,
    renderer: &dyn RenderSink,
    shutdown: F,
) -> Result<(), ShadeError>
where
    F: Future<Output = ()>,
{
    let targets = config.watch_targets();
    if targets.presets.is_empty() {
        renderer.warn("no [profiles] configured; only shell files will follow the theme");
    }
    let app: Arc<dyn TerminalApp> = Arc::new(config.it2api_bridge());
    watch(app, &targets, renderer, shutdown).await
}

/// Handle `shade sun`.
async fn run_sun(config: &Config, renderer: &dyn RenderSink) -> Result<(), ShadeError> {
    let targets = config.sun_targets();
    if targets.settings.is_none() {
        renderer.warn("windows_terminal.settings_path is not set; skipping terminal settings");
    }
    sync_once(
        &config.sun_client(),
        &targets,
        chrono::Local::now(),
        renderer,
    )
    .await
    .map(|_| ())
}
