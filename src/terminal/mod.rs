//! Live terminal application capability interface.
//!
//! The sync pipeline only needs a handful of operations from the terminal
//! application: read or subscribe to its effective theme, enumerate profiles,
//! fetch a named color preset, and apply a preset to a profile. Backends
//! implement [`TerminalApp`]; the wire protocol behind them is opaque here.

pub mod it2api;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::AppError;

/// Application variable holding the effective UI theme attributes.
pub const EFFECTIVE_THEME_VARIABLE: &str = "effectiveTheme";

/// A profile owned by the terminal application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    pub name: String,
}

impl ProfileRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Handle to a named color preset fetched from the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: String,
}

/// Operations the sync pipeline needs from a live terminal application.
#[async_trait]
pub trait TerminalApp: Send + Sync {
    /// Current value of the effective-theme variable.
    async fn effective_theme(&self) -> Result<String, AppError>;

    /// Start delivering effective-theme values as they change.
    async fn subscribe_effective_theme(&self) -> Result<ThemeSubscription, AppError>;

    async fn profiles(&self) -> Result<Vec<ProfileRecord>, AppError>;

    async fn color_preset(&self, name: &str) -> Result<ColorPreset, AppError>;

    async fn set_color_preset(
        &self,
        profile: &ProfileRecord,
        preset: &ColorPreset,
    ) -> Result<(), AppError>;
}

/// Stream of effective-theme notifications.
///
/// Owns the producer task (if any) and aborts it when dropped.
#[derive(Debug)]
pub struct ThemeSubscription {
    rx: mpsc::Receiver<Result<String, AppError>>,
    producer: Option<JoinHandle<()>>,
}

impl ThemeSubscription {
    pub fn new(
        rx: mpsc::Receiver<Result<String, AppError>>,
        producer: Option<JoinHandle<()>>,
    ) -> Self {
        Self { rx, producer }
    }

    /// Wait for the next theme value.
    pub async fn next_theme(&mut self) -> Result<String, AppError> {
        match self.rx.recv().await {
            Some(value) => value,
            None => Err(AppError::SubscriptionClosed),
        }
    }
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(task) = self.producer.take() {
            task.abort();
        }
    }
}
