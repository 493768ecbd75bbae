//! Shared test fixtures: temp dirs, a scripted terminal app, and a recording
//! render sink.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::mpsc;

use crate::error::AppError;
use crate::terminal::{ColorPreset, ProfileRecord, TerminalApp, ThemeSubscription};
use crate::ui::RenderSink;

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "shade-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

type ThemeMessage = Result<String, AppError>;

/// Scripted [`TerminalApp`] that records every mutation.
#[derive(Debug)]
pub struct FakeTerminal {
    theme: String,
    profiles: Vec<ProfileRecord>,
    missing_presets: BTreeSet<String>,
    notifier: Mutex<Option<mpsc::Sender<ThemeMessage>>>,
    receiver: Mutex<Option<mpsc::Receiver<ThemeMessage>>>,
    fetches: Mutex<Vec<String>>,
    applied: Mutex<Vec<(String, String)>>,
}

impl FakeTerminal {
    pub fn new(theme: &str) -> Self {
        let (tx, rx) = mpsc::channel(16);
        Self {
            theme: theme.to_string(),
            profiles: Vec::new(),
            missing_presets: BTreeSet::new(),
            notifier: Mutex::new(Some(tx)),
            receiver: Mutex::new(Some(rx)),
            fetches: Mutex::new(Vec::new()),
            applied: Mutex::new(Vec::new()),
        }
    }

    pub fn with_profiles<const N: usize>(mut self, names: [&str; N]) -> Self {
        self.profiles = names.into_iter().map(ProfileRecord::new).collect();
        self
    }

    pub fn without_preset(mut self, name: &str) -> Self {
        self.missing_presets.insert(name.to_string());
        self
    }

    /// Take the sending half of the theme subscription. Dropping it closes
    /// the subscription.
    pub fn notifier(&self) -> mpsc::Sender<ThemeMessage> {
        self.notifier
            .lock()
            .unwrap()
            .take()
            .expect("notifier already taken")
    }

    pub fn preset_fetches(&self) -> Vec<String> {
        self.fetches.lock().unwrap().clone()
    }

    /// `(profile, preset)` pairs in application order.
    pub fn applied(&self) -> Vec<(String, String)> {
        self.applied.lock().unwrap().clone()
    }
}

#[async_trait]
impl TerminalApp for FakeTerminal {
    async fn effective_theme(&self) -> Result<String, AppError> {
        Ok(self.theme.clone())
    }

    async fn subscribe_effective_theme(&self) -> Result<ThemeSubscription, AppError> {
        let rx = self
            .receiver
            .lock()
            .unwrap()
            .take()
            .ok_or(AppError::SubscriptionClosed)?;
        Ok(ThemeSubscription::new(rx, None))
    }

    async fn profiles(&self) -> Result<Vec<ProfileRecord>, AppError> {
        Ok(self.profiles.clone())
    }

    async fn color_preset(&self, name: &str) -> Result<ColorPreset, AppError> {
        self.fetches.lock().unwrap().push(name.to_string());
        if self.missing_presets.contains(name) {
            return Err(AppError::UnknownPreset(name.to_string()));
        }
        Ok(ColorPreset {
            name: name.to_string(),
        })
    }

    async fn set_color_preset(
        &self,
        profile: &ProfileRecord,
        preset: &ColorPreset,
    ) -> Result<(), AppError> {
        self.applied
            .lock()
            .unwrap()
            .push((profile.name.clone(), preset.name.clone()));
        Ok(())
    }
}

/// Render sink that keeps activity lines for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    activities: Mutex<Vec<String>>,
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn activities(&self) -> Vec<String> {
        self.activities.lock().unwrap().clone()
    }

    /// Every non-activity line, rendered as `kind: text`.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl RenderSink for RecordingSink {
    fn activity(&self, text: &str) {
        self.activities.lock().unwrap().push(text.to_string());
    }

    fn field(&self, key: &str, value: &str) {
        self.lines.lock().unwrap().push(format!("field: {key}: {value}"));
    }

    fn detail(&self, text: &str) {
        self.lines.lock().unwrap().push(format!("detail: {text}"));
    }

    fn warn(&self, msg: &str) {
        self.lines.lock().unwrap().push(format!("warn: {msg}"));
    }

    fn error(&self, msg: &str) {
        self.lines.lock().unwrap().push(format!("error: {msg}"));
    }
}
