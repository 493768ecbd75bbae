//! End-to-end flows: detect, gate, resolve, propagate.
//!
//! - [`watch`]: live observation loop against a terminal application.
//! - [`sun`]: one-shot run driven by sunrise/sunset times.

pub mod sun;
pub mod watch;

use std::path::PathBuf;

use crate::appearance::Appearance;
use crate::ui::RenderSink;

/// Side effects of one propagation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub appearance: Appearance,
    /// Files rewritten, in write order.
    pub written: Vec<PathBuf>,
    /// Color presets looked up in the terminal application.
    pub presets_fetched: Vec<String>,
    /// Terminal profiles that had a preset applied.
    pub profiles_updated: Vec<String>,
}

impl SyncReport {
    pub fn new(appearance: Appearance) -> Self {
        Self {
            appearance,
            written: Vec::new(),
            presets_fetched: Vec::new(),
            profiles_updated: Vec::new(),
        }
    }

    /// True when the pass changed nothing anywhere.
    pub fn is_noop(&self) -> bool {
        self.written.is_empty() && self.profiles_updated.is_empty()
    }

    fn render(&self, sink: &dyn RenderSink) {
        if self.is_noop() {
            sink.detail(&format!("already {}; nothing to update", self.appearance));
            return;
        }
        for preset in &self.presets_fetched {
            sink.field("preset", preset);
        }
        for profile in &self.profiles_updated {
            sink.field("profile", profile);
        }
        for path in &self.written {
            sink.field("updated", &path.display().to_string());
        }
    }
}
