//! Propagation targets for the resolved appearance.
//!
//! Every sink checks its own current value first and skips the write when
//! nothing would change. Failures propagate; there is no rollback.

pub mod live;
pub mod settings;
pub mod shell;

pub use live::{apply_color_presets, LiveOutcome};
pub use settings::{SettingsDocument, TerminalSettings};
pub use shell::{PagerConfig, ShellInitFile, ShellSinks, BACKGROUND_VARIABLE};
