//! Shade keeps terminal color themes in step with light/dark mode.
//!
//! Two flows share the same sinks:
//!
//! - [`sync::watch`] follows iTerm2's effective theme and switches each
//!   managed profile's color preset as the system appearance changes.
//! - [`sync::sun`] asks a sunrise/sunset service whether it is currently dark
//!   and rewrites the shell init file, pager config and Windows Terminal
//!   settings to match.
//!
//! ```no_run
//! use shade::config::load_config;
//! use shade::sync::sun::sync_once;
//! use shade::ui::Renderer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let loaded = load_config(None)?;
//! let config = loaded.config;
//! let report = sync_once(
//!     &config.sun_client(),
//!     &config.sun_targets(),
//!     chrono::Local::now(),
//!     &Renderer::new(false),
//! )
//! .await?;
//! println!("{} file(s) written", report.written.len());
//! # Ok(())
//! # }
//! ```

pub mod appearance;
pub mod build_info;
pub mod config;
pub mod error;
pub mod gate;
pub mod presets;
pub mod sinks;
pub mod source;
pub mod sync;
pub mod terminal;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
