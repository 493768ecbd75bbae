//! User-facing terminal output.

pub mod render;

pub use render::{RenderSink, Renderer};
