//! Status output for theme transitions.
//!
//! `RenderSink` is the contract consumed by the sync flows; `Renderer` is the
//! terminal implementation. Tests substitute a recording sink.

use crossterm::style::{Color, Stylize};

const GLYPH_BULLET: &str = "•";
const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";
const INDENT: &str = "  ";

/// Injectable status output used by the sync flows.
pub trait RenderSink: Send + Sync {
    /// A state transition or top-level step.
    fn activity(&self, text: &str);
    /// One key/value row under the current activity.
    fn field(&self, key: &str, value: &str);
    /// Additional indented detail.
    fn detail(&self, text: &str);
    fn warn(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Terminal renderer. Progress goes to stdout, problems to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }
}

impl RenderSink for Renderer {
    fn activity(&self, text: &str) {
        if self.color {
            println!(
                "{} {}",
                GLYPH_BULLET.with(Color::DarkCyan),
                text.with(Color::Grey).bold()
            );
        } else {
            println!("{text}");
        }
    }

    fn field(&self, key: &str, value: &str) {
        if self.color {
            println!(
                "{INDENT}{} {}",
                format!("{key}:").with(Color::DarkGrey),
                value.with(Color::White)
            );
        } else {
            println!("{INDENT}{key}: {value}");
        }
    }

    fn detail(&self, text: &str) {
        if self.color {
            println!("{INDENT}{}", text.with(Color::DarkGrey));
        } else {
            println!("{INDENT}{text}");
        }
    }

    fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }
}
