//! Unified error types for theme detection and propagation.

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// UpstreamError
// ---------------------------------------------------------------------------

/// Errors from the sunrise/sunset time service.
#[derive(Debug)]
pub enum UpstreamError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Any response status other than 200.
    Status(u16),
    /// The body did not carry the expected fields or timestamp format.
    Payload(String),
}

impl UpstreamError {
    /// HTTP status code when the failure was a non-success response.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for UpstreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code) => write!(f, "HTTP request returned status code: {code}"),
            Self::Payload(msg) => write!(f, "unexpected payload: {msg}"),
        }
    }
}

impl std::error::Error for UpstreamError {}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// Errors raised by a live terminal application backend.
#[derive(Debug)]
pub enum AppError {
    /// The helper process could not be started.
    Spawn(std::io::Error),
    /// The helper ran but reported failure.
    Command { command: String, stderr: String },
    /// A requested color preset does not exist in the application.
    UnknownPreset(String),
    /// The theme subscription stopped delivering values.
    SubscriptionClosed,
    /// A concurrent lookup task panicked or was cancelled.
    Task(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spawn(e) => write!(f, "failed to start helper: {e}"),
            Self::Command { command, stderr } => {
                write!(f, "`{command}` failed: {}", stderr.trim())
            }
            Self::UnknownPreset(name) => write!(f, "unknown color preset `{name}`"),
            Self::SubscriptionClosed => write!(f, "theme subscription closed"),
            Self::Task(msg) => write!(f, "lookup task failed: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

// ---------------------------------------------------------------------------
// ShadeError
// ---------------------------------------------------------------------------

/// Top-level error type. Every variant is fatal for the current run.
#[derive(Debug)]
pub enum ShadeError {
    /// Neither a subscription nor an application handle was supplied.
    InvalidInput(String),
    Upstream(UpstreamError),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A file was readable but did not have the expected shape.
    Malformed(String),
    App(AppError),
    Config(ConfigError),
}

impl ShadeError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for ShadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Upstream(e) => write!(f, "upstream: {e}"),
            Self::Io { path, source } => write!(f, "io: {}: {source}", path.display()),
            Self::Json { path, source } => write!(f, "json: {}: {source}", path.display()),
            Self::Malformed(msg) => write!(f, "malformed: {msg}"),
            Self::App(e) => write!(f, "terminal app: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for ShadeError {}

impl From<UpstreamError> for ShadeError {
    fn from(e: UpstreamError) -> Self {
        Self::Upstream(e)
    }
}

impl From<AppError> for ShadeError {
    fn from(e: AppError) -> Self {
        Self::App(e)
    }
}

impl From<ConfigError> for ShadeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn upstream_status_display_names_the_code() {
        let e = UpstreamError::Status(503);
        assert_eq!(e.status_code(), Some(503));
        assert_eq!(e.to_string(), "HTTP request returned status code: 503");
    }

    #[test]
    fn io_error_display_includes_path() {
        let e = ShadeError::io(
            Path::new("/tmp/zshrc"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let s = e.to_string();
        assert!(s.contains("/tmp/zshrc"), "got: {s}");
        assert!(s.contains("denied"), "got: {s}");
    }

    #[test]
    fn shade_error_wraps_app_error() {
        let e = ShadeError::from(AppError::UnknownPreset("Nope".into()));
        assert_eq!(e.to_string(), "terminal app: unknown color preset `Nope`");
    }
}
