//! iTerm2 backend driven through the `it2api` helper.
//!
//! Each capability maps to one helper invocation. Subscriptions are served by
//! a background task that polls the effective theme and forwards only values
//! that differ from the previous one.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::sync::mpsc;

use super::{ColorPreset, ProfileRecord, TerminalApp, ThemeSubscription, EFFECTIVE_THEME_VARIABLE};
use crate::error::AppError;

/// Bridge to a running iTerm2 instance.
#[derive(Debug, Clone)]
pub struct It2ApiBridge {
    program: String,
    poll_interval: Duration,
}

impl It2ApiBridge {
    pub fn new(program: impl Into<String>, poll_interval: Duration) -> Self {
        Self {
            program: program.into(),
            poll_interval: poll_interval.max(Duration::from_millis(100)),
        }
    }

    async fn run(&self, args: &[&str]) -> Result<String, AppError> {
        tracing::debug!(program = %self.program, ?args, "invoking it2api");
        let output = Command::new(&self.program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(AppError::Spawn)?;
        if !output.status.success() {
            return Err(AppError::Command {
                command: format!("{} {}", self.program, args.join(" ")),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn list_color_presets(&self) -> Result<Vec<String>, AppError> {
        let stdout = self.run(&["list-color-presets"]).await?;
        Ok(non_empty_lines(&stdout))
    }
}

#[async_trait]
impl TerminalApp for It2ApiBridge {
    async fn effective_theme(&self) -> Result<String, AppError> {
        let stdout = self
            .run(&["get-variable", "--app", EFFECTIVE_THEME_VARIABLE])
            .await?;
        Ok(stdout.trim().to_string())
    }

    async fn subscribe_effective_theme(&self) -> Result<ThemeSubscription, AppError> {
        let (tx, rx) = mpsc::channel(8);
        let bridge = self.clone();
        let producer = tokio::spawn(async move {
            let mut last: Option<String> = None;
            loop {
                match bridge.effective_theme().await {
                    Ok(theme) => {
                        if last.as_deref() != Some(theme.as_str()) {
                            last = Some(theme.clone());
                            if tx.send(Ok(theme)).await.is_err() {
                                return;
                            }
                        }
                    }
                    Err(err) => {
                        let _ = tx.send(Err(err)).await;
                        return;
                    }
                }
                tokio::time::sleep(bridge.poll_interval).await;
            }
        });
        Ok(ThemeSubscription::new(rx, Some(producer)))
    }

    async fn profiles(&self) -> Result<Vec<ProfileRecord>, AppError> {
        let stdout = self.run(&["list-profiles"]).await?;
        Ok(non_empty_lines(&stdout)
            .into_iter()
            .map(ProfileRecord::new)
            .collect())
    }

    async fn color_preset(&self, name: &str) -> Result<ColorPreset, AppError> {
        let presets = self.list_color_presets().await?;
        if presets.iter().any(|preset| preset == name) {
            Ok(ColorPreset {
                name: name.to_string(),
            })
        } else {
            Err(AppError::UnknownPreset(name.to_string()))
        }
    }

    async fn set_color_preset(
        &self,
        profile: &ProfileRecord,
        preset: &ColorPreset,
    ) -> Result<(), AppError> {
        self.run(&["set-color-preset", &profile.name, &preset.name])
            .await
            .map(|_| ())
    }
}

fn non_empty_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
