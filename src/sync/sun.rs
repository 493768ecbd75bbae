//! One-shot sync driven by sunrise and sunset.
//!
//! The appearance is computed before any file is touched, so an upstream
//! failure leaves every sink as it was. Each file sink then gates on its own
//! current value.

use chrono::{DateTime, Local};

use super::SyncReport;
use crate::appearance::Appearance;
use crate::error::ShadeError;
use crate::presets::SchemePair;
use crate::sinks::{ShellSinks, TerminalSettings};
use crate::source::sun::{Location, SunClient};
use crate::ui::RenderSink;

/// Everything the sun flow reads from and writes to.
#[derive(Debug, Clone)]
pub struct SunTargets {
    pub location: Location,
    pub settings: Option<TerminalSettings>,
    pub schemes: SchemePair,
    pub shell: Option<ShellSinks>,
}

/// Apply `appearance` to the shell sinks and the terminal settings.
pub fn propagate(targets: &SunTargets, appearance: Appearance) -> Result<SyncReport, ShadeError> {
    let mut report = SyncReport::new(appearance);
    if let Some(shell) = &targets.shell {
        report.written.extend(shell.apply(appearance)?);
    }
    if let Some(settings) = &targets.settings {
        report
            .written
            .extend(settings.apply(targets.schemes.pick(appearance))?);
    }
    Ok(report)
}

/// Detect the appearance for `now` and propagate it.
pub async fn sync_once(
    client: &SunClient,
    targets: &SunTargets,
    now: DateTime<Local>,
    render: &dyn RenderSink,
) -> Result<SyncReport, ShadeError> {
    let appearance = client.appearance_at(targets.location, now).await?;
    render.activity(&format!("Sun says {appearance}"));
    let report = propagate(targets, appearance)?;
    report.render(render);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::{PagerConfig, ShellInitFile};
    use crate::testsupport::{RecordingSink, TestTempDir};
    use std::fs;
    use std::time::Duration;

    fn targets(tmp: &TestTempDir) -> SunTargets {
        let zshrc = tmp.write_text("zshrc", "export NVIM_BACKGROUND=light\n");
        let bat = tmp.write_text("bat/config", "--theme=\"gruvbox-light\"");
        let settings = tmp.write_text(
            "settings.json",
            r#"{"profiles": {"defaults": {"colorScheme": "Gruvbox Light"}}}"#,
        );
        SunTargets {
            location: Location {
                latitude: 34.0536909,
                longitude: -118.242766,
            },
            settings: Some(TerminalSettings::new(
                settings,
                vec![tmp.child("mirror.json")],
            )),
            schemes: SchemePair::new("Gruvbox Light", "Gruvbox Dark"),
            shell: Some(ShellSinks {
                init_file: ShellInitFile::new(zshrc),
                pager: Some(PagerConfig::new(
                    bat,
                    crate::presets::PresetPair::new("gruvbox-light", "gruvbox"),
                )),
            }),
        }
    }

    #[test]
    fn second_identical_pass_writes_nothing() {
        let tmp = TestTempDir::new("sun-idempotent");
        let targets = targets(&tmp);

        let first = propagate(&targets, Appearance::Dark).unwrap();
        assert_eq!(
            first.written,
            vec![
                tmp.child("zshrc"),
                tmp.child("bat/config"),
                tmp.child("settings.json"),
                tmp.child("mirror.json"),
            ]
        );
        let second = propagate(&targets, Appearance::Dark).unwrap();
        assert!(second.is_noop(), "{second:?}");
    }

    #[test]
    fn lagging_shell_file_is_repaired_even_when_settings_match() {
        let tmp = TestTempDir::new("sun-repair");
        let targets = targets(&tmp);

        let report = propagate(&targets, Appearance::Light).unwrap();
        assert!(report.is_noop());

        fs::write(tmp.child("zshrc"), "export NVIM_BACKGROUND=dark\n").unwrap();
        let report = propagate(&targets, Appearance::Light).unwrap();
        assert_eq!(report.written, vec![tmp.child("zshrc"), tmp.child("bat/config")]);
        assert!(!tmp.child("mirror.json").exists());
    }

    #[tokio::test]
    async fn upstream_failure_writes_no_files() {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let tmp = TestTempDir::new("sun-upstream");
        let targets = targets(&tmp);
        let client = SunClient::new(server.uri(), Some(Duration::from_secs(5)));
        let render = RecordingSink::default();

        let err = sync_once(&client, &targets, Local::now(), &render)
            .await
            .unwrap_err();
        assert!(
            matches!(err, ShadeError::Upstream(ref e) if e.status_code() == Some(503)),
            "got: {err}"
        );
        assert_eq!(
            fs::read_to_string(tmp.child("zshrc")).unwrap(),
            "export NVIM_BACKGROUND=light\n"
        );
        assert!(!tmp.child("mirror.json").exists());
        assert!(render.activities().is_empty());
    }
}
