//! Producers of the light/dark signal.
//!
//! - Live: the terminal application's effective theme, read directly or from
//!   a subscription ([`detect_appearance`]).
//! - Sun: sunrise/sunset for a fixed location ([`sun`]).

pub mod sun;

use crate::appearance::Appearance;
use crate::error::ShadeError;
use crate::terminal::{TerminalApp, ThemeSubscription};

/// Where to read the effective theme from.
pub enum ThemeInput<'a> {
    /// Next value delivered by a live subscription.
    Subscription(&'a mut ThemeSubscription),
    /// One-off query of the application's current theme.
    DirectQuery(&'a dyn TerminalApp),
}

/// Read the effective theme and classify it.
///
/// Fails with [`ShadeError::InvalidInput`] when no input is supplied.
pub async fn detect_appearance(input: Option<ThemeInput<'_>>) -> Result<Appearance, ShadeError> {
    let theme = match input {
        Some(ThemeInput::Subscription(sub)) => sub.next_theme().await?,
        Some(ThemeInput::DirectQuery(app)) => app.effective_theme().await?,
        None => {
            return Err(ShadeError::InvalidInput(
                "need a subscription or an application handle to detect the theme".to_string(),
            ))
        }
    };
    let appearance = parse_effective_theme(&theme);
    tracing::info!(theme = %theme, dark = appearance.is_dark(), "detected theme");
    Ok(appearance)
}

/// Themes are space-delimited attribute lists; dark iff one token is `dark`.
pub fn parse_effective_theme(attributes: &str) -> Appearance {
    Appearance::from_dark(attributes.split(' ').any(|token| token == "dark"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::FakeTerminal;
    use tokio::sync::mpsc;

    #[test]
    fn dark_token_anywhere_means_dark() {
        for theme in ["dark", "dark highContrast", "highContrast dark", "a b dark c"] {
            assert_eq!(parse_effective_theme(theme), Appearance::Dark, "{theme}");
        }
    }

    #[test]
    fn missing_dark_token_means_light() {
        for theme in ["light", "light highContrast", "", "darker", "Dark", "minimal"] {
            assert_eq!(parse_effective_theme(theme), Appearance::Light, "{theme}");
        }
    }

    #[tokio::test]
    async fn missing_input_is_invalid() {
        let err = detect_appearance(None).await.unwrap_err();
        assert!(matches!(err, ShadeError::InvalidInput(_)), "got: {err}");
    }

    #[tokio::test]
    async fn direct_query_reads_application_theme() {
        let app = FakeTerminal::new("dark highContrast");
        let appearance = detect_appearance(Some(ThemeInput::DirectQuery(&app)))
            .await
            .unwrap();
        assert_eq!(appearance, Appearance::Dark);
    }

    #[tokio::test]
    async fn subscription_reads_next_notification() {
        let (tx, rx) = mpsc::channel(1);
        let mut sub = ThemeSubscription::new(rx, None);
        tx.send(Ok("light".to_string())).await.unwrap();
        let appearance = detect_appearance(Some(ThemeInput::Subscription(&mut sub)))
            .await
            .unwrap();
        assert_eq!(appearance, Appearance::Light);
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        fn other_token() -> impl Strategy<Value = String> {
            proptest::string::string_regex("[A-Za-z]{1,12}")
                .expect("regex")
                .prop_filter("not the dark token", |token| token != "dark")
        }

        proptest! {
            #[test]
            fn dark_token_at_any_position_means_dark(
                tokens in proptest::collection::vec(other_token(), 0..8),
                at in 0usize..8
            ) {
                let mut tokens = tokens;
                let at = at % (tokens.len() + 1);
                tokens.insert(at, "dark".to_string());
                prop_assert_eq!(parse_effective_theme(&tokens.join(" ")), Appearance::Dark);
            }

            #[test]
            fn without_dark_token_means_light(
                tokens in proptest::collection::vec(other_token(), 0..8)
            ) {
                prop_assert_eq!(parse_effective_theme(&tokens.join(" ")), Appearance::Light);
            }
        }
    }
}
