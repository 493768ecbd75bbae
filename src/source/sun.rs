//! Sunrise/sunset based light/dark detection.
//!
//! Dark means the current local time of day lies outside the closed interval
//! `[sunrise, sunset]` reported by the time service for today.

use chrono::{DateTime, Local, NaiveDateTime, NaiveTime, Utc};
use serde::Deserialize;
use std::time::Duration;

use crate::appearance::Appearance;
use crate::error::UpstreamError;

/// Timestamp layout returned by the service with `formatted=0`.
pub const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+00:00";

/// Fixed observer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Sunrise and sunset instants for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: DateTime<Utc>,
    pub sunset: DateTime<Utc>,
}

impl SunTimes {
    /// Sunrise and sunset as local wall-clock times of day.
    pub fn local_times(&self) -> (NaiveTime, NaiveTime) {
        (
            self.sunrise.with_timezone(&Local).time(),
            self.sunset.with_timezone(&Local).time(),
        )
    }

    pub fn appearance_at(&self, now: NaiveTime) -> Appearance {
        let (sunrise, sunset) = self.local_times();
        Appearance::from_dark(is_dark_at(now, sunrise, sunset))
    }
}

/// True when `now` is before sunrise or after sunset; both bounds count as day.
pub fn is_dark_at(now: NaiveTime, sunrise: NaiveTime, sunset: NaiveTime) -> bool {
    !(sunrise <= now && now <= sunset)
}

/// Parse one `results.*` timestamp as a UTC instant.
pub fn parse_instant(text: &str) -> Result<DateTime<Utc>, UpstreamError> {
    NaiveDateTime::parse_from_str(text, INSTANT_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| UpstreamError::Payload(format!("bad timestamp `{text}`: {e}")))
}

#[derive(Debug, Deserialize)]
struct SunResponse {
    results: SunResults,
}

#[derive(Debug, Deserialize)]
struct SunResults {
    sunrise: String,
    sunset: String,
}

/// HTTP client for the sunrise/sunset service.
#[derive(Debug, Clone)]
pub struct SunClient {
    http: reqwest::Client,
    api_url: String,
}

impl SunClient {
    /// `timeout` bounds each request; `None` waits indefinitely.
    pub fn new(api_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        // Fall back to reqwest defaults if builder creation fails for any reason.
        let http = builder.build().unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            api_url: api_url.into(),
        }
    }

    /// Fetch today's sunrise and sunset for `location`.
    pub async fn sun_times(&self, location: Location) -> Result<SunTimes, UpstreamError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("lat", location.latitude.to_string()),
                ("lng", location.longitude.to_string()),
                ("formatted", "0".to_string()),
            ])
            .send()
            .await?;
        let status = response.status().as_u16();
        if status != 200 {
            return Err(UpstreamError::Status(status));
        }
        let body: SunResponse = response
            .json()
            .await
            .map_err(|e| UpstreamError::Payload(e.to_string()))?;
        let times = SunTimes {
            sunrise: parse_instant(&body.results.sunrise)?,
            sunset: parse_instant(&body.results.sunset)?,
        };
        tracing::debug!(sunrise = %times.sunrise, sunset = %times.sunset, "fetched sun times");
        Ok(times)
    }

    /// Classify `now` against today's sun times for `location`.
    pub async fn appearance_at(
        &self,
        location: Location,
        now: DateTime<Local>,
    ) -> Result<Appearance, UpstreamError> {
        let times = self.sun_times(location).await?;
        let appearance = times.appearance_at(now.time());
        tracing::info!(
            now = %now.time(),
            dark = appearance.is_dark(),
            "classified local time against sun times"
        );
        Ok(appearance)
    }
}
