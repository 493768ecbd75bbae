//! Environment overrides.
//!
//! `SHADE_*` variables take precedence over file values.

use crate::error::ConfigError;

use super::Config;

pub(super) const ENV_LATITUDE: &str = "SHADE_LATITUDE";
pub(super) const ENV_LONGITUDE: &str = "SHADE_LONGITUDE";
pub(super) const ENV_SUN_API_URL: &str = "SHADE_SUN_API_URL";
pub(super) const ENV_IT2API: &str = "SHADE_IT2API";

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(value) = non_empty(env_lookup, ENV_LATITUDE) {
        config.sun.latitude = parse_coordinate(ENV_LATITUDE, &value, 90.0)?;
    }
    if let Some(value) = non_empty(env_lookup, ENV_LONGITUDE) {
        config.sun.longitude = parse_coordinate(ENV_LONGITUDE, &value, 180.0)?;
    }
    if let Some(url) = non_empty(env_lookup, ENV_SUN_API_URL) {
        config.sun.api_url = url;
    }
    if let Some(program) = non_empty(env_lookup, ENV_IT2API) {
        config.iterm.program = program;
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse a coordinate and check it against `±limit` degrees.
pub(super) fn parse_coordinate(name: &str, value: &str, limit: f64) -> Result<f64, ConfigError> {
    let parsed = value.parse::<f64>().map_err(|_| {
        ConfigError::Invalid(format!("invalid {name} value `{value}`: expected decimal degrees"))
    })?;
    check_coordinate(name, parsed, limit)
}

pub(super) fn check_coordinate(name: &str, value: f64, limit: f64) -> Result<f64, ConfigError> {
    if !value.is_finite() || value.abs() > limit {
        return Err(ConfigError::Invalid(format!(
            "invalid {name} value `{value}`: must be within ±{limit}"
        )));
    }
    Ok(value)
}
