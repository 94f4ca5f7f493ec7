use std::path::PathBuf;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default `User-Agent` for the contact-info crawler. A browser-like value:
/// small-business sites routinely refuse obviously non-browser clients.
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable that is set holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files. Useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a variable that is set holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup — no
/// `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_bool = |var: &str, default: &str| -> Result<bool, ConfigError> {
        let raw = or_default(var, default);
        match raw.as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("expected a boolean, got \"{other}\""),
            }),
        }
    };

    let env = parse_environment(&or_default("LEADSCOUT_ENV", "development"));
    let log_level = or_default("LEADSCOUT_LOG_LEVEL", "info");

    let browser_path = PathBuf::from(or_default(
        "LEADSCOUT_BROWSER_PATH",
        "/usr/bin/chromium-browser",
    ));

    let settle_delay_ms = parse_u64("LEADSCOUT_SETTLE_DELAY_MS", "2000")?;
    let poll_interval_ms = parse_u64("LEADSCOUT_POLL_INTERVAL_MS", "250")?;
    let panel_timeout_secs = parse_u64("LEADSCOUT_PANEL_TIMEOUT_SECS", "15")?;
    let max_scroll_attempts = parse_u32("LEADSCOUT_MAX_SCROLL_ATTEMPTS", "12")?;
    let max_results_ceiling = parse_usize("LEADSCOUT_MAX_RESULTS_CEILING", "20")?;
    let contact_timeout_secs = parse_u64("LEADSCOUT_CONTACT_TIMEOUT_SECS", "5")?;
    let user_agent = or_default("LEADSCOUT_USER_AGENT", DEFAULT_USER_AGENT);
    let cache_ttl_secs = parse_u64("LEADSCOUT_CACHE_TTL_SECS", "300")?;
    let contact_info = parse_bool("LEADSCOUT_CONTACT_INFO", "false")?;

    Ok(AppConfig {
        env,
        log_level,
        browser_path,
        settle_delay_ms,
        poll_interval_ms,
        panel_timeout_secs,
        max_scroll_attempts,
        max_results_ceiling,
        contact_timeout_secs,
        user_agent,
        cache_ttl_secs,
        contact_info,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
