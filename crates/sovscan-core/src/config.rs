use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

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

    // The API key is the only hard requirement; everything else has a
    // sensible default for a one-shot analysis run.
    let youtube_api_key = require("YOUTUBE_API_KEY")?;

    let brands_path = PathBuf::from(or_default("SOVSCAN_BRANDS_PATH", "./config/brands.yaml"));
    let query = or_default("SOVSCAN_QUERY", "smart fan");
    let max_videos = parse_u32("SOVSCAN_MAX_VIDEOS", "20")?;
    let max_comments = parse_u32("SOVSCAN_MAX_COMMENTS", "50")?;
    let request_timeout_secs = parse_u64("SOVSCAN_REQUEST_TIMEOUT_SECS", "30")?;
    let sentiment_url = lookup("SOVSCAN_SENTIMENT_URL").ok();
    let raw_out = PathBuf::from(or_default("SOVSCAN_RAW_OUT", "sov_analysis_raw_data.csv"));
    let summary_out = PathBuf::from(or_default("SOVSCAN_SUMMARY_OUT", "sov_report_summary.csv"));
    let log_level = or_default("SOVSCAN_LOG_LEVEL", "info");

    Ok(AppConfig {
        youtube_api_key,
        brands_path,
        query,
        max_videos,
        max_comments,
        request_timeout_secs,
        sentiment_url,
        raw_out,
        summary_out,
        log_level,
    })
}
