use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration loaded from environment variables.
/// The Gemini key is optional at startup; without it every model call fails.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub port: u16,
    /// Per-file ceiling for uploaded résumés.
    pub max_upload_bytes: usize,
    /// Ceiling for a whole multipart upload request.
    pub max_request_bytes: usize,
    /// Sessions untouched for this long are evicted.
    pub session_ttl_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            gemini_model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_GEMINI_API_BASE.to_string()),
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", 10 * 1024 * 1024)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            max_request_bytes: parse_env("MAX_REQUEST_BYTES", 50 * 1024 * 1024)
                .context("MAX_REQUEST_BYTES must be a byte count")?,
            session_ttl_secs: parse_env("SESSION_TTL_SECS", 60 * 60)
                .context("SESSION_TTL_SECS must be a number of seconds")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Returns the variable's value, treating unset and blank the same way.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Could not parse environment variable '{key}'={raw}")),
        None => Ok(default),
    }
}

impl Config {
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    /// Sweep often enough that a session outlives its TTL by at most a quarter.
    pub fn session_sweep_period(&self) -> Duration {
        Duration::from_secs((self.session_ttl_secs / 4).clamp(1, 300))
    }
}

#[cfg(test)]
impl Config {
    /// Configuration used by handler tests; never touches the environment.
    pub fn for_tests() -> Self {
        Config {
            google_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_base: DEFAULT_GEMINI_API_BASE.to_string(),
            port: 0,
            max_upload_bytes: 1024 * 1024,
            max_request_bytes: 8 * 1024 * 1024,
            session_ttl_secs: 60,
            rust_log: "debug".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        let value: u16 = parse_env("SCREENER_TEST_UNSET_PORT", 8080).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_sweep_period_tracks_ttl() {
        let mut config = Config::for_tests();
        config.session_ttl_secs = 3600;
        assert_eq!(config.session_sweep_period(), Duration::from_secs(300));
        config.session_ttl_secs = 60;
        assert_eq!(config.session_sweep_period(), Duration::from_secs(15));
        config.session_ttl_secs = 2;
        assert_eq!(config.session_sweep_period(), Duration::from_secs(1));
    }

    #[test]
    fn test_optional_env_unset_is_none() {
        assert_eq!(optional_env("SCREENER_TEST_UNSET_KEY"), None);
    }
}
