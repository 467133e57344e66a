use anyhow::{Context, Result};

use crate::theme::store::DEFAULT_STORAGE_KEY;
use crate::theme::DisplayMode;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Redis backs the display-mode preference when set; in-memory otherwise.
    pub redis_url: Option<String>,
    pub theme_storage_key: String,
    /// Stands in for the OS colour-scheme preference.
    pub theme_system_preference: Option<DisplayMode>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            redis_url: optional_env("REDIS_URL"),
            theme_storage_key: optional_env("THEME_STORAGE_KEY")
                .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            theme_system_preference: optional_env("THEME_SYSTEM_PREFERENCE")
                .map(|v| v.parse::<DisplayMode>())
                .transpose()
                .context("THEME_SYSTEM_PREFERENCE must be 'light' or 'dark'")?,
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
