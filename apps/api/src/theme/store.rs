//! Persistence for the display-mode preference.
//!
//! `AppState` holds the store behind `ThemeSettings` as `Arc<dyn ThemeStore>`.
//! Redis is used when `REDIS_URL` is configured, otherwise the in-memory store.

use std::sync::Mutex;

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::debug;

use crate::errors::AppError;
use crate::theme::DisplayMode;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "theme";

#[async_trait]
pub trait ThemeStore: Send + Sync {
    /// Returns the stored preference, or `None` if nothing was stored.
    async fn load(&self) -> Result<Option<DisplayMode>, AppError>;

    async fn save(&self, mode: DisplayMode) -> Result<(), AppError>;

    /// "memory" | "redis", reported by the theme endpoint.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryThemeStore
// ────────────────────────────────────────────────────────────────────────────

/// Process-local store. The raw stored string is kept so that reads behave
/// exactly like the persistent backend.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: Mutex<Option<String>>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(Some(value.to_string())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // A poisoned lock still holds a valid string.
        self.value.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ThemeStore for MemoryThemeStore {
    async fn load(&self) -> Result<Option<DisplayMode>, AppError> {
        Ok(self.lock().as_deref().and_then(DisplayMode::from_stored))
    }

    async fn save(&self, mode: DisplayMode) -> Result<(), AppError> {
        *self.lock() = Some(mode.as_str().to_string());
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RedisThemeStore
// ────────────────────────────────────────────────────────────────────────────

pub struct RedisThemeStore {
    client: redis::Client,
    key: String,
}

impl RedisThemeStore {
    pub fn new(client: redis::Client, key: impl Into<String>) -> Self {
        Self {
            client,
            key: key.into(),
        }
    }
}

#[async_trait]
impl ThemeStore for RedisThemeStore {
    async fn load(&self) -> Result<Option<DisplayMode>, AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = conn.get(&self.key).await?;
        debug!(key = %self.key, value = ?raw, "Loaded stored display mode");
        Ok(raw.as_deref().and_then(DisplayMode::from_stored))
    }

    async fn save(&self, mode: DisplayMode) -> Result<(), AppError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(&self.key, mode.as_str()).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
