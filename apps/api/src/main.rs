mod analysis;
mod config;
mod errors;
mod formatting;
mod history;
mod models;
mod routes;
mod scoring;
mod state;
mod theme;
mod uploads;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::theme::store::{MemoryThemeStore, RedisThemeStore, ThemeStore};
use crate::theme::ThemeSettings;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Insight API v{}", env!("CARGO_PKG_VERSION"));

    // Display-mode store: Redis when configured, process memory otherwise
    let store = build_theme_store(&config)?;
    let theme = ThemeSettings::initialize(store, config.theme_system_preference).await;

    let mut mode_changes = theme.subscribe();
    tokio::spawn(async move {
        while mode_changes.changed().await.is_ok() {
            let mode = *mode_changes.borrow_and_update();
            info!(mode = %mode, "Display mode changed");
        }
    });

    let state = AppState {
        config: config.clone(),
        theme,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_theme_store(config: &Config) -> Result<Arc<dyn ThemeStore>> {
    match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!(key = %config.theme_storage_key, "Redis theme store initialized");
            Ok(Arc::new(RedisThemeStore::new(
                client,
                config.theme_storage_key.clone(),
            )))
        }
        None => {
            info!("REDIS_URL not set; display mode kept in memory");
            Ok(Arc::new(MemoryThemeStore::new()))
        }
    }
}
