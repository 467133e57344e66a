use crate::config::Config;
use crate::theme::ThemeSettings;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Process-wide display mode. Handlers resolve it once per request.
    pub theme: ThemeSettings,
}
