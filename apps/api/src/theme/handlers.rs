use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;
use crate::theme::settings::ModeSource;
use crate::theme::DisplayMode;

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub mode: DisplayMode,
    pub initialized_from: ModeSource,
    pub backend: String,
}

#[derive(Debug, Deserialize)]
pub struct SetThemeRequest {
    pub mode: DisplayMode,
}

fn snapshot(state: &AppState, mode: DisplayMode) -> ThemeResponse {
    ThemeResponse {
        mode,
        initialized_from: state.theme.source(),
        backend: state.theme.backend().to_string(),
    }
}

/// GET /api/v1/theme
pub async fn handle_get_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let mode = state.theme.mode();
    Json(snapshot(&state, mode))
}

/// PUT /api/v1/theme
pub async fn handle_set_theme(
    State(state): State<AppState>,
    Json(req): Json<SetThemeRequest>,
) -> Json<ThemeResponse> {
    let mode = state.theme.set_mode(req.mode).await;
    Json(snapshot(&state, mode))
}

/// POST /api/v1/theme/toggle
pub async fn handle_toggle_theme(State(state): State<AppState>) -> Json<ThemeResponse> {
    let mode = state.theme.toggle().await;
    Json(snapshot(&state, mode))
}
