use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::view::{build_analysis_view, AnalysisView};
use crate::models::analysis::{AnalyzeStatus, ResumeAnalysis};
use crate::state::AppState;
use crate::theme::DisplayMode;

#[derive(Debug, Deserialize)]
pub struct AnalysisViewRequest {
    pub status: Option<AnalyzeStatus>,
    pub analysis: Option<ResumeAnalysis>,
    pub error: Option<String>,
    pub display_mode: Option<DisplayMode>,
}

/// POST /api/v1/analysis/view
pub async fn handle_analysis_view(
    State(state): State<AppState>,
    Json(req): Json<AnalysisViewRequest>,
) -> Json<AnalysisView> {
    let mode = state.theme.resolve(req.display_mode);
    Json(build_analysis_view(
        req.status,
        req.analysis.as_ref(),
        req.error.as_deref(),
        mode,
    ))
}
