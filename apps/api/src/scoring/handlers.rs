use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scoring::normalize::{calculate_percentage, normalize_score};
use crate::scoring::radar::{build_radar_chart, RadarChart, RubricDimension};
use crate::scoring::tier::{classify_tier, presentation_token, ThresholdPair, Tier, TokenFamily};
use crate::state::AppState;
use crate::theme::DisplayMode;

#[derive(Debug, Deserialize)]
pub struct PercentageRequest {
    pub score: f64,
    pub max_score: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PercentageResponse {
    pub percentage: i64,
}

#[derive(Debug, Deserialize)]
pub struct NormalizeRequest {
    pub score: f64,
    pub original_max: f64,
    pub target_max: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NormalizeResponse {
    pub normalized: f64,
}

#[derive(Debug, Deserialize)]
pub struct TierRequest {
    pub score: f64,
    pub family: TokenFamily,
    /// `[high_cut, mid_cut]`; family defaults when absent.
    pub thresholds: Option<[f64; 2]>,
    pub display_mode: Option<DisplayMode>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TierResponse {
    pub tier: Tier,
    pub token: String,
    pub thresholds: ThresholdPair,
    pub display_mode: DisplayMode,
    /// False for families whose token ignores the display mode.
    pub mode_dependent: bool,
}

#[derive(Debug, Deserialize)]
pub struct RadarRequest {
    pub dimensions: Vec<RubricDimension>,
}

/// POST /api/v1/scores/percentage
pub async fn handle_percentage(Json(req): Json<PercentageRequest>) -> Json<PercentageResponse> {
    Json(PercentageResponse {
        percentage: calculate_percentage(req.score, req.max_score),
    })
}

/// POST /api/v1/scores/normalize
pub async fn handle_normalize(Json(req): Json<NormalizeRequest>) -> Json<NormalizeResponse> {
    Json(NormalizeResponse {
        normalized: normalize_score(req.score, req.original_max, req.target_max),
    })
}

/// POST /api/v1/scores/tier
pub async fn handle_tier(
    State(state): State<AppState>,
    Json(req): Json<TierRequest>,
) -> Result<Json<TierResponse>, AppError> {
    let thresholds = match req.thresholds {
        Some([high, mid]) => ThresholdPair::new(high, mid)?,
        None => req.family.default_thresholds(),
    };
    let mode = state.theme.resolve(req.display_mode);
    let tier = classify_tier(req.score, thresholds);

    Ok(Json(TierResponse {
        tier,
        token: presentation_token(req.family, tier, mode).to_string(),
        thresholds,
        display_mode: mode,
        mode_dependent: req.family.is_mode_dependent(),
    }))
}

/// POST /api/v1/scores/radar
pub async fn handle_radar(Json(req): Json<RadarRequest>) -> Json<RadarChart> {
    Json(build_radar_chart(&req.dimensions))
}
