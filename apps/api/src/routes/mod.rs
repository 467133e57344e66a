pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::history::handlers as history;
use crate::scoring::handlers as scoring;
use crate::state::AppState;
use crate::theme::handlers as theme;
use crate::uploads;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scores
        .route("/api/v1/scores/percentage", post(scoring::handle_percentage))
        .route("/api/v1/scores/normalize", post(scoring::handle_normalize))
        .route("/api/v1/scores/tier", post(scoring::handle_tier))
        .route("/api/v1/scores/radar", post(scoring::handle_radar))
        // Views
        .route("/api/v1/analysis/view", post(analysis::handle_analysis_view))
        .route("/api/v1/history/resumes", post(history::handle_resume_history))
        .route(
            "/api/v1/history/interviews",
            post(history::handle_interview_history),
        )
        .route(
            "/api/v1/interviews/question-counts",
            get(history::handle_question_counts),
        )
        .route("/api/v1/uploads/preview", post(uploads::handle_upload_preview))
        // Display mode
        .route(
            "/api/v1/theme",
            get(theme::handle_get_theme).put(theme::handle_set_theme),
        )
        .route("/api/v1/theme/toggle", post(theme::handle_toggle_theme))
        .with_state(state)
}
