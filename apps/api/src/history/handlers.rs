use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::history::interviews::{
    build_interview_panel, is_valid_question_count, InterviewPanelView, DEFAULT_QUESTION_COUNT,
    QUESTION_COUNT_OPTIONS,
};
use crate::history::resumes::{build_resume_rows, ResumeRow};
use crate::models::history::{InterviewItem, ResumeListItem};
use crate::state::AppState;
use crate::theme::DisplayMode;

#[derive(Debug, Deserialize)]
pub struct ResumeHistoryRequest {
    pub resumes: Vec<ResumeListItem>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ResumeHistoryResponse {
    pub total: usize,
    pub rows: Vec<ResumeRow>,
}

#[derive(Debug, Deserialize)]
pub struct InterviewHistoryRequest {
    pub interviews: Vec<InterviewItem>,
    pub display_mode: Option<DisplayMode>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionCountQuery {
    pub selected: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct QuestionCountResponse {
    pub options: Vec<u32>,
    pub default: u32,
    pub selected: u32,
}

/// POST /api/v1/history/resumes
pub async fn handle_resume_history(
    Json(req): Json<ResumeHistoryRequest>,
) -> Json<ResumeHistoryResponse> {
    let rows = build_resume_rows(&req.resumes, req.search.as_deref());
    Json(ResumeHistoryResponse {
        total: req.resumes.len(),
        rows,
    })
}

/// POST /api/v1/history/interviews
pub async fn handle_interview_history(
    State(state): State<AppState>,
    Json(req): Json<InterviewHistoryRequest>,
) -> Json<InterviewPanelView> {
    let mode = state.theme.resolve(req.display_mode);
    Json(build_interview_panel(&req.interviews, mode))
}

/// GET /api/v1/interviews/question-counts
pub async fn handle_question_counts(
    Query(params): Query<QuestionCountQuery>,
) -> Result<Json<QuestionCountResponse>, AppError> {
    let selected = params.selected.unwrap_or(DEFAULT_QUESTION_COUNT);
    if !is_valid_question_count(selected) {
        return Err(AppError::Validation(format!(
            "question count {selected} is not one of {QUESTION_COUNT_OPTIONS:?}"
        )));
    }
    Ok(Json(QuestionCountResponse {
        options: QUESTION_COUNT_OPTIONS.to_vec(),
        default: DEFAULT_QUESTION_COUNT,
        selected,
    }))
}
