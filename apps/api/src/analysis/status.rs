use serde::Serialize;

use crate::models::analysis::{AnalyzeStatus, ResumeAnalysis};

/// Below this overall score the backend result is treated as a failed run.
pub const MIN_VALID_OVERALL_SCORE: f64 = 10.0;

/// Markers the backend leaves in the summary when analysis broke midway.
const ERROR_MARKERS: &[&str] = &[
    "I/O error",
    "分析过程中出现错误",
    "简历分析失败",
    "Remote host terminated",
    "handshake",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum AnalysisState {
    /// Uploaded, not yet picked up.
    Pending,
    /// Analysis running.
    Processing,
    Failed { message: Option<String> },
    Ready,
}

pub fn is_analysis_valid(analysis: &ResumeAnalysis) -> bool {
    let Some(summary) = analysis.summary.as_deref().filter(|s| !s.is_empty()) else {
        return false;
    };
    analysis.overall_score >= MIN_VALID_OVERALL_SCORE
        && !ERROR_MARKERS.iter().any(|m| summary.contains(m))
}

pub fn derive_state(
    status: Option<AnalyzeStatus>,
    analysis: Option<&ResumeAnalysis>,
    error: Option<&str>,
) -> AnalysisState {
    match (status, analysis) {
        (Some(AnalyzeStatus::Processing), _) => return AnalysisState::Processing,
        (Some(AnalyzeStatus::Pending), _) | (None, None) => return AnalysisState::Pending,
        _ => {}
    }

    let valid = analysis.is_some_and(is_analysis_valid);
    if status == Some(AnalyzeStatus::Failed) || !valid {
        let message = error
            .filter(|e| !e.is_empty())
            .map(str::to_string)
            .or_else(|| analysis.and_then(|a| a.summary.clone()))
            .filter(|m| !m.is_empty());
        return AnalysisState::Failed { message };
    }

    AnalysisState::Ready
}
