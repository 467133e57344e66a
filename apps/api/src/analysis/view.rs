use serde::Serialize;

use crate::analysis::rubric::{rubric_dimensions, score_bars, ScoreBar};
use crate::analysis::status::{derive_state, AnalysisState};
use crate::analysis::suggestions::{group_by_priority, SuggestionGroup};
use crate::formatting::format_date_time;
use crate::models::analysis::{AnalyzeStatus, ResumeAnalysis};
use crate::scoring::radar::{build_radar_chart, RadarChart};
use crate::theme::DisplayMode;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub overall_score: f64,
    pub summary: String,
    pub analyzed_at: String,
    pub strengths: Vec<String>,
    pub radar: RadarChart,
    pub score_bars: Vec<ScoreBar>,
    pub suggestion_groups: Vec<SuggestionGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    #[serde(flatten)]
    pub state: AnalysisState,
    pub display_mode: DisplayMode,
    /// Present only when `state` is ready.
    pub report: Option<AnalysisReport>,
}

pub fn build_report(analysis: &ResumeAnalysis) -> AnalysisReport {
    AnalysisReport {
        overall_score: analysis.overall_score,
        summary: analysis.summary.clone().unwrap_or_default(),
        analyzed_at: format_date_time(analysis.analyzed_at.as_deref().unwrap_or_default()),
        strengths: analysis.strengths.clone(),
        radar: build_radar_chart(&rubric_dimensions(analysis)),
        score_bars: score_bars(analysis),
        suggestion_groups: group_by_priority(&analysis.suggestions),
    }
}

pub fn build_analysis_view(
    status: Option<AnalyzeStatus>,
    analysis: Option<&ResumeAnalysis>,
    error: Option<&str>,
    mode: DisplayMode,
) -> AnalysisView {
    let state = derive_state(status, analysis, error);
    let report = match (&state, analysis) {
        (AnalysisState::Ready, Some(a)) => Some(build_report(a)),
        _ => None,
    };
    AnalysisView {
        state,
        display_mode: mode,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::Suggestion;

    fn ready_analysis() -> ResumeAnalysis {
        ResumeAnalysis {
            overall_score: 76.0,
            project_score: Some(32.0),
            skill_match_score: Some(15.0),
            content_score: Some(10.0),
            structure_score: Some(12.0),
            expression_score: Some(7.0),
            summary: Some("Solid backend experience".to_string()),
            strengths: vec!["Rust".to_string()],
            suggestions: vec![Suggestion {
                priority: "中".to_string(),
                category: Some("项目".to_string()),
                issue: Some("No metrics".to_string()),
                recommendation: Some("Quantify impact".to_string()),
            }],
            analyzed_at: Some("2024-03-05T14:30:00".to_string()),
        }
    }

    #[test]
    fn test_ready_view_has_report() {
        let a = ready_analysis();
        let view = build_analysis_view(
            Some(AnalyzeStatus::Completed),
            Some(&a),
            None,
            DisplayMode::Light,
        );
        assert_eq!(view.state, AnalysisState::Ready);
        let report = view.report.expect("report");
        assert_eq!(report.analyzed_at, "2024/03/05 14:30");
        assert_eq!(report.radar.scale_max, 40.0);
        assert_eq!(report.radar.points.len(), 5);
        assert_eq!(report.suggestion_groups.len(), 1);
        assert_eq!(report.overall_score, 76.0);
    }

    #[test]
    fn test_score_bars_use_dimension_colours() {
        let report = build_report(&ready_analysis());
        // project 80% and content 67% land in different tiers but keep their own colours
        assert_eq!(report.score_bars[0].token, "bg-purple-500");
        assert_eq!(report.score_bars[2].token, "bg-emerald-500");
    }

    #[test]
    fn test_report_has_no_overall_tier_token() {
        let json = serde_json::to_value(build_report(&ready_analysis())).unwrap();
        assert!(json.get("overall_token").is_none());
        assert_eq!(json["score_bars"][4]["token"], "bg-orange-500");
    }

    #[test]
    fn test_non_ready_views_have_no_report() {
        let view = build_analysis_view(
            Some(AnalyzeStatus::Processing),
            None,
            None,
            DisplayMode::Light,
        );
        assert_eq!(view.state, AnalysisState::Processing);
        assert!(view.report.is_none());
    }

    #[test]
    fn test_view_serializes_state_tag() {
        let view = build_analysis_view(
            Some(AnalyzeStatus::Failed),
            None,
            Some("model unavailable"),
            DisplayMode::Light,
        );
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["state"], "failed");
        assert_eq!(json["message"], "model unavailable");
        assert_eq!(json["display_mode"], "light");
        assert!(json["report"].is_null());
    }
}
