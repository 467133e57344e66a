use serde::Serialize;

use crate::formatting::format_date_only;
use crate::models::history::InterviewItem;
use crate::scoring::tier::{score_token, ThresholdPair, TokenFamily};
use crate::theme::DisplayMode;

/// Interview score circles are stricter than the default color pair.
pub const INTERVIEW_SCORE_THRESHOLDS: ThresholdPair = ThresholdPair::new_unchecked(85.0, 70.0);

const UNSCORED_TOKEN: &str = "bg-slate-100 dark:bg-slate-600 text-slate-400";

/// Question counts offered when configuring a new interview.
pub const QUESTION_COUNT_OPTIONS: [u32; 5] = [6, 8, 10, 12, 15];
pub const DEFAULT_QUESTION_COUNT: u32 = 8;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// x-axis label (interview date).
    pub name: String,
    pub score: f64,
    /// 1-based sequence number, oldest = 1.
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewCard {
    pub session_id: String,
    pub title: String,
    pub date: String,
    pub total_questions: u32,
    pub score_label: String,
    pub score_token: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewPanelView {
    pub display_mode: DisplayMode,
    pub trend: Vec<TrendPoint>,
    pub cards: Vec<InterviewCard>,
}

/// `interviews` is newest first; the trend comes back oldest first and skips
/// unscored sessions.
pub fn build_trend(interviews: &[InterviewItem]) -> Vec<TrendPoint> {
    let total = interviews.len();
    let mut points: Vec<TrendPoint> = interviews
        .iter()
        .enumerate()
        .filter_map(|(pos, item)| {
            item.overall_score.map(|score| TrendPoint {
                name: format_date_only(&item.created_at),
                score,
                index: total - pos,
            })
        })
        .collect();
    points.reverse();
    points
}

pub fn build_cards(interviews: &[InterviewItem], mode: DisplayMode) -> Vec<InterviewCard> {
    let total = interviews.len();
    interviews
        .iter()
        .enumerate()
        .map(|(pos, item)| {
            let (score_label, token) = match item.overall_score {
                Some(score) => (
                    score.to_string(),
                    score_token(
                        TokenFamily::Color,
                        score,
                        Some(INTERVIEW_SCORE_THRESHOLDS),
                        mode,
                    ),
                ),
                None => ("-".to_string(), UNSCORED_TOKEN),
            };
            InterviewCard {
                session_id: item.session_id.clone(),
                title: format!("模拟面试 #{}", total - pos),
                date: format_date_only(&item.created_at),
                total_questions: item.total_questions,
                score_label,
                score_token: token,
            }
        })
        .collect()
}

pub fn build_interview_panel(interviews: &[InterviewItem], mode: DisplayMode) -> InterviewPanelView {
    InterviewPanelView {
        display_mode: mode,
        trend: build_trend(interviews),
        cards: build_cards(interviews, mode),
    }
}

pub fn is_valid_question_count(count: u32) -> bool {
    QUESTION_COUNT_OPTIONS.contains(&count)
}
