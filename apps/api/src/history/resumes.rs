use serde::Serialize;

use crate::formatting::format_date_only;
use crate::models::history::ResumeListItem;
use crate::scoring::tier::{score_token, ThresholdPair, TokenFamily};
use crate::theme::DisplayMode;

/// The history table's score bar uses a wider mid band than the default progress pair.
pub const HISTORY_SCORE_THRESHOLDS: ThresholdPair = ThresholdPair::new_unchecked(80.0, 60.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStatus {
    Completed,
    Awaiting,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreCell {
    pub score: f64,
    pub token: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResumeRow {
    pub id: i64,
    pub filename: String,
    pub uploaded_on: String,
    /// `None` renders as `-`.
    pub score: Option<ScoreCell>,
    pub interview_status: InterviewStatus,
}

/// Case-insensitive substring match. The term is used as typed, spaces included.
pub fn matches_search(item: &ResumeListItem, search: &str) -> bool {
    item.filename.to_lowercase().contains(&search.to_lowercase())
}

pub fn build_resume_rows(items: &[ResumeListItem], search: Option<&str>) -> Vec<ResumeRow> {
    let search = search.unwrap_or_default();
    items
        .iter()
        .filter(|item| matches_search(item, search))
        .map(|item| ResumeRow {
            id: item.id,
            filename: item.filename.clone(),
            uploaded_on: format_date_only(&item.uploaded_at),
            score: item.latest_score.map(|score| ScoreCell {
                score,
                token: score_token(
                    TokenFamily::Progress,
                    score,
                    Some(HISTORY_SCORE_THRESHOLDS),
                    // progress tokens are the same in both modes
                    DisplayMode::Light,
                ),
            }),
            interview_status: if item.interview_count > 0 {
                InterviewStatus::Completed
            } else {
                InterviewStatus::Awaiting
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, filename: &str, score: Option<f64>, interviews: u32) -> ResumeListItem {
        ResumeListItem {
            id,
            filename: filename.to_string(),
            uploaded_at: "2024-01-05T08:00:00".to_string(),
            latest_score: score,
            interview_count: interviews,
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let items = vec![
            item(1, "Alice_Backend.pdf", None, 0),
            item(2, "bob-frontend.docx", None, 0),
        ];
        let rows = build_resume_rows(&items, Some("BACKEND"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, 1);
    }

    #[test]
    fn test_search_term_is_not_trimmed() {
        let items = vec![item(1, "backend.pdf", None, 0), item(2, "senior backend.pdf", None, 0)];
        let ids: Vec<i64> = build_resume_rows(&items, Some(" backend"))
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![2]);
        assert!(build_resume_rows(&items, Some("backend ")).is_empty());
    }

    #[test]
    fn test_no_search_keeps_everything_in_order() {
        let items = vec![item(3, "a.pdf", None, 0), item(1, "b.pdf", None, 0)];
        let ids: Vec<i64> = build_resume_rows(&items, None).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_score_tokens_use_history_thresholds() {
        let items = vec![
            item(1, "a.pdf", Some(85.0), 0),
            item(2, "b.pdf", Some(65.0), 0),
            item(3, "c.pdf", Some(40.0), 0),
        ];
        let rows = build_resume_rows(&items, None);
        let tokens: Vec<&str> = rows.iter().map(|r| r.score.as_ref().unwrap().token).collect();
        assert_eq!(tokens, vec!["bg-emerald-500", "bg-amber-500", "bg-red-500"]);
    }

    #[test]
    fn test_row_fields() {
        let rows = build_resume_rows(&[item(7, "cv.pdf", None, 2)], None);
        assert_eq!(rows[0].uploaded_on, "2024/01/05");
        assert!(rows[0].score.is_none());
        assert_eq!(rows[0].interview_status, InterviewStatus::Completed);

        let rows = build_resume_rows(&[item(8, "cv.pdf", None, 0)], None);
        assert_eq!(rows[0].interview_status, InterviewStatus::Awaiting);
    }
}
