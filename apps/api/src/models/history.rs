use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeListItem {
    pub id: i64,
    pub filename: String,
    #[serde(default)]
    pub uploaded_at: String,
    pub latest_score: Option<f64>,
    #[serde(default)]
    pub interview_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewItem {
    pub session_id: String,
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub created_at: String,
}
