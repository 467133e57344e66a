use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalyzeStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Suggestion {
    /// `高` / `中` / `低`, as produced by the analysis backend.
    #[serde(default)]
    pub priority: String,
    pub category: Option<String>,
    pub issue: Option<String>,
    pub recommendation: Option<String>,
}

/// Rubric scores are out of 40 / 20 / 15 / 15 / 10; missing scores count as 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeAnalysis {
    pub overall_score: f64,
    pub project_score: Option<f64>,
    pub skill_match_score: Option<f64>,
    pub content_score: Option<f64>,
    pub structure_score: Option<f64>,
    pub expression_score: Option<f64>,
    pub summary: Option<String>,
    pub strengths: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub analyzed_at: Option<String>,
}
