use serde::Serialize;

use crate::models::analysis::ResumeAnalysis;
use crate::scoring::normalize::calculate_percentage;
use crate::scoring::radar::RubricDimension;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RubricKey {
    Expression,
    SkillMatch,
    Content,
    Structure,
    Project,
}

impl RubricKey {
    pub fn full_mark(self) -> f64 {
        match self {
            RubricKey::Project => 40.0,
            RubricKey::SkillMatch => 20.0,
            RubricKey::Content => 15.0,
            RubricKey::Structure => 15.0,
            RubricKey::Expression => 10.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RubricKey::Expression => "表达专业性",
            RubricKey::SkillMatch => "技能匹配",
            RubricKey::Content => "内容完整性",
            RubricKey::Structure => "结构清晰度",
            RubricKey::Project => "项目经验",
        }
    }

    /// Each dimension's bar keeps one colour whatever its score.
    pub fn bar_token(self) -> &'static str {
        match self {
            RubricKey::Project => "bg-purple-500",
            RubricKey::SkillMatch => "bg-blue-500",
            RubricKey::Content => "bg-emerald-500",
            RubricKey::Structure => "bg-cyan-500",
            RubricKey::Expression => "bg-orange-500",
        }
    }

    fn score(self, analysis: &ResumeAnalysis) -> f64 {
        let raw = match self {
            RubricKey::Expression => analysis.expression_score,
            RubricKey::SkillMatch => analysis.skill_match_score,
            RubricKey::Content => analysis.content_score,
            RubricKey::Structure => analysis.structure_score,
            RubricKey::Project => analysis.project_score,
        };
        raw.unwrap_or(0.0)
    }
}

/// Radar display order.
pub const RADAR_ORDER: [RubricKey; 5] = [
    RubricKey::Expression,
    RubricKey::SkillMatch,
    RubricKey::Content,
    RubricKey::Structure,
    RubricKey::Project,
];

/// Score-bar display order (heaviest dimension first).
pub const BAR_ORDER: [RubricKey; 5] = [
    RubricKey::Project,
    RubricKey::SkillMatch,
    RubricKey::Content,
    RubricKey::Structure,
    RubricKey::Expression,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBar {
    pub label: String,
    pub score: f64,
    pub max_score: f64,
    /// Fill width in percent.
    pub percentage: i64,
    pub token: &'static str,
}

pub fn rubric_dimensions(analysis: &ResumeAnalysis) -> Vec<RubricDimension> {
    RADAR_ORDER
        .iter()
        .map(|&key| RubricDimension {
            subject: key.label().to_string(),
            score: key.score(analysis),
            full_mark: key.full_mark(),
        })
        .collect()
}

pub fn score_bars(analysis: &ResumeAnalysis) -> Vec<ScoreBar> {
    BAR_ORDER
        .iter()
        .map(|&key| {
            let score = key.score(analysis);
            ScoreBar {
                label: key.label().to_string(),
                score,
                max_score: key.full_mark(),
                percentage: calculate_percentage(score, key.full_mark()),
                token: key.bar_token(),
            }
        })
        .collect()
}
