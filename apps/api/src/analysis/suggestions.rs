//! Suggestion bucketing by priority, with the tokens each group and card uses.
//!
//! Priority and category tokens carry both light and dark variants in one
//! class string, so they do not depend on the display mode.

use serde::Serialize;

use crate::models::analysis::Suggestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Accepts the backend's `高/中/低` as well as English names.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "高" => Some(Priority::High),
            "中" => Some(Priority::Medium),
            "低" => Some(Priority::Low),
            other => match other.to_ascii_lowercase().as_str() {
                "high" => Some(Priority::High),
                "medium" => Some(Priority::Medium),
                "low" => Some(Priority::Low),
                _ => None,
            },
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "高",
            Priority::Medium => "中",
            Priority::Low => "低",
        }
    }

    pub fn card_token(self) -> &'static str {
        match self {
            Priority::High => "bg-red-50 dark:bg-red-900/20 border-red-200 dark:border-red-800 text-red-700 dark:text-red-400",
            Priority::Medium => "bg-amber-50 dark:bg-amber-900/20 border-amber-200 dark:border-amber-800 text-amber-700 dark:text-amber-400",
            Priority::Low => "bg-blue-50 dark:bg-blue-900/20 border-blue-200 dark:border-blue-800 text-blue-700 dark:text-blue-400",
        }
    }

    pub fn badge_token(self) -> &'static str {
        match self {
            Priority::High => "bg-red-500 text-white",
            Priority::Medium => "bg-amber-500 text-white",
            Priority::Low => "bg-blue-500 text-white",
        }
    }

    pub fn heading_token(self) -> &'static str {
        match self {
            Priority::High => "bg-red-100 dark:bg-red-900/50 text-red-700 dark:text-red-300",
            Priority::Medium => "bg-amber-100 dark:bg-amber-900/50 text-amber-700 dark:text-amber-300",
            Priority::Low => "bg-blue-100 dark:bg-blue-900/50 text-blue-700 dark:text-blue-300",
        }
    }
}

pub const DEFAULT_CATEGORY: &str = "其他";
const DEFAULT_ISSUE: &str = "问题描述";
const NEUTRAL_CATEGORY_TOKEN: &str = "bg-slate-100 dark:bg-slate-700 text-slate-700 dark:text-slate-300";

pub fn category_token(category: &str) -> &'static str {
    match category {
        "项目" => "bg-purple-100 dark:bg-purple-900/50 text-purple-700 dark:text-purple-300",
        "技能" => "bg-indigo-100 dark:bg-indigo-900/50 text-indigo-700 dark:text-indigo-300",
        "内容" => "bg-emerald-100 dark:bg-emerald-900/50 text-emerald-700 dark:text-emerald-300",
        "格式" => "bg-pink-100 dark:bg-pink-900/50 text-pink-700 dark:text-pink-300",
        "结构" => "bg-cyan-100 dark:bg-cyan-900/50 text-cyan-700 dark:text-cyan-300",
        "表达" => "bg-orange-100 dark:bg-orange-900/50 text-orange-700 dark:text-orange-300",
        _ => NEUTRAL_CATEGORY_TOKEN,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionCard {
    pub issue: String,
    pub recommendation: String,
    pub category: String,
    pub category_token: &'static str,
    pub card_token: &'static str,
    pub badge_token: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionGroup {
    pub priority: Priority,
    /// e.g. `高优先级 (2)`
    pub heading: String,
    pub heading_token: &'static str,
    pub items: Vec<SuggestionCard>,
}

fn to_card(s: &Suggestion, priority: Priority) -> SuggestionCard {
    let category = s
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string();
    SuggestionCard {
        issue: s
            .issue
            .clone()
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| DEFAULT_ISSUE.to_string()),
        recommendation: s.recommendation.clone().unwrap_or_default(),
        category_token: category_token(&category),
        category,
        card_token: priority.card_token(),
        badge_token: priority.badge_token(),
    }
}

/// Groups high → medium → low, keeping input order inside each group.
/// Empty groups and unrecognized priorities are omitted.
pub fn group_by_priority(suggestions: &[Suggestion]) -> Vec<SuggestionGroup> {
    Priority::ALL
        .iter()
        .filter_map(|&priority| {
            let items: Vec<SuggestionCard> = suggestions
                .iter()
                .filter(|s| Priority::parse(&s.priority) == Some(priority))
                .map(|s| to_card(s, priority))
                .collect();
            if items.is_empty() {
                return None;
            }
            Some(SuggestionGroup {
                priority,
                heading: format!("{}优先级 ({})", priority.label(), items.len()),
                heading_token: priority.heading_token(),
                items,
            })
        })
        .collect()
}
