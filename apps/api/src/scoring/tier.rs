//! Three-tier score classification and the presentation tokens each tier maps to.
//!
//! The display mode is always an explicit argument. Callers resolve it once at
//! the request boundary (see `theme::ThemeSettings`) and pass it down.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::theme::DisplayMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    High,
    Mid,
    Low,
}

/// Ordered cut points: `high_cut >= mid_cut`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPair {
    pub high_cut: f64,
    pub mid_cut: f64,
}

impl ThresholdPair {
    pub const fn new_unchecked(high_cut: f64, mid_cut: f64) -> Self {
        Self { high_cut, mid_cut }
    }

    /// Validates a pair that came from outside the process.
    pub fn new(high_cut: f64, mid_cut: f64) -> Result<Self, AppError> {
        if !high_cut.is_finite() || !mid_cut.is_finite() {
            return Err(AppError::Validation(
                "threshold cut points must be finite numbers".to_string(),
            ));
        }
        if high_cut < mid_cut {
            return Err(AppError::Validation(format!(
                "high cut ({high_cut}) must be >= mid cut ({mid_cut})"
            )));
        }
        Ok(Self { high_cut, mid_cut })
    }
}

/// Which set of tokens a classification is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenFamily {
    /// Tinted background + text, e.g. score circles.
    Color,
    /// Solid badges.
    Badge,
    /// Progress bar fill. Same tokens in every display mode.
    Progress,
}

impl TokenFamily {
    pub fn default_thresholds(self) -> ThresholdPair {
        match self {
            TokenFamily::Color | TokenFamily::Progress => ThresholdPair::new_unchecked(80.0, 70.0),
            TokenFamily::Badge => ThresholdPair::new_unchecked(80.0, 60.0),
        }
    }

    pub fn is_mode_dependent(self) -> bool {
        !matches!(self, TokenFamily::Progress)
    }
}

const COLOR_LIGHT: [&str; 3] = [
    "bg-emerald-100 text-emerald-600",
    "bg-amber-100 text-amber-600",
    "bg-red-100 text-red-600",
];

// Color and badge share the muted dark palette.
const MUTED_DARK: [&str; 3] = [
    "bg-emerald-500/20 text-emerald-400",
    "bg-yellow-500/20 text-yellow-400",
    "bg-red-500/20 text-red-400",
];

const BADGE_LIGHT: [&str; 3] = [
    "bg-emerald-500 text-white",
    "bg-amber-500 text-white",
    "bg-red-500 text-white",
];

const PROGRESS: [&str; 3] = ["bg-emerald-500", "bg-amber-500", "bg-red-500"];

/// Classifies with inclusive lower bounds: `>= high_cut` is high, `>= mid_cut` is mid.
pub fn classify_tier(score: f64, thresholds: ThresholdPair) -> Tier {
    if score >= thresholds.high_cut {
        Tier::High
    } else if score >= thresholds.mid_cut {
        Tier::Mid
    } else {
        Tier::Low
    }
}

pub fn presentation_token(family: TokenFamily, tier: Tier, mode: DisplayMode) -> &'static str {
    let table = match (family, mode) {
        (TokenFamily::Progress, _) => &PROGRESS,
        (TokenFamily::Color, DisplayMode::Light) => &COLOR_LIGHT,
        (TokenFamily::Badge, DisplayMode::Light) => &BADGE_LIGHT,
        (TokenFamily::Color | TokenFamily::Badge, DisplayMode::Dark) => &MUTED_DARK,
    };
    match tier {
        Tier::High => table[0],
        Tier::Mid => table[1],
        Tier::Low => table[2],
    }
}

/// Classifies `score` and looks up its token. `None` thresholds use the family defaults.
pub fn score_token(
    family: TokenFamily,
    score: f64,
    thresholds: Option<ThresholdPair>,
    mode: DisplayMode,
) -> &'static str {
    let thresholds = thresholds.unwrap_or_else(|| family.default_thresholds());
    presentation_token(family, classify_tier(score, thresholds), mode)
}
