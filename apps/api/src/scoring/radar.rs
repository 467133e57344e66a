//! Radar chart derivation: plots differently weighted rubric dimensions on one
//! radial scale by rescaling every dimension to the largest full mark.

use serde::{Deserialize, Serialize};

use crate::scoring::normalize::{calculate_percentage, normalize_score, scale_upper_bound};

/// Radial domain used when there is nothing to plot.
pub const DEFAULT_RADAR_SCALE_MAX: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RubricDimension {
    pub subject: String,
    pub score: f64,
    pub full_mark: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub subject: String,
    /// Score rescaled to the chart's shared maximum.
    pub score: f64,
    pub original_score: f64,
    pub original_full_mark: f64,
    pub percentage: i64,
    /// Tooltip text, e.g. `32/40 (80%)`.
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    pub scale_max: f64,
    pub points: Vec<RadarPoint>,
}

pub fn build_radar_chart(dimensions: &[RubricDimension]) -> RadarChart {
    if dimensions.is_empty() {
        return RadarChart {
            scale_max: DEFAULT_RADAR_SCALE_MAX,
            points: vec![],
        };
    }

    let shared_max = dimensions
        .iter()
        .map(|d| d.full_mark)
        .fold(f64::NEG_INFINITY, f64::max);

    let normalized: Vec<f64> = dimensions
        .iter()
        .map(|d| normalize_score(d.score, d.full_mark, shared_max))
        .collect();

    let points = dimensions
        .iter()
        .zip(&normalized)
        .map(|(d, &score)| {
            let percentage = calculate_percentage(d.score, d.full_mark);
            RadarPoint {
                subject: d.subject.clone(),
                score,
                original_score: d.score,
                original_full_mark: d.full_mark,
                percentage,
                label: format!("{}/{} ({percentage}%)", d.score, d.full_mark),
            }
        })
        .collect();

    RadarChart {
        scale_max: scale_upper_bound(shared_max, &normalized),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dim(subject: &str, score: f64, full_mark: f64) -> RubricDimension {
        RubricDimension {
            subject: subject.to_string(),
            score,
            full_mark,
        }
    }

    #[test]
    fn test_five_dimension_rubric_on_shared_scale() {
        let dims = vec![
            dim("project", 32.0, 40.0),
            dim("skill", 15.0, 20.0),
            dim("content", 10.0, 15.0),
            dim("structure", 12.0, 15.0),
            dim("expression", 7.0, 10.0),
        ];
        let chart = build_radar_chart(&dims);

        let expected = [32.0, 30.0, 26.67, 32.0, 28.0];
        for (point, want) in chart.points.iter().zip(expected) {
            assert!(
                (point.score - want).abs() < 0.01,
                "{}: got {}, want {want}",
                point.subject,
                point.score
            );
        }
        assert_eq!(chart.scale_max, 40.0);
    }

    #[test]
    fn test_scale_grows_when_a_score_exceeds_its_max() {
        let dims = vec![dim("project", 20.0, 40.0), dim("skill", 25.0, 20.0)];
        let chart = build_radar_chart(&dims);
        assert!((chart.points[1].score - 50.0).abs() < 1e-9);
        assert!((chart.scale_max - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_uses_default_domain() {
        let chart = build_radar_chart(&[]);
        assert!(chart.points.is_empty());
        assert_eq!(chart.scale_max, DEFAULT_RADAR_SCALE_MAX);
    }

    #[test]
    fn test_point_keeps_original_values_and_label() {
        let chart = build_radar_chart(&[dim("project", 32.0, 40.0)]);
        let p = &chart.points[0];
        assert_eq!(p.original_score, 32.0);
        assert_eq!(p.original_full_mark, 40.0);
        assert_eq!(p.percentage, 80);
        assert_eq!(p.label, "32/40 (80%)");
    }

    #[test]
    fn test_zero_full_mark_dimension_plots_at_zero() {
        let chart = build_radar_chart(&[dim("a", 5.0, 0.0), dim("b", 5.0, 10.0)]);
        assert_eq!(chart.points[0].score, 0.0);
        assert_eq!(chart.points[0].percentage, 0);
        assert_eq!(chart.scale_max, 10.0);
    }
}
