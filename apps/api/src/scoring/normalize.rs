//! Percentage and cross-scale normalization.
//!
//! Both functions are total: a zero denominator yields `0` instead of an
//! error, and neither clamps its output.

/// Rounds to the nearest integer, ties toward positive infinity.
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Integer percentage of `score` out of `max_score`.
/// Returns 0 when `max_score` is zero or the result is not finite.
pub fn calculate_percentage(score: f64, max_score: f64) -> i64 {
    if max_score == 0.0 {
        return 0;
    }
    let pct = round_half_up((score / max_score) * 100.0);
    if !pct.is_finite() {
        return 0;
    }
    pct as i64
}

/// Rescales `score` earned out of `original_max` to the same ratio out of `target_max`.
///
/// Not clamped: a score above its original maximum normalizes above `target_max`.
/// Callers plotting several series on one scale should take
/// [`scale_upper_bound`] as the axis maximum.
pub fn normalize_score(score: f64, original_max: f64, target_max: f64) -> f64 {
    if original_max == 0.0 {
        return 0.0;
    }
    score * target_max / original_max
}

/// Axis maximum for a shared scale: the larger of the nominal maximum and
/// every normalized value, so no series is clipped.
pub fn scale_upper_bound(nominal_max: f64, normalized: &[f64]) -> f64 {
    normalized.iter().copied().fold(nominal_max, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_basic_cases() {
        assert_eq!(calculate_percentage(0.0, 0.0), 0);
        assert_eq!(calculate_percentage(100.0, 100.0), 100);
        assert_eq!(calculate_percentage(33.0, 100.0), 33);
        assert_eq!(calculate_percentage(32.0, 40.0), 80);
    }

    #[test]
    fn test_percentage_zero_max_is_zero_for_any_score() {
        for s in [-5.0, 0.0, 7.5, 1e9] {
            assert_eq!(calculate_percentage(s, 0.0), 0);
        }
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(calculate_percentage(1.0, 8.0), 13);
        // 2/3 = 66.67%
        assert_eq!(calculate_percentage(2.0, 3.0), 67);
        // 1/3 = 33.33%
        assert_eq!(calculate_percentage(1.0, 3.0), 33);
    }

    #[test]
    fn test_percentage_not_clamped_above_100() {
        assert_eq!(calculate_percentage(30.0, 20.0), 150);
    }

    #[test]
    fn test_percentage_non_finite_is_zero() {
        assert_eq!(calculate_percentage(f64::NAN, 10.0), 0);
        assert_eq!(calculate_percentage(f64::INFINITY, 10.0), 0);
    }

    #[test]
    fn test_normalize_identity_when_scales_match() {
        for (s, m) in [(7.0, 10.0), (12.0, 15.0), (0.0, 40.0), (3.5, 20.0)] {
            let n = normalize_score(s, m, m);
            assert!((n - s).abs() < 1e-9, "normalize({s}, {m}, {m}) = {n}");
        }
    }

    #[test]
    fn test_normalize_is_linear_in_score() {
        for s in [1.0, 7.0, 10.0, 13.3] {
            assert_eq!(
                normalize_score(2.0 * s, 15.0, 40.0),
                2.0 * normalize_score(s, 15.0, 40.0)
            );
        }
    }

    #[test]
    fn test_normalize_zero_original_max_is_zero() {
        assert_eq!(normalize_score(5.0, 0.0, 40.0), 0.0);
        assert_eq!(normalize_score(5.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_normalize_exceeding_original_max_is_not_clamped() {
        let n = normalize_score(25.0, 20.0, 40.0);
        assert!((n - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_upper_bound_never_below_nominal() {
        assert_eq!(scale_upper_bound(40.0, &[32.0, 30.0]), 40.0);
        assert_eq!(scale_upper_bound(40.0, &[50.0, 30.0]), 50.0);
        assert_eq!(scale_upper_bound(40.0, &[]), 40.0);
    }
}
