//! Rating curve.
//!
//! Monotonically increasing, convex above the elite threshold: an identical
//! linear step is worth disproportionately more at elite ratings than at
//! mediocre ones.
//!
//! Formula: score = r                              for r <= threshold
//!          score = r + gain * (r - threshold)^2   for r >  threshold

use crate::domain::scoring_config::ScoringConfig;

pub fn rating_score(rating: f64, config: &ScoringConfig) -> f64 {
    if rating > config.elite_rating_threshold {
        let excess = rating - config.elite_rating_threshold;
        rating + config.elite_curve_gain * excess * excess
    } else {
        rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_below_threshold() {
        let config = ScoringConfig::default();
        assert_eq!(rating_score(60.0, &config), 60.0);
        assert_eq!(rating_score(85.0, &config), 85.0);
    }

    #[test]
    fn convex_above_threshold() {
        let config = ScoringConfig::default();
        // 97 -> 97 + 0.35 * 12^2 = 147.4
        assert!((rating_score(97.0, &config) - 147.4).abs() < 1e-9);
    }

    #[test]
    fn monotonically_increasing() {
        let config = ScoringConfig::default();
        let mut prev = rating_score(0.0, &config);
        for r in 1..=99 {
            let score = rating_score(r as f64, &config);
            assert!(score > prev, "score decreased at rating {r}");
            prev = score;
        }
    }

    #[test]
    fn elite_step_worth_more_than_mediocre_step() {
        let config = ScoringConfig::default();
        let elite_step = rating_score(96.0, &config) - rating_score(95.0, &config);
        let mediocre_step = rating_score(71.0, &config) - rating_score(70.0, &config);
        assert!(elite_step > mediocre_step);
    }
}
