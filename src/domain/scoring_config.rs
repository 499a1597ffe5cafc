//! Scoring model constants.
//!
//! Every tunable in the valuation pipeline lives here so tuning never
//! touches scoring logic. Defaults are the shipped model; an INI file can
//! override individual keys through [`ScoringConfig::from_config`]
//! (`[scoring]` and `[fairness]` sections).

use crate::domain::error::PuckvalError;
use crate::domain::profile::{Position, PotentialTier};
use crate::ports::config_port::ConfigPort;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    // Rating curve: linear base plus a convex bonus above the threshold.
    pub elite_rating_threshold: f64,
    pub elite_curve_gain: f64,

    // Age curve: plateau at 1.0 across the prime window, ramp below,
    // decline above. Goaltenders peak later than skaters.
    pub skater_prime_start: u8,
    pub skater_prime_end: u8,
    pub goalie_prime_start: u8,
    pub goalie_prime_end: u8,
    pub youth_ramp_per_year: f64,
    pub decline_per_year: f64,
    pub age_factor_floor: f64,

    // Rating-equivalents for each potential tier.
    pub tier_rating_bottom6: f64,
    pub tier_rating_top6: f64,
    pub tier_rating_top3: f64,
    pub tier_rating_elite: f64,
    pub tier_rating_generational: f64,

    // Contract economics, dollar figures in millions.
    pub league_min_aav: f64,
    pub replacement_rating: f64,
    pub aav_per_rating_point: f64,
    pub points_per_million_surplus: f64,
    pub max_term_years: u32,
    pub rights_confidence: f64,

    // Leadership and accolades.
    pub captain_bonus: f64,
    pub alternate_bonus: f64,
    pub award_bonus: f64,
    pub ring_base: f64,
    pub ring_decay: f64,

    // Positional scarcity multipliers.
    pub scarcity_center: f64,
    pub scarcity_winger: f64,
    pub scarcity_defenseman: f64,
    pub scarcity_goaltender: f64,

    // Concentration adjustment for trade sides.
    pub depth_discount: f64,
    pub max_depth_discount: f64,

    // Fairness tier boundaries, percent of the larger adjusted value.
    pub fair_pct: f64,
    pub slight_pct: f64,
    pub favors_pct: f64,
    pub even_epsilon: f64,

    // Balance display tolerance in percentage points.
    pub balance_tolerance_points: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            elite_rating_threshold: 85.0,
            elite_curve_gain: 0.35,

            skater_prime_start: 24,
            skater_prime_end: 29,
            goalie_prime_start: 26,
            goalie_prime_end: 31,
            youth_ramp_per_year: 0.03,
            decline_per_year: 0.04,
            age_factor_floor: 0.5,

            tier_rating_bottom6: 72.0,
            tier_rating_top6: 82.0,
            tier_rating_top3: 90.0,
            tier_rating_elite: 95.0,
            tier_rating_generational: 99.0,

            league_min_aav: 0.775,
            replacement_rating: 70.0,
            aav_per_rating_point: 0.45,
            points_per_million_surplus: 2.0,
            max_term_years: 8,
            rights_confidence: 0.5,

            captain_bonus: 12.0,
            alternate_bonus: 6.0,
            award_bonus: 8.0,
            ring_base: 5.0,
            ring_decay: 0.6,

            scarcity_center: 1.12,
            scarcity_winger: 1.0,
            scarcity_defenseman: 1.05,
            scarcity_goaltender: 1.15,

            depth_discount: 0.25,
            max_depth_discount: 0.35,

            fair_pct: 5.0,
            slight_pct: 15.0,
            favors_pct: 30.0,
            even_epsilon: 1e-6,

            balance_tolerance_points: 20,
        }
    }
}

impl ScoringConfig {
    /// Prime window for the position, inclusive on both ends.
    pub fn prime_window(&self, position: Position) -> (u8, u8) {
        match position {
            Position::Goaltender => (self.goalie_prime_start, self.goalie_prime_end),
            Position::Center | Position::Winger | Position::Defenseman => {
                (self.skater_prime_start, self.skater_prime_end)
            }
        }
    }

    pub fn tier_rating(&self, tier: PotentialTier) -> f64 {
        match tier {
            PotentialTier::Bottom6 => self.tier_rating_bottom6,
            PotentialTier::Top6 => self.tier_rating_top6,
            PotentialTier::Top3 => self.tier_rating_top3,
            PotentialTier::Elite => self.tier_rating_elite,
            PotentialTier::Generational => self.tier_rating_generational,
        }
    }

    /// Overlay INI overrides on the defaults and validate the result.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, PuckvalError> {
        let d = Self::default();
        let loaded = Self {
            elite_rating_threshold: config.get_double(
                "scoring",
                "elite_rating_threshold",
                d.elite_rating_threshold,
            ),
            elite_curve_gain: config.get_double("scoring", "elite_curve_gain", d.elite_curve_gain),

            skater_prime_start: config.get_int(
                "scoring",
                "skater_prime_start",
                d.skater_prime_start as i64,
            ) as u8,
            skater_prime_end: config.get_int(
                "scoring",
                "skater_prime_end",
                d.skater_prime_end as i64,
            ) as u8,
            goalie_prime_start: config.get_int(
                "scoring",
                "goalie_prime_start",
                d.goalie_prime_start as i64,
            ) as u8,
            goalie_prime_end: config.get_int(
                "scoring",
                "goalie_prime_end",
                d.goalie_prime_end as i64,
            ) as u8,
            youth_ramp_per_year: config.get_double(
                "scoring",
                "youth_ramp_per_year",
                d.youth_ramp_per_year,
            ),
            decline_per_year: config.get_double("scoring", "decline_per_year", d.decline_per_year),
            age_factor_floor: config.get_double("scoring", "age_factor_floor", d.age_factor_floor),

            tier_rating_bottom6: config.get_double(
                "scoring",
                "tier_rating_bottom6",
                d.tier_rating_bottom6,
            ),
            tier_rating_top6: config.get_double("scoring", "tier_rating_top6", d.tier_rating_top6),
            tier_rating_top3: config.get_double("scoring", "tier_rating_top3", d.tier_rating_top3),
            tier_rating_elite: config.get_double(
                "scoring",
                "tier_rating_elite",
                d.tier_rating_elite,
            ),
            tier_rating_generational: config.get_double(
                "scoring",
                "tier_rating_generational",
                d.tier_rating_generational,
            ),

            league_min_aav: config.get_double("scoring", "league_min_aav", d.league_min_aav),
            replacement_rating: config.get_double(
                "scoring",
                "replacement_rating",
                d.replacement_rating,
            ),
            aav_per_rating_point: config.get_double(
                "scoring",
                "aav_per_rating_point",
                d.aav_per_rating_point,
            ),
            points_per_million_surplus: config.get_double(
                "scoring",
                "points_per_million_surplus",
                d.points_per_million_surplus,
            ),
            max_term_years: config.get_int("scoring", "max_term_years", d.max_term_years as i64)
                as u32,
            rights_confidence: config.get_double(
                "scoring",
                "rights_confidence",
                d.rights_confidence,
            ),

            captain_bonus: config.get_double("scoring", "captain_bonus", d.captain_bonus),
            alternate_bonus: config.get_double("scoring", "alternate_bonus", d.alternate_bonus),
            award_bonus: config.get_double("scoring", "award_bonus", d.award_bonus),
            ring_base: config.get_double("scoring", "ring_base", d.ring_base),
            ring_decay: config.get_double("scoring", "ring_decay", d.ring_decay),

            scarcity_center: config.get_double("scoring", "scarcity_center", d.scarcity_center),
            scarcity_winger: config.get_double("scoring", "scarcity_winger", d.scarcity_winger),
            scarcity_defenseman: config.get_double(
                "scoring",
                "scarcity_defenseman",
                d.scarcity_defenseman,
            ),
            scarcity_goaltender: config.get_double(
                "scoring",
                "scarcity_goaltender",
                d.scarcity_goaltender,
            ),

            depth_discount: config.get_double("scoring", "depth_discount", d.depth_discount),
            max_depth_discount: config.get_double(
                "scoring",
                "max_depth_discount",
                d.max_depth_discount,
            ),

            fair_pct: config.get_double("fairness", "fair_pct", d.fair_pct),
            slight_pct: config.get_double("fairness", "slight_pct", d.slight_pct),
            favors_pct: config.get_double("fairness", "favors_pct", d.favors_pct),
            even_epsilon: config.get_double("fairness", "even_epsilon", d.even_epsilon),

            balance_tolerance_points: config.get_int(
                "fairness",
                "balance_tolerance_points",
                d.balance_tolerance_points as i64,
            ) as u32,
        };
        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject constants that would break the model's ordering contracts.
    pub fn validate(&self) -> Result<(), PuckvalError> {
        let invalid = |section: &str, key: &str, reason: &str| {
            Err(PuckvalError::ConfigInvalid {
                section: section.to_string(),
                key: key.to_string(),
                reason: reason.to_string(),
            })
        };

        if self.elite_curve_gain < 0.0 {
            return invalid("scoring", "elite_curve_gain", "must be non-negative");
        }
        if self.skater_prime_start > self.skater_prime_end {
            return invalid(
                "scoring",
                "skater_prime_start",
                "prime window start must not exceed its end",
            );
        }
        if self.goalie_prime_start > self.goalie_prime_end {
            return invalid(
                "scoring",
                "goalie_prime_start",
                "prime window start must not exceed its end",
            );
        }
        if self.youth_ramp_per_year < 0.0 || self.decline_per_year < 0.0 {
            return invalid(
                "scoring",
                "decline_per_year",
                "age curve slopes must be non-negative",
            );
        }
        if self.age_factor_floor <= 0.0 || self.age_factor_floor > 1.0 {
            return invalid("scoring", "age_factor_floor", "must be in (0, 1]");
        }
        if !(self.tier_rating_bottom6 <= self.tier_rating_top6
            && self.tier_rating_top6 <= self.tier_rating_top3
            && self.tier_rating_top3 <= self.tier_rating_elite
            && self.tier_rating_elite <= self.tier_rating_generational)
        {
            return invalid(
                "scoring",
                "tier_rating_bottom6",
                "tier ratings must be non-decreasing from Bottom6 to Generational",
            );
        }
        if self.league_min_aav < 0.0 {
            return invalid("scoring", "league_min_aav", "must be non-negative");
        }
        if self.aav_per_rating_point < 0.0 {
            return invalid("scoring", "aav_per_rating_point", "must be non-negative");
        }
        if !(0.0..=1.0).contains(&self.rights_confidence) {
            return invalid("scoring", "rights_confidence", "must be in [0, 1]");
        }
        if !(0.0..1.0).contains(&self.ring_decay) {
            return invalid("scoring", "ring_decay", "must be in [0, 1)");
        }
        for (key, value) in [
            ("scarcity_center", self.scarcity_center),
            ("scarcity_winger", self.scarcity_winger),
            ("scarcity_defenseman", self.scarcity_defenseman),
            ("scarcity_goaltender", self.scarcity_goaltender),
        ] {
            if value <= 0.0 {
                return invalid("scoring", key, "scarcity weight must be positive");
            }
        }
        if !(0.0..1.0).contains(&self.depth_discount) {
            return invalid("scoring", "depth_discount", "must be in [0, 1)");
        }
        if !(0.0..1.0).contains(&self.max_depth_discount) {
            return invalid("scoring", "max_depth_discount", "must be in [0, 1)");
        }
        if !(self.fair_pct > 0.0 && self.fair_pct < self.slight_pct && self.slight_pct < self.favors_pct)
        {
            return invalid(
                "fairness",
                "fair_pct",
                "fairness boundaries must be positive and strictly increasing",
            );
        }
        if self.even_epsilon < 0.0 {
            return invalid("fairness", "even_epsilon", "must be non-negative");
        }
        if self.balance_tolerance_points > 100 {
            return invalid("fairness", "balance_tolerance_points", "must be at most 100");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MapConfig(Vec<(&'static str, &'static str, f64)>);

    impl ConfigPort for MapConfig {
        fn get_string(&self, _section: &str, _key: &str) -> Option<String> {
            None
        }
        fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
            self.get_double(section, key, default as f64) as i64
        }
        fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
            self.0
                .iter()
                .find(|(s, k, _)| *s == section && *k == key)
                .map(|(_, _, v)| *v)
                .unwrap_or(default)
        }
        fn get_bool(&self, _section: &str, _key: &str, default: bool) -> bool {
            default
        }
    }

    #[test]
    fn defaults_validate() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn goalie_prime_window_is_later() {
        let cfg = ScoringConfig::default();
        let (skater_start, skater_end) = cfg.prime_window(Position::Center);
        let (goalie_start, goalie_end) = cfg.prime_window(Position::Goaltender);
        assert!(goalie_start > skater_start);
        assert!(goalie_end > skater_end);
    }

    #[test]
    fn tier_ratings_follow_tier_order() {
        let cfg = ScoringConfig::default();
        assert!(cfg.tier_rating(PotentialTier::Bottom6) < cfg.tier_rating(PotentialTier::Top6));
        assert!(cfg.tier_rating(PotentialTier::Elite) < cfg.tier_rating(PotentialTier::Generational));
    }

    #[test]
    fn from_config_overlays_overrides() {
        let port = MapConfig(vec![
            ("scoring", "captain_bonus", 20.0),
            ("fairness", "fair_pct", 3.0),
        ]);
        let cfg = ScoringConfig::from_config(&port).unwrap();
        assert_eq!(cfg.captain_bonus, 20.0);
        assert_eq!(cfg.fair_pct, 3.0);
        // untouched keys keep their defaults
        assert_eq!(cfg.alternate_bonus, ScoringConfig::default().alternate_bonus);
    }

    #[test]
    fn from_config_rejects_unordered_fairness_boundaries() {
        let port = MapConfig(vec![("fairness", "fair_pct", 50.0)]);
        let err = ScoringConfig::from_config(&port).unwrap_err();
        assert!(matches!(
            err,
            PuckvalError::ConfigInvalid { section, .. } if section == "fairness"
        ));
    }

    #[test]
    fn validate_rejects_inverted_prime_window() {
        let cfg = ScoringConfig {
            skater_prime_start: 30,
            skater_prime_end: 24,
            ..ScoringConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_depth_discount() {
        let cfg = ScoringConfig {
            depth_discount: 1.0,
            ..ScoringConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_unordered_tier_ratings() {
        let cfg = ScoringConfig {
            tier_rating_top3: 60.0,
            ..ScoringConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
