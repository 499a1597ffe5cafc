//! Potential blend.
//!
//! For assets below the position's prime window, the current rating score
//! is blended with the score implied by the potential tier:
//!
//!   w = certainty * (1 - volatility)
//!   blended = rating_score * (1 - w) + tier_score * w
//!
//! High volatility pulls the estimate back toward the safer present-value
//! anchor. At or past the prime window start the blend is the rating score
//! unchanged.

use crate::domain::profile::{AssetProfile, PotentialTier};
use crate::domain::score::rating::rating_score;
use crate::domain::scoring_config::ScoringConfig;

/// The rating curve evaluated at the tier's configured rating-equivalent.
pub fn potential_tier_score(tier: PotentialTier, config: &ScoringConfig) -> f64 {
    rating_score(config.tier_rating(tier), config)
}

pub fn blended_skill_score(profile: &AssetProfile, config: &ScoringConfig) -> f64 {
    let current = rating_score(profile.rating_overall as f64, config);
    let (prime_start, _) = config.prime_window(profile.position);
    if profile.age >= prime_start {
        return current;
    }

    let w = profile.potential_certainty * (1.0 - profile.potential_volatility);
    let tier = potential_tier_score(profile.potential_tier, config);
    current * (1.0 - w) + tier * w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{ContractType, Position};

    fn young_prospect(certainty: f64, volatility: f64) -> AssetProfile {
        AssetProfile {
            name: "Prospect".into(),
            rating_overall: 78,
            age: 20,
            position: Position::Center,
            contract_type: ContractType::Signed,
            term_years: 3,
            annual_value: 0.9,
            potential_tier: PotentialTier::Elite,
            potential_certainty: certainty,
            potential_volatility: volatility,
            is_captain: false,
            is_alternate_captain: false,
            championship_count: 0,
            has_major_award: false,
        }
    }

    #[test]
    fn zero_certainty_contributes_nothing() {
        let config = ScoringConfig::default();
        let profile = young_prospect(0.0, 0.0);
        let blended = blended_skill_score(&profile, &config);
        assert_eq!(blended, rating_score(78.0, &config));
    }

    #[test]
    fn full_certainty_no_volatility_equals_tier_score() {
        let config = ScoringConfig::default();
        let profile = young_prospect(1.0, 0.0);
        let blended = blended_skill_score(&profile, &config);
        assert_eq!(
            blended,
            potential_tier_score(PotentialTier::Elite, &config)
        );
    }

    #[test]
    fn volatility_shrinks_toward_present_anchor() {
        let config = ScoringConfig::default();
        let stable = blended_skill_score(&young_prospect(0.8, 0.0), &config);
        let volatile = blended_skill_score(&young_prospect(0.8, 0.6), &config);
        let current = rating_score(78.0, &config);

        // Elite tier sits above the current rating, so shrinking the blend
        // weight moves the estimate down toward the present value.
        assert!(volatile < stable);
        assert!(volatile > current);
    }

    #[test]
    fn prime_age_asset_uses_rating_only() {
        let config = ScoringConfig::default();
        let mut profile = young_prospect(1.0, 0.0);
        profile.age = 27;
        assert_eq!(
            blended_skill_score(&profile, &config),
            rating_score(78.0, &config)
        );
    }

    #[test]
    fn goaltender_blend_window_extends_later() {
        let config = ScoringConfig::default();
        let mut profile = young_prospect(1.0, 0.0);
        profile.age = 25;

        // 25-year-old skater is prime: no blend
        assert_eq!(
            blended_skill_score(&profile, &config),
            rating_score(78.0, &config)
        );

        // same age goaltender is pre-prime: blend applies
        profile.position = Position::Goaltender;
        assert_eq!(
            blended_skill_score(&profile, &config),
            potential_tier_score(PotentialTier::Elite, &config)
        );
    }

    #[test]
    fn higher_tier_never_scores_lower() {
        let config = ScoringConfig::default();
        let tiers = [
            PotentialTier::Bottom6,
            PotentialTier::Top6,
            PotentialTier::Top3,
            PotentialTier::Elite,
            PotentialTier::Generational,
        ];
        for pair in tiers.windows(2) {
            assert!(
                potential_tier_score(pair[0], &config) <= potential_tier_score(pair[1], &config)
            );
        }
    }
}
