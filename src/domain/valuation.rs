//! Per-asset valuation.
//!
//! Combines the component scores into one non-negative value:
//!
//!   value = scarcity * (blended_skill * age_factor + contract + leadership)
//!
//! floored at zero (a bad contract can only erode an asset's worth, never
//! invert it) and rounded to one decimal for display parity downstream.

use crate::domain::profile::AssetProfile;
use crate::domain::score::{compute_components, ComponentScoreSet};
use crate::domain::scoring_config::ScoringConfig;

/// Immutable valuation result for one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetValue {
    pub name: String,
    pub value: f64,
}

pub fn evaluate_asset(profile: &AssetProfile, config: &ScoringConfig) -> AssetValue {
    let components = compute_components(profile, config);
    AssetValue {
        name: profile.name.clone(),
        value: combine(&components),
    }
}

pub fn evaluate_assets(profiles: &[AssetProfile], config: &ScoringConfig) -> Vec<AssetValue> {
    profiles
        .iter()
        .map(|profile| evaluate_asset(profile, config))
        .collect()
}

fn combine(components: &ComponentScoreSet) -> f64 {
    let raw = components.scarcity
        * (components.potential * components.age + components.contract + components.leadership);
    round_one_decimal(raw.max(0.0))
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{ContractType, Position, PotentialTier};

    fn profile(rating: u8, age: u8) -> AssetProfile {
        AssetProfile {
            name: "Asset".into(),
            rating_overall: rating,
            age,
            position: Position::Center,
            contract_type: ContractType::Signed,
            term_years: 3,
            annual_value: 5.0,
            potential_tier: PotentialTier::Top6,
            potential_certainty: 0.5,
            potential_volatility: 0.2,
            is_captain: false,
            is_alternate_captain: false,
            championship_count: 0,
            has_major_award: false,
        }
    }

    #[test]
    fn value_is_rounded_to_one_decimal() {
        let config = ScoringConfig::default();
        let value = evaluate_asset(&profile(84, 26), &config).value;
        assert_eq!(value, (value * 10.0).round() / 10.0);
    }

    #[test]
    fn worst_case_profile_floors_at_zero() {
        let config = ScoringConfig::default();
        // very old, bad rating, badly overpaid on a long deal
        let mut bad = profile(20, 44);
        bad.annual_value = 14.0;
        bad.term_years = 8;
        bad.potential_certainty = 0.0;

        let value = evaluate_asset(&bad, &config).value;
        assert_eq!(value, 0.0);
    }

    #[test]
    fn higher_rating_never_lowers_value() {
        let config = ScoringConfig::default();
        let mut prev = evaluate_asset(&profile(0, 26), &config).value;
        for rating in 1..=99 {
            let value = evaluate_asset(&profile(rating, 26), &config).value;
            assert!(value >= prev, "value dropped at rating {rating}");
            prev = value;
        }
    }

    #[test]
    fn scarcity_separates_equal_profiles() {
        let config = ScoringConfig::default();
        let center = profile(88, 26);
        let mut winger = center.clone();
        winger.position = Position::Winger;

        let center_value = evaluate_asset(&center, &config).value;
        let winger_value = evaluate_asset(&winger, &config).value;
        assert!(center_value > winger_value);
    }

    #[test]
    fn evaluate_assets_preserves_order() {
        let config = ScoringConfig::default();
        let mut first = profile(90, 26);
        first.name = "First".into();
        let mut second = profile(70, 26);
        second.name = "Second".into();

        let values = evaluate_assets(&[first, second], &config);
        assert_eq!(values[0].name, "First");
        assert_eq!(values[1].name, "Second");
    }
}
