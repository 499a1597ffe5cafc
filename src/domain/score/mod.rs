//! Component scorers.
//!
//! Each scorer is a deterministic pure function of the normalized profile
//! and the scoring constants. No scorer depends on another scorer's
//! output, so every factor is unit-testable in isolation.

pub mod rating;
pub mod age;
pub mod potential;
pub mod contract;
pub mod leadership;
pub mod scarcity;

use crate::domain::profile::AssetProfile;
use crate::domain::scoring_config::ScoringConfig;

/// Named sub-scores for one asset. Ephemeral; exists only within one
/// evaluation call.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentScoreSet {
    pub rating: f64,
    pub age: f64,
    pub potential: f64,
    pub contract: f64,
    pub leadership: f64,
    pub scarcity: f64,
}

pub fn compute_components(profile: &AssetProfile, config: &ScoringConfig) -> ComponentScoreSet {
    ComponentScoreSet {
        rating: rating::rating_score(profile.rating_overall as f64, config),
        age: age::age_factor(profile.age, profile.position, config),
        potential: potential::blended_skill_score(profile, config),
        contract: contract::contract_adjustment(profile, config),
        leadership: leadership::leadership_bonus(profile, config),
        scarcity: scarcity::scarcity_weight(profile.position, config),
    }
}
