//! Contract economics.
//!
//! Compares the asset's AAV against the market cost its rating implies.
//! A below-market deal adds value, an above-market deal subtracts; term
//! length amplifies both directions (locked-in surplus or locked-in risk).
//! Unsigned and RFA assets are rights only, so their adjustment is
//! discounted by the rights-confidence factor; UFA and signed deals are
//! taken at face value. No term, no adjustment.

use crate::domain::profile::{AssetProfile, ContractType};
use crate::domain::scoring_config::ScoringConfig;

/// Market AAV (in millions) implied by a rating, floored at the league
/// minimum.
pub fn expected_market_aav(rating: f64, config: &ScoringConfig) -> f64 {
    let implied =
        config.league_min_aav + (rating - config.replacement_rating) * config.aav_per_rating_point;
    implied.max(config.league_min_aav)
}

pub fn contract_adjustment(profile: &AssetProfile, config: &ScoringConfig) -> f64 {
    if profile.term_years == 0 {
        return 0.0;
    }

    let expected = expected_market_aav(profile.rating_overall as f64, config);
    let surplus_per_year = expected - profile.annual_value;

    let term = profile.term_years.min(config.max_term_years) as f64;
    let term_factor = term / 2.0;

    let confidence = match profile.contract_type {
        ContractType::Unsigned | ContractType::RestrictedFreeAgent => config.rights_confidence,
        ContractType::UnrestrictedFreeAgent | ContractType::Signed => 1.0,
    };

    surplus_per_year * config.points_per_million_surplus * term_factor * confidence
}
