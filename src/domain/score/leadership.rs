//! Leadership and accolade bonus.
//!
//! Additive: captain > alternate > none, a flat major-award bonus, and a
//! championship bonus with geometrically diminishing per-ring weight so
//! the first ring is worth more than the fifth.

use crate::domain::profile::{AssetProfile, LeadershipRole};
use crate::domain::scoring_config::ScoringConfig;

pub fn leadership_bonus(profile: &AssetProfile, config: &ScoringConfig) -> f64 {
    let role_bonus = match profile.leadership_role() {
        LeadershipRole::Captain => config.captain_bonus,
        LeadershipRole::Alternate => config.alternate_bonus,
        LeadershipRole::None => 0.0,
    };

    let award_bonus = if profile.has_major_award {
        config.award_bonus
    } else {
        0.0
    };

    role_bonus + award_bonus + championship_bonus(profile.championship_count, config)
}

/// Geometric series: base * (1 - decay^n) / (1 - decay).
fn championship_bonus(count: u32, config: &ScoringConfig) -> f64 {
    if count == 0 {
        return 0.0;
    }
    config.ring_base * (1.0 - config.ring_decay.powi(count as i32)) / (1.0 - config.ring_decay)
}
