//! Position scarcity weight.
//!
//! Multiplicative factor applied to the combined score. Elite centers and
//! goaltenders carry more market weight than wingers or defensemen of the
//! same rating.

use crate::domain::profile::Position;
use crate::domain::scoring_config::ScoringConfig;

pub fn scarcity_weight(position: Position, config: &ScoringConfig) -> f64 {
    match position {
        Position::Center => config.scarcity_center,
        Position::Winger => config.scarcity_winger,
        Position::Defenseman => config.scarcity_defenseman,
        Position::Goaltender => config.scarcity_goaltender,
    }
}
