//! Age curve.
//!
//! Unimodal multiplier: 1.0 across the position's prime window, a linear
//! ramp on the youth side (unrealized ability is discounted unless the
//! potential blend compensates) and a linear decline past the window,
//! floored so an old profile erodes value without zeroing it. Goaltenders
//! use a later-peaking window than skaters.

use crate::domain::profile::Position;
use crate::domain::scoring_config::ScoringConfig;

pub fn age_factor(age: u8, position: Position, config: &ScoringConfig) -> f64 {
    let (prime_start, prime_end) = config.prime_window(position);
    let a = age as f64;

    let factor = if a < prime_start as f64 {
        1.0 - (prime_start as f64 - a) * config.youth_ramp_per_year
    } else if a <= prime_end as f64 {
        1.0
    } else {
        1.0 - (a - prime_end as f64) * config.decline_per_year
    };

    factor.max(config.age_factor_floor)
}
