//! Balance visualization.
//!
//! Converts two aggregate values into whole-number percentages that sum to
//! exactly 100; the rounding remainder goes to the larger share. A (0, 0)
//! input is the defined 50/50 edge case, not an error.

use crate::domain::error::PuckvalError;
use crate::domain::scoring_config::ScoringConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BalanceResult {
    pub side_a_pct: u32,
    pub side_b_pct: u32,
    pub is_balanced: bool,
}

pub fn visualize_trade_balance(
    value_a: f64,
    value_b: f64,
    config: &ScoringConfig,
) -> Result<BalanceResult, PuckvalError> {
    for (field, value) in [("value_a", value_a), ("value_b", value_b)] {
        if value < 0.0 || !value.is_finite() {
            return Err(PuckvalError::InvalidAssetAttribute {
                asset: "trade side".into(),
                field: field.into(),
                reason: "side value must be a non-negative finite number".into(),
            });
        }
    }

    let total = value_a + value_b;
    if total == 0.0 {
        return Ok(BalanceResult {
            side_a_pct: 50,
            side_b_pct: 50,
            is_balanced: true,
        });
    }

    // round the smaller share, hand the remainder to the larger one
    let (side_a_pct, side_b_pct) = if value_a >= value_b {
        let b = (value_b / total * 100.0).round() as u32;
        (100 - b, b)
    } else {
        let a = (value_a / total * 100.0).round() as u32;
        (a, 100 - a)
    };

    let gap = side_a_pct.abs_diff(side_b_pct);
    Ok(BalanceResult {
        side_a_pct,
        side_b_pct,
        is_balanced: gap <= config.balance_tolerance_points,
    })
}
