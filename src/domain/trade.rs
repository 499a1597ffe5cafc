//! Two-sided trade aggregation and assessment.
//!
//! A side's raw value is the exact sum of its per-asset values. The
//! adjusted value applies a concentration discount: value spread across
//! many assets is worth less than the same sum concentrated in one star,
//! so depth-for-star packages are not compared 1:1 by arithmetic sum.

use crate::domain::error::PuckvalError;
use crate::domain::normalize::{normalize_assets, RawAssetRecord};
use crate::domain::profile::AssetProfile;
use crate::domain::scoring_config::ScoringConfig;
use crate::domain::valuation::{evaluate_assets, AssetValue};
use std::fmt;

/// How lopsided the adjusted-value gap is. Direction is carried by
/// [`BetterDeal`] only, so mirrored inputs classify identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FairnessTier {
    Fair,
    SlightlyFavors,
    Favors,
    Lopsided,
}

impl fmt::Display for FairnessTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FairnessTier::Fair => "fair",
            FairnessTier::SlightlyFavors => "slightly favors",
            FairnessTier::Favors => "favors",
            FairnessTier::Lopsided => "lopsided",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BetterDeal {
    SideA,
    SideB,
    Even,
}

impl fmt::Display for BetterDeal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BetterDeal::SideA => "side A",
            BetterDeal::SideB => "side B",
            BetterDeal::Even => "even",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeSideResult {
    pub raw_value: f64,
    pub adjusted_value: f64,
    pub asset_values: Vec<AssetValue>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeAssessment {
    pub fairness: FairnessTier,
    pub raw_difference: f64,
    pub better_deal_for: BetterDeal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeEvaluation {
    pub side_a: TradeSideResult,
    pub side_b: TradeSideResult,
    pub assessment: TradeAssessment,
}

/// Evaluate two sides of normalized profiles. Empty sides are valid
/// zero-value inputs: a trade can give something for nothing.
pub fn evaluate_trade(
    side_a: &[AssetProfile],
    side_b: &[AssetProfile],
    config: &ScoringConfig,
) -> TradeEvaluation {
    let side_a = aggregate_side(side_a, config);
    let side_b = aggregate_side(side_b, config);
    let assessment = assess(&side_a, &side_b, config);
    TradeEvaluation {
        side_a,
        side_b,
        assessment,
    }
}

/// Raw-record entry point: normalizes both sides first; the first failing
/// asset aborts the entire evaluation with its originating error.
pub fn evaluate_trade_records(
    side_a: &[RawAssetRecord],
    side_b: &[RawAssetRecord],
    config: &ScoringConfig,
) -> Result<TradeEvaluation, PuckvalError> {
    let side_a = normalize_assets(side_a)?;
    let side_b = normalize_assets(side_b)?;
    Ok(evaluate_trade(&side_a, &side_b, config))
}

fn aggregate_side(profiles: &[AssetProfile], config: &ScoringConfig) -> TradeSideResult {
    let asset_values = evaluate_assets(profiles, config);
    let raw_value: f64 = asset_values.iter().map(|v| v.value).sum();
    let adjusted_value = raw_value * concentration_factor(&asset_values, config);
    TradeSideResult {
        raw_value,
        adjusted_value,
        asset_values,
    }
}

/// Multiplier in (0, 1]. Penalty grows with asset count and shrinks as the
/// raw value concentrates in the single highest-value asset; a one-asset
/// or empty side takes no discount.
pub fn concentration_factor(values: &[AssetValue], config: &ScoringConfig) -> f64 {
    let raw: f64 = values.iter().map(|v| v.value).sum();
    let count = values.len();
    if count <= 1 || raw <= 0.0 {
        return 1.0;
    }

    let top = values.iter().map(|v| v.value).fold(0.0_f64, f64::max);
    let top_share = top / raw;
    let penalty =
        config.depth_discount * (1.0 - top_share) * (1.0 - 1.0 / count as f64);
    1.0 - penalty.min(config.max_depth_discount)
}

fn assess(
    side_a: &TradeSideResult,
    side_b: &TradeSideResult,
    config: &ScoringConfig,
) -> TradeAssessment {
    let a = side_a.adjusted_value;
    let b = side_b.adjusted_value;
    let raw_difference = (a - b).abs();

    let better_deal_for = if raw_difference <= config.even_epsilon {
        BetterDeal::Even
    } else if a > b {
        BetterDeal::SideA
    } else {
        BetterDeal::SideB
    };

    let larger = a.max(b);
    let gap_pct = if larger > 0.0 {
        raw_difference / larger * 100.0
    } else {
        0.0
    };

    let fairness = if gap_pct <= config.fair_pct {
        FairnessTier::Fair
    } else if gap_pct <= config.slight_pct {
        FairnessTier::SlightlyFavors
    } else if gap_pct <= config.favors_pct {
        FairnessTier::Favors
    } else {
        FairnessTier::Lopsided
    };

    TradeAssessment {
        fairness,
        raw_difference,
        better_deal_for,
    }
}
