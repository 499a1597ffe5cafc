//! Attribute normalization at the engine boundary.
//!
//! Raw records arrive as loosely-typed field mappings from the data layer.
//! Normalization either produces a fully validated [`AssetProfile`] or
//! fails naming the offending field; it is never partially applied.

use crate::domain::error::PuckvalError;
use crate::domain::profile::{AssetProfile, ContractType, Position, PotentialTier};

pub const MIN_AGE: i64 = 16;
pub const MAX_RATING: i64 = 99;

/// Plain asset record as supplied by the data-access layer. Enumerated
/// fields are still strings here; numeric fields default to zero and
/// booleans to false when absent upstream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAssetRecord {
    pub name: String,
    pub rating_overall: i64,
    pub age: i64,
    pub position: String,
    pub contract_type: String,
    pub term_years: i64,
    pub annual_value: f64,
    pub potential_tier: String,
    pub potential_certainty: f64,
    pub potential_volatility: f64,
    pub is_captain: bool,
    pub is_alternate_captain: bool,
    pub championship_count: i64,
    pub has_major_award: bool,
}

/// Validate and clamp one raw record into an [`AssetProfile`].
pub fn normalize_asset(record: &RawAssetRecord) -> Result<AssetProfile, PuckvalError> {
    let invalid = |field: &str, reason: &str| PuckvalError::InvalidAssetAttribute {
        asset: record.name.clone(),
        field: field.to_string(),
        reason: reason.to_string(),
    };

    if record.age < MIN_AGE {
        return Err(invalid("age", "age must be at least 16"));
    }
    if record.term_years < 0 {
        return Err(invalid("term_years", "term must be non-negative"));
    }
    if record.annual_value < 0.0 {
        return Err(invalid("annual_value", "annual value must be non-negative"));
    }
    if record.championship_count < 0 {
        return Err(invalid(
            "championship_count",
            "championship count must be non-negative",
        ));
    }

    let position = Position::parse(&record.position)?;
    let contract_type = ContractType::parse(&record.contract_type)?;
    let potential_tier = PotentialTier::parse(&record.potential_tier)?;

    Ok(AssetProfile {
        name: record.name.clone(),
        rating_overall: record.rating_overall.clamp(0, MAX_RATING) as u8,
        age: record.age.min(u8::MAX as i64) as u8,
        position,
        contract_type,
        term_years: record.term_years as u32,
        annual_value: record.annual_value,
        potential_tier,
        potential_certainty: record.potential_certainty.clamp(0.0, 1.0),
        potential_volatility: record.potential_volatility.clamp(0.0, 1.0),
        is_captain: record.is_captain,
        is_alternate_captain: record.is_alternate_captain,
        championship_count: record.championship_count as u32,
        has_major_award: record.has_major_award,
    })
}

/// Normalize a whole side. The first failing record aborts with its error;
/// silently skipping an asset would corrupt any downstream comparison.
pub fn normalize_assets(records: &[RawAssetRecord]) -> Result<Vec<AssetProfile>, PuckvalError> {
    records.iter().map(normalize_asset).collect()
}
