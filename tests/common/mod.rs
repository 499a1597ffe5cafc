#![allow(dead_code)]

use puckval::domain::error::PuckvalError;
use puckval::domain::normalize::{normalize_asset, RawAssetRecord};
use puckval::domain::profile::AssetProfile;
use puckval::domain::scoring_config::ScoringConfig;
use puckval::ports::roster_port::RosterPort;
use std::collections::HashMap;

pub struct MockRosterPort {
    pub rosters: HashMap<String, Vec<RawAssetRecord>>,
    pub errors: HashMap<String, String>,
}

impl MockRosterPort {
    pub fn new() -> Self {
        Self {
            rosters: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_roster(mut self, source: &str, records: Vec<RawAssetRecord>) -> Self {
        self.rosters.insert(source.to_string(), records);
        self
    }

    pub fn with_error(mut self, source: &str, reason: &str) -> Self {
        self.errors.insert(source.to_string(), reason.to_string());
        self
    }
}

impl RosterPort for MockRosterPort {
    fn fetch_assets(&self, source: &str) -> Result<Vec<RawAssetRecord>, PuckvalError> {
        if let Some(reason) = self.errors.get(source) {
            return Err(PuckvalError::Roster {
                reason: reason.clone(),
            });
        }
        Ok(self.rosters.get(source).cloned().unwrap_or_default())
    }
}

/// Raw record with neutral optional fields: no contract, no potential
/// upside, no leadership.
pub fn make_record(name: &str, rating: i64, age: i64, position: &str) -> RawAssetRecord {
    RawAssetRecord {
        name: name.to_string(),
        rating_overall: rating,
        age,
        position: position.to_string(),
        contract_type: "signed".to_string(),
        term_years: 0,
        annual_value: 0.0,
        potential_tier: "bottom6".to_string(),
        potential_certainty: 0.0,
        potential_volatility: 0.0,
        is_captain: false,
        is_alternate_captain: false,
        championship_count: 0,
        has_major_award: false,
    }
}

pub fn make_profile(name: &str, rating: i64, age: i64, position: &str) -> AssetProfile {
    normalize_asset(&make_record(name, rating, age, position)).unwrap()
}

pub fn sample_config() -> ScoringConfig {
    ScoringConfig::default()
}
