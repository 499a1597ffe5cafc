//! CSV roster file adapter.
//!
//! Expects a header row followed by one record per asset, columns in
//! order: name, rating_overall, age, position, contract_type, term_years,
//! annual_value, potential_tier, potential_certainty, potential_volatility,
//! is_captain, is_alternate_captain, championship_count, has_major_award.
//!
//! Empty numeric cells default to 0 and empty boolean cells to false;
//! enumerated columns pass through as raw strings for the normalization
//! boundary to validate.

use crate::domain::error::PuckvalError;
use crate::domain::normalize::RawAssetRecord;
use crate::ports::roster_port::RosterPort;
use csv::StringRecord;
use std::fs;

const COLUMN_COUNT: usize = 14;

pub struct CsvRosterAdapter;

impl CsvRosterAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvRosterAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterPort for CsvRosterAdapter {
    fn fetch_assets(&self, source: &str) -> Result<Vec<RawAssetRecord>, PuckvalError> {
        let content = fs::read_to_string(source).map_err(|e| PuckvalError::Roster {
            reason: format!("failed to read {}: {}", source, e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut assets = Vec::new();

        for (row, result) in rdr.records().enumerate() {
            let record = result.map_err(|e| PuckvalError::Roster {
                reason: format!("CSV parse error: {}", e),
            })?;
            assets.push(parse_record(&record, row + 2)?);
        }

        Ok(assets)
    }
}

fn parse_record(record: &StringRecord, line: usize) -> Result<RawAssetRecord, PuckvalError> {
    if record.len() < COLUMN_COUNT {
        return Err(PuckvalError::Roster {
            reason: format!(
                "line {}: expected {} columns, found {}",
                line,
                COLUMN_COUNT,
                record.len()
            ),
        });
    }

    let name = record.get(0).unwrap_or("").trim();
    if name.is_empty() {
        return Err(PuckvalError::Roster {
            reason: format!("line {}: missing asset name", line),
        });
    }

    Ok(RawAssetRecord {
        name: name.to_string(),
        rating_overall: int_field(record, 1, "rating_overall", line)?,
        age: int_field(record, 2, "age", line)?,
        position: string_field(record, 3),
        contract_type: string_field(record, 4),
        term_years: int_field(record, 5, "term_years", line)?,
        annual_value: float_field(record, 6, "annual_value", line)?,
        potential_tier: string_field(record, 7),
        potential_certainty: float_field(record, 8, "potential_certainty", line)?,
        potential_volatility: float_field(record, 9, "potential_volatility", line)?,
        is_captain: bool_field(record, 10, "is_captain", line)?,
        is_alternate_captain: bool_field(record, 11, "is_alternate_captain", line)?,
        championship_count: int_field(record, 12, "championship_count", line)?,
        has_major_award: bool_field(record, 13, "has_major_award", line)?,
    })
}

fn string_field(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").trim().to_string()
}

fn int_field(
    record: &StringRecord,
    index: usize,
    name: &str,
    line: usize,
) -> Result<i64, PuckvalError> {
    let raw = record.get(index).unwrap_or("").trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(|e| PuckvalError::Roster {
        reason: format!("line {}: invalid {} value {:?}: {}", line, name, raw, e),
    })
}

fn float_field(
    record: &StringRecord,
    index: usize,
    name: &str,
    line: usize,
) -> Result<f64, PuckvalError> {
    let raw = record.get(index).unwrap_or("").trim();
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse().map_err(|e| PuckvalError::Roster {
        reason: format!("line {}: invalid {} value {:?}: {}", line, name, raw, e),
    })
}

fn bool_field(
    record: &StringRecord,
    index: usize,
    name: &str,
    line: usize,
) -> Result<bool, PuckvalError> {
    let raw = record.get(index).unwrap_or("").trim();
    match raw.to_lowercase().as_str() {
        "" | "false" | "no" | "0" => Ok(false),
        "true" | "yes" | "1" => Ok(true),
        _ => Err(PuckvalError::Roster {
            reason: format!("line {}: invalid {} value {:?}", line, name, raw),
        }),
    }
}
