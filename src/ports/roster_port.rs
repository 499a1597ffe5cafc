//! Roster data access port trait.
//!
//! The engine never queries the league database itself; it only accepts
//! already-fetched records through this boundary.

use crate::domain::error::PuckvalError;
use crate::domain::normalize::RawAssetRecord;

pub trait RosterPort {
    /// Fetch the raw asset records identified by `source` (for file-backed
    /// adapters this is a path).
    fn fetch_assets(&self, source: &str) -> Result<Vec<RawAssetRecord>, PuckvalError>;
}
