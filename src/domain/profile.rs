//! Roster asset profile and attribute enumerations.
//!
//! Enum membership is validated once at the normalization boundary;
//! everything downstream uses exhaustive matching so a new variant cannot
//! silently fall through to a default.

use crate::domain::error::PuckvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Center,
    Winger,
    Defenseman,
    Goaltender,
}

impl Position {
    /// Parse a position string. Accepts canonical names and the usual
    /// scoresheet abbreviations, case-insensitive.
    pub fn parse(value: &str) -> Result<Self, PuckvalError> {
        match value.trim().to_lowercase().as_str() {
            "center" | "centre" | "c" => Ok(Position::Center),
            "winger" | "wing" | "w" | "lw" | "rw" => Ok(Position::Winger),
            "defenseman" | "defenceman" | "defense" | "defence" | "d" => Ok(Position::Defenseman),
            "goaltender" | "goalie" | "g" => Ok(Position::Goaltender),
            _ => Err(PuckvalError::UnknownEnumValue {
                field: "position".into(),
                value: value.to_string(),
            }),
        }
    }
}

/// Governs confidence in the contract-economics component: unsigned and
/// RFA assets are rights only, not a guaranteed contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractType {
    Unsigned,
    RestrictedFreeAgent,
    UnrestrictedFreeAgent,
    Signed,
}

impl ContractType {
    pub fn parse(value: &str) -> Result<Self, PuckvalError> {
        match value.trim().to_lowercase().as_str() {
            "unsigned" | "none" => Ok(ContractType::Unsigned),
            "restrictedfreeagent" | "restricted_free_agent" | "restricted free agent" | "rfa" => {
                Ok(ContractType::RestrictedFreeAgent)
            }
            "unrestrictedfreeagent" | "unrestricted_free_agent" | "unrestricted free agent"
            | "ufa" => Ok(ContractType::UnrestrictedFreeAgent),
            "signed" => Ok(ContractType::Signed),
            _ => Err(PuckvalError::UnknownEnumValue {
                field: "contract_type".into(),
                value: value.to_string(),
            }),
        }
    }
}

/// Coarse, ordered projection of an asset's ceiling ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PotentialTier {
    Bottom6,
    Top6,
    Top3,
    Elite,
    Generational,
}

impl PotentialTier {
    pub fn parse(value: &str) -> Result<Self, PuckvalError> {
        match value.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "bottom6" => Ok(PotentialTier::Bottom6),
            "top6" => Ok(PotentialTier::Top6),
            "top3" => Ok(PotentialTier::Top3),
            "elite" => Ok(PotentialTier::Elite),
            "generational" => Ok(PotentialTier::Generational),
            _ => Err(PuckvalError::UnknownEnumValue {
                field: "potential_tier".into(),
                value: value.to_string(),
            }),
        }
    }
}

/// Exactly one leadership tier applies per asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadershipRole {
    None,
    Alternate,
    Captain,
}

/// One evaluated roster asset, validated and clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetProfile {
    pub name: String,
    pub rating_overall: u8,
    pub age: u8,
    pub position: Position,
    pub contract_type: ContractType,
    pub term_years: u32,
    /// Average annual contract cost in millions.
    pub annual_value: f64,
    pub potential_tier: PotentialTier,
    pub potential_certainty: f64,
    pub potential_volatility: f64,
    pub is_captain: bool,
    pub is_alternate_captain: bool,
    pub championship_count: u32,
    pub has_major_award: bool,
}

impl AssetProfile {
    /// Captain dominates if both flags are set.
    pub fn leadership_role(&self) -> LeadershipRole {
        if self.is_captain {
            LeadershipRole::Captain
        } else if self.is_alternate_captain {
            LeadershipRole::Alternate
        } else {
            LeadershipRole::None
        }
    }
}
