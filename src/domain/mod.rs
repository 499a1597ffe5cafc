//! Core domain types and logic.

pub mod profile;
pub mod normalize;
pub mod scoring_config;
pub mod score;
pub mod valuation;
pub mod trade;
pub mod balance;
pub mod error;
