//! Report generation port trait.

use crate::domain::balance::BalanceResult;
use crate::domain::error::PuckvalError;
use crate::domain::trade::TradeEvaluation;

/// Port for writing trade evaluation reports.
pub trait ReportPort {
    fn write(
        &self,
        evaluation: &TradeEvaluation,
        balance: &BalanceResult,
        output_path: &str,
    ) -> Result<(), PuckvalError>;
}
