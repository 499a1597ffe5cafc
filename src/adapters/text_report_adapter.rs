//! Plain-text trade report adapter.

use crate::domain::balance::BalanceResult;
use crate::domain::error::PuckvalError;
use crate::domain::trade::{BetterDeal, TradeEvaluation, TradeSideResult};
use crate::ports::report_port::ReportPort;
use std::fmt::Write as _;
use std::fs;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Render the evaluation as plain text.
    pub fn render(&self, evaluation: &TradeEvaluation, balance: &BalanceResult) -> String {
        let mut out = String::new();

        out.push_str("TRADE EVALUATION\n");
        out.push_str("================\n\n");

        render_side(&mut out, "Side A", &evaluation.side_a);
        out.push('\n');
        render_side(&mut out, "Side B", &evaluation.side_b);
        out.push('\n');

        let assessment = &evaluation.assessment;
        match assessment.better_deal_for {
            BetterDeal::Even => {
                let _ = writeln!(out, "Verdict: {} (even trade)", assessment.fairness);
            }
            side => {
                let _ = writeln!(
                    out,
                    "Verdict: {}, better deal for {}",
                    assessment.fairness, side
                );
            }
        }
        let _ = writeln!(
            out,
            "Adjusted difference: {:.1}",
            assessment.raw_difference
        );
        let _ = writeln!(
            out,
            "Balance: side A {}% | side B {}% ({})",
            balance.side_a_pct,
            balance.side_b_pct,
            if balance.is_balanced {
                "balanced"
            } else {
                "unbalanced"
            }
        );

        out
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn render_side(out: &mut String, label: &str, side: &TradeSideResult) {
    let noun = if side.asset_values.len() == 1 {
        "asset"
    } else {
        "assets"
    };
    let _ = writeln!(out, "{} ({} {})", label, side.asset_values.len(), noun);
    for asset in &side.asset_values {
        let _ = writeln!(out, "  {:<24} {:>8.1}", asset.name, asset.value);
    }
    let _ = writeln!(
        out,
        "  raw total: {:.1}   adjusted: {:.1}",
        side.raw_value, side.adjusted_value
    );
}

impl ReportPort for TextReportAdapter {
    fn write(
        &self,
        evaluation: &TradeEvaluation,
        balance: &BalanceResult,
        output_path: &str,
    ) -> Result<(), PuckvalError> {
        fs::write(output_path, self.render(evaluation, balance))?;
        Ok(())
    }
}
