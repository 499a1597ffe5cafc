//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_roster_adapter::CsvRosterAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::balance::visualize_trade_balance;
use crate::domain::error::PuckvalError;
use crate::domain::normalize::normalize_assets;
use crate::domain::profile::AssetProfile;
use crate::domain::scoring_config::ScoringConfig;
use crate::domain::trade::evaluate_trade;
use crate::domain::valuation::evaluate_assets;
use crate::ports::report_port::ReportPort;
use crate::ports::roster_port::RosterPort;

#[derive(Parser, Debug)]
#[command(name = "puckval", about = "Roster asset valuation and trade assessment")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Value each asset in a roster file
    Value {
        #[arg(short, long)]
        roster: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Evaluate a two-sided trade
    Trade {
        #[arg(long)]
        side_a: PathBuf,
        #[arg(long)]
        side_b: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compare two aggregate side values
    Balance {
        #[arg(long)]
        value_a: f64,
        #[arg(long)]
        value_b: f64,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Value { roster, config } => run_value(&roster, config.as_ref()),
        Command::Trade {
            side_a,
            side_b,
            config,
            output,
        } => run_trade(&side_a, &side_b, config.as_ref(), output.as_ref()),
        Command::Balance {
            value_a,
            value_b,
            config,
        } => run_balance(value_a, value_b, config.as_ref()),
    }
}

/// Load scoring constants: defaults, with INI overrides when a path is given.
pub fn load_scoring_config(path: Option<&PathBuf>) -> Result<ScoringConfig, PuckvalError> {
    match path {
        None => Ok(ScoringConfig::default()),
        Some(path) => {
            let adapter =
                FileConfigAdapter::from_file(path).map_err(|e| PuckvalError::ConfigParse {
                    file: path.display().to_string(),
                    reason: e.to_string(),
                })?;
            ScoringConfig::from_config(&adapter)
        }
    }
}

/// Load a roster file and normalize every record.
pub fn load_side(path: &PathBuf) -> Result<Vec<AssetProfile>, PuckvalError> {
    let adapter = CsvRosterAdapter::new();
    let records = adapter.fetch_assets(&path.display().to_string())?;
    normalize_assets(&records)
}

fn run_value(roster_path: &PathBuf, config_path: Option<&PathBuf>) -> ExitCode {
    let config = match load_scoring_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("Loading roster from {}", roster_path.display());
    let profiles = match load_side(roster_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let values = evaluate_assets(&profiles, &config);
    for asset in &values {
        println!("{:<24} {:>8.1}", asset.name, asset.value);
    }
    let total: f64 = values.iter().map(|v| v.value).sum();
    println!("{:<24} {:>8.1}", "total", total);

    ExitCode::SUCCESS
}

fn run_trade(
    side_a_path: &PathBuf,
    side_b_path: &PathBuf,
    config_path: Option<&PathBuf>,
    output_path: Option<&PathBuf>,
) -> ExitCode {
    let config = match load_scoring_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("Loading side A from {}", side_a_path.display());
    let side_a = match load_side(side_a_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("Loading side B from {}", side_b_path.display());
    let side_b = match load_side(side_b_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let evaluation = evaluate_trade(&side_a, &side_b, &config);
    let balance = match visualize_trade_balance(
        evaluation.side_a.adjusted_value,
        evaluation.side_b.adjusted_value,
        &config,
    ) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let report = TextReportAdapter::new();
    match output_path {
        Some(path) => {
            if let Err(e) = report.write(&evaluation, &balance, &path.display().to_string()) {
                eprintln!("error: {e}");
                return (&e).into();
            }
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{}", report.render(&evaluation, &balance)),
    }

    ExitCode::SUCCESS
}

fn run_balance(value_a: f64, value_b: f64, config_path: Option<&PathBuf>) -> ExitCode {
    let config = match load_scoring_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match visualize_trade_balance(value_a, value_b, &config) {
        Ok(balance) => {
            println!(
                "side A {}% | side B {}% ({})",
                balance.side_a_pct,
                balance.side_b_pct,
                if balance.is_balanced {
                    "balanced"
                } else {
                    "unbalanced"
                }
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
