//! Debt Payoff Simulator - console runner
//!
//! Loads a scenario JSON (a serialized `SimulationConfig`) or falls back
//! to a built-in sample, runs the simulation core, and prints yearly
//! progress plus the final summary. Optionally writes the structured
//! JSON run report for spreadsheet/charting consumers.
//!
//! All simulation logic lives in `debt-simulator-core-rs`; this binary
//! is presentation glue only.

use clap::Parser;
use debt_simulator_core_rs::{
    run_simulation, Debt, RunReport, SimulationConfig, SimulationOutcome, StrategyKind,
};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

/// Simulate debt payoff under a monthly budget
#[derive(Parser, Debug)]
#[command(name = "debt-simulator")]
#[command(about = "Simulates debt payoff month by month under a fixed budget")]
#[command(version)]
struct Cli {
    /// Scenario JSON file (a SimulationConfig); runs a built-in sample when omitted
    scenario: Option<PathBuf>,

    /// Payoff strategy override: avalanche | snowball
    #[arg(short, long)]
    strategy: Option<StrategyKind>,

    /// Monthly budget override
    #[arg(short, long)]
    budget: Option<f64>,

    /// Write the JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,
}

/// Built-in sample: two revolving cards and a fixed-installment car
/// financing whose interest is already embedded in the installment
fn sample_scenario() -> SimulationConfig {
    let income = 4860.0;
    let fixed_expenses = 800.0;

    SimulationConfig::new(
        income - fixed_expenses,
        vec![
            Debt::new("Credit Card A".to_string(), 4803.58, 0.12, 1000.0),
            Debt::new("Credit Card B".to_string(), 4066.61, 0.12, 800.0),
            Debt::new("Car Financing".to_string(), 28146.99, 0.0, 1236.89)
                .with_remaining_term(31),
        ],
        StrategyKind::Avalanche,
    )
}

fn load_scenario(path: &PathBuf) -> Result<SimulationConfig, Box<dyn Error>> {
    let raw = fs::read_to_string(path)
        .map_err(|e| format!("cannot read scenario file {}: {e}", path.display()))?;
    let config = serde_json::from_str(&raw)
        .map_err(|e| format!("cannot parse scenario file {}: {e}", path.display()))?;
    Ok(config)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = match &cli.scenario {
        Some(path) => load_scenario(path)?,
        None => sample_scenario(),
    };
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    if let Some(budget) = cli.budget {
        config.monthly_budget = budget;
    }

    // Caller-side policy: refuse degenerate budgets before simulating
    if config.monthly_budget <= 0.0 {
        return Err(format!(
            "cannot simulate: monthly budget is {:.2}; nothing is left for debt payments",
            config.monthly_budget
        )
        .into());
    }

    println!("--- Debt Payoff Simulator ---");
    println!("Strategy:        {}", config.strategy);
    println!("Monthly budget:  {:.2}", config.monthly_budget);
    println!();
    println!("Debts:");
    for debt in &config.debts {
        let term = debt
            .remaining_term()
            .map(|t| format!("  ({t} months left)"))
            .unwrap_or_default();
        println!(
            "  {:<20} balance {:>12.2}  rate {:>5.1}%/mo  minimum {:>10.2}{term}",
            debt.name(),
            debt.balance(),
            debt.monthly_rate() * 100.0,
            debt.minimum_payment(),
        );
    }
    println!();

    let result = run_simulation(&config)?;

    for point in &result.balance_history {
        if point.month > 0 && point.month % 12 == 0 {
            println!(
                "Month {:>3}: total balance {:>12.2}",
                point.month, point.total_balance
            );
        }
    }
    println!();

    match result.outcome {
        SimulationOutcome::PaidOff => {
            println!("Debt-free in {} months.", result.months_to_payoff);
        }
        SimulationOutcome::TimedOut => {
            println!(
                "Not paid off within {} months (more than 10 years). \
                 The configuration is likely unpayable at this budget.",
                result.months_to_payoff
            );
        }
    }
    println!(
        "Total interest paid: {:.2}",
        result.total_interest_accrued
    );

    if let Some(path) = &cli.report {
        let report = RunReport::build(&config, &result)?;
        fs::write(path, report.to_json_pretty()?)
            .map_err(|e| format!("cannot write report to {}: {e}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
