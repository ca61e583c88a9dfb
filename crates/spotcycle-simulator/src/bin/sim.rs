// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of SpotCycle.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use spotcycle_core::aggregate_month;
use spotcycle_simulator::cli::{Cli, Commands, CompareArgs, CsvFormatter, RunArgs, TableFormatter};
use spotcycle_simulator::price_scenarios::PriceScenario;
use spotcycle_types::{CyclePolicy, MonthlyReport, MonthlyResult};

fn main() -> Result<()> {
    // Initialize tracing, respecting RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(&args),
        Commands::Compare(args) => compare(&args),
    }
}

fn run(args: &RunArgs) -> Result<()> {
    let (year, month) = parse_month(&args.month)?;
    let scenario = load_scenario(&args.scenario)?;
    let policy: CyclePolicy = args.policy.parse()?;

    let series = scenario.generate(year, month);
    info!(
        samples = series.len(),
        scenario = scenario.name(),
        %policy,
        "generated price series"
    );

    let result = aggregate_month(&series, policy);

    match args.output.as_str() {
        "table" => print!(
            "{}",
            TableFormatter::format_monthly(&result, scenario.name(), policy.as_str())
        ),
        "json" => {
            let report = MonthlyReport::from(&result);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        "csv" => {
            let path = args
                .csv_path
                .as_deref()
                .context("--csv-path is required when --output csv")?;
            let report = MonthlyReport::from(&result);
            CsvFormatter::write_daily_rows(&report, path)?;
            println!("Wrote {} daily rows to {}", report.daily_profits.len(), path);
        }
        other => bail!("Unsupported output format '{other}'"),
    }

    Ok(())
}

fn compare(args: &CompareArgs) -> Result<()> {
    let (year, month) = parse_month(&args.month)?;
    let scenario = load_scenario(&args.scenario)?;
    let series = scenario.generate(year, month);

    let policies = [
        CyclePolicy::OneChargeOneDischarge,
        CyclePolicy::TwoChargeTwoDischarge,
    ];
    let results: Vec<(&str, MonthlyResult)> = policies
        .iter()
        .map(|&policy| (policy.as_str(), aggregate_month(&series, policy)))
        .collect();

    let rows: Vec<(&str, &MonthlyResult)> = results
        .iter()
        .map(|(policy, result)| (*policy, result))
        .collect();
    print!("{}", TableFormatter::format_comparison(&rows, scenario.name()));

    Ok(())
}

fn parse_month(value: &str) -> Result<(i32, u32)> {
    let (year, month) = value
        .split_once('-')
        .with_context(|| format!("Invalid month '{value}', expected YYYY-MM"))?;
    let year: i32 = year
        .parse()
        .with_context(|| format!("Invalid year in '{value}'"))?;
    let month: u32 = month
        .parse()
        .with_context(|| format!("Invalid month number in '{value}'"))?;
    if !(1..=12).contains(&month) {
        bail!("Month out of range in '{value}', expected 01-12");
    }
    Ok((year, month))
}

fn load_scenario(id: &str) -> Result<PriceScenario> {
    PriceScenario::from_id(id).with_context(|| {
        format!("Unknown scenario '{id}', expected one of: usual_month, volatile, negative, sparse")
    })
}
