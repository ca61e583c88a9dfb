// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of SpotCycle.

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spotcycle-sim")]
#[command(author, version, about = "SpotCycle monthly arbitrage analysis CLI")]
#[command(
    long_about = "Monthly battery arbitrage analysis over spot-price series.\n\
    \nGenerates a synthetic month of 5-minute prices, schedules one or two\n\
    charge/discharge cycles per day, and reports per-day and cumulative profit.\n\
    \nExamples:\n  \
    spotcycle-sim run                                       # usual month, single cycle\n  \
    spotcycle-sim run --policy two_charge_two_discharge --output json\n  \
    spotcycle-sim compare --scenario volatile               # both policies side by side"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a monthly analysis with one cycling policy
    #[command(
        long_about = "Run one cycling policy against a synthetic month of prices.\n\
        \nExamples:\n  \
        spotcycle-sim run\n  \
        spotcycle-sim run --scenario negative --month 2024-06\n  \
        spotcycle-sim run --output csv --csv-path daily.csv"
    )]
    Run(RunArgs),

    /// Compare the two cycling policies over the same month
    #[command(
        long_about = "Run both cycling policies against the same generated series\n\
        and rank them by total monthly profit.\n\
        \nExamples:\n  \
        spotcycle-sim compare\n  \
        spotcycle-sim compare --scenario volatile --month 2024-11"
    )]
    Compare(CompareArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Price scenario name (usual_month, volatile, negative, sparse)
    #[arg(
        long,
        default_value = "usual_month",
        help = "Synthetic price scenario to analyze",
        long_help = "Available scenarios:\n  \
          - usual_month: cheap overnight, elevated day, evening peak\n  \
          - volatile: large swings with strong arbitrage spreads (5-160 EUR)\n  \
          - negative: includes negative midday prices\n  \
          - sparse: usual pattern with a final day too short to schedule"
    )]
    pub scenario: String,

    /// Cycling policy
    #[arg(
        long,
        default_value = "one_charge_one_discharge",
        help = "Daily cycling policy (one_charge_one_discharge, two_charge_two_discharge)"
    )]
    pub policy: String,

    /// Month to analyze (YYYY-MM)
    #[arg(
        long,
        default_value = "2024-01",
        value_name = "YYYY-MM",
        help = "Calendar month the generated series covers"
    )]
    pub month: String,

    /// Output format: table, json, or csv
    #[arg(long, default_value = "table",
          value_parser = ["table", "json", "csv"],
          help = "How to display results")]
    pub output: String,

    /// CSV file path (required when output is csv)
    #[arg(
        long,
        value_name = "PATH",
        help = "Where to save per-day CSV rows",
        long_help = "Path for CSV export with one row per scheduled day.\n\
          Required when --output is 'csv'.\n\
          \nExample: --csv-path daily.csv"
    )]
    pub csv_path: Option<String>,
}

#[derive(Parser)]
pub struct CompareArgs {
    /// Price scenario name (usual_month, volatile, negative, sparse)
    #[arg(
        long,
        default_value = "usual_month",
        help = "Synthetic price scenario to analyze"
    )]
    pub scenario: String,

    /// Month to analyze (YYYY-MM)
    #[arg(
        long,
        default_value = "2024-01",
        value_name = "YYYY-MM",
        help = "Calendar month the generated series covers"
    )]
    pub month: String,
}
