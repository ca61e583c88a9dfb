// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of SpotCycle.

//! Output formatters for monthly analysis results.

use anyhow::{Context, Result};
use comfy_table::{Attribute, Cell, Color, Table, presets::UTF8_FULL};
use spotcycle_types::{MonthlyReport, MonthlyResult};
use std::fs::File;
use std::io::Write;

/// Formatter for pretty ASCII tables
pub struct TableFormatter;

/// Formatter for CSV export
pub struct CsvFormatter;

impl TableFormatter {
    /// Format one monthly result as per-day rows with a totals footer
    pub fn format_monthly(result: &MonthlyResult, scenario: &str, policy: &str) -> String {
        let mut output = String::new();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Date").add_attribute(Attribute::Bold),
            Cell::new("Charge").add_attribute(Attribute::Bold),
            Cell::new("Buy\n(EUR/MWh)").add_attribute(Attribute::Bold),
            Cell::new("Discharge").add_attribute(Attribute::Bold),
            Cell::new("Sell\n(EUR/MWh)").add_attribute(Attribute::Bold),
            Cell::new("Cycles").add_attribute(Attribute::Bold),
            Cell::new("Profit").add_attribute(Attribute::Bold),
            Cell::new("Cumulative").add_attribute(Attribute::Bold),
        ]);

        let best_profit = result
            .daily_results
            .iter()
            .map(|day| day.total_profit)
            .fold(f64::NEG_INFINITY, f64::max);

        for (day, cumulative) in result
            .daily_results
            .iter()
            .zip(&result.chart.cumulative_profits)
        {
            let first = &day.events[0];

            // Highlight the most profitable day
            let date_cell = if day.total_profit == best_profit {
                Cell::new(day.date.to_string())
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new(day.date.to_string())
            };

            table.add_row(vec![
                date_cell,
                Cell::new(format!(
                    "{}-{}",
                    first.charge_start.format("%H:%M"),
                    first.charge_end.format("%H:%M")
                )),
                Cell::new(format!("{:.2}", first.charge_price)),
                Cell::new(format!(
                    "{}-{}",
                    first.discharge_start.format("%H:%M"),
                    first.discharge_end.format("%H:%M")
                )),
                Cell::new(format!("{:.2}", first.discharge_price)),
                Cell::new(day.events.len().to_string()),
                Cell::new(format!("{:.2}", day.total_profit)),
                Cell::new(format!("{cumulative:.2}")),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!(
            "Total profit: {:.2} EUR over {} scheduled days\n",
            result.total_profit,
            result.total_days()
        ));
        output.push_str(&format!("Scenario: {scenario} | Policy: {policy}\n"));

        output
    }

    /// Format the policy comparison table
    pub fn format_comparison(rows: &[(&str, &MonthlyResult)], scenario: &str) -> String {
        let mut output = String::new();

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Policy").add_attribute(Attribute::Bold),
            Cell::new("Total Profit\n(EUR)").add_attribute(Attribute::Bold),
            Cell::new("Scheduled\nDays").add_attribute(Attribute::Bold),
            Cell::new("Avg/Day\n(EUR)").add_attribute(Attribute::Bold),
        ]);

        let best_total = rows
            .iter()
            .map(|(_, result)| result.total_profit)
            .fold(f64::NEG_INFINITY, f64::max);

        for (policy, result) in rows {
            let days = result.total_days();
            #[expect(
                clippy::cast_precision_loss,
                reason = "day counts never exceed mantissa precision"
            )]
            let avg_per_day = if days == 0 {
                0.0
            } else {
                result.total_profit / days as f64
            };

            let policy_cell = if result.total_profit == best_total {
                Cell::new(*policy)
                    .fg(Color::Green)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new(*policy)
            };

            table.add_row(vec![
                policy_cell,
                Cell::new(format!("{:.2}", result.total_profit)),
                Cell::new(days.to_string()),
                Cell::new(format!("{avg_per_day:.2}")),
            ]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output.push_str(&format!("Scenario: {scenario}\n"));

        output
    }
}

impl CsvFormatter {
    /// Write one row per scheduled day to a CSV file
    pub fn write_daily_rows(report: &MonthlyReport, path: &str) -> Result<()> {
        let mut file =
            File::create(path).with_context(|| format!("Failed to create CSV file at {path}"))?;

        writeln!(
            file,
            "date,profit,price_diff,charge_start,charge_end,discharge_start,discharge_end,charge_price,discharge_price"
        )?;

        for entry in &report.daily_profits {
            writeln!(
                file,
                "{},{:.2},{:.2},{},{},{},{},{:.2},{:.2}",
                entry.date,
                entry.profit,
                entry.price_diff,
                entry.charge_start,
                entry.charge_end,
                entry.discharge_start,
                entry.discharge_end,
                entry.charge_price,
                entry.discharge_price
            )?;
        }

        Ok(())
    }
}
