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

//! Monthly aggregation over per-day schedules.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use spotcycle_types::{ChartSeries, CyclePolicy, MonthlyResult, PricePoint};
use tracing::debug;

use crate::day::schedule_day;
use crate::round2;

/// Partition `series` into calendar days, schedule each one, and fold the
/// results into a monthly summary.
///
/// Days with too few samples or no viable windows contribute nothing to
/// the totals or the chart series; a month where every day is skipped is a
/// valid, empty result. The policy arrives already validated at the string
/// boundary ([`CyclePolicy::from_str`]), so an unrecognized value cannot
/// reach this function and masquerade as zero profitable days.
pub fn aggregate_month(series: &[PricePoint], policy: CyclePolicy) -> MonthlyResult {
    let mut days: BTreeMap<NaiveDate, Vec<PricePoint>> = BTreeMap::new();
    for point in series {
        days.entry(point.timestamp.date_naive())
            .or_default()
            .push(*point);
    }
    debug!(days = days.len(), policy = policy.as_str(), "aggregating month");

    let mut daily_results = Vec::new();
    let mut chart = ChartSeries::default();
    let mut running_total = 0.0;

    for (date, samples) in &days {
        let Some(result) = schedule_day(*date, samples, policy) else {
            debug!(%date, samples = samples.len(), "no viable cycle, skipping day");
            continue;
        };

        running_total += result.total_profit;
        chart.dates.push(*date);
        chart.price_diffs.push(result.max_price_diff);
        chart.daily_profits.push(result.total_profit);
        chart.cumulative_profits.push(round2(running_total));
        daily_results.push(result);
    }

    MonthlyResult {
        total_profit: round2(running_total),
        daily_results,
        chart,
    }
}
