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

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Inclusive range of sample indices within one day's series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceWindow {
    pub start_index: usize,
    pub end_index: usize,
}

impl PriceWindow {
    /// Number of samples covered by this window
    pub fn sample_count(self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// True when `index` falls inside the window, bounds inclusive
    pub fn contains(self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }

    /// True when the two windows share at least one index
    pub fn overlaps(self, other: PriceWindow) -> bool {
        self.start_index <= other.end_index && other.start_index <= self.end_index
    }
}

/// One charge/discharge pair within a single day.
///
/// Prices are the arithmetic means over the two windows, rounded to two
/// decimals when the event is built; `profit` is the margin on cycling
/// 1 MWh through the pair. The discharge window always starts strictly
/// after the charge window ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleEvent {
    pub charge_window: PriceWindow,
    pub discharge_window: PriceWindow,
    pub charge_start: DateTime<Utc>,
    pub charge_end: DateTime<Utc>,
    pub discharge_start: DateTime<Utc>,
    pub discharge_end: DateTime<Utc>,
    pub charge_price: f64,
    pub discharge_price: f64,
    pub profit: f64,
}

/// Schedule found for one calendar day.
///
/// Only produced for days where at least one cycle fits, so `events`
/// always holds one or two entries in execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyResult {
    pub date: NaiveDate,
    pub events: Vec<CycleEvent>,
    pub total_profit: f64,

    /// Largest price differential across the day's events
    pub max_price_diff: f64,
}

/// Parallel per-day series for charting, one entry per retained day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub dates: Vec<NaiveDate>,
    pub price_diffs: Vec<f64>,
    pub daily_profits: Vec<f64>,

    /// Running profit total, each partial sum rounded independently
    pub cumulative_profits: Vec<f64>,
}

/// Aggregated schedule for a whole month of price data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonthlyResult {
    /// Per-day schedules in ascending date order
    pub daily_results: Vec<DailyResult>,
    pub total_profit: f64,
    pub chart: ChartSeries,
}

impl MonthlyResult {
    /// Number of days that produced a schedule
    pub fn total_days(&self) -> usize {
        self.daily_results.len()
    }
}
