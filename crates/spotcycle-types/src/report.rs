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

//! Wire-shaped monthly report consumed by the response serializer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::results::{DailyResult, MonthlyResult};

/// One row of `daily_profits` in the monthly report.
///
/// The `second_*` fields describe the second cycle of a two-cycle day and
/// are omitted from the serialized form when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyProfitEntry {
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    pub profit: f64,
    pub price_diff: f64,

    /// Window bounds as `HH:MM` wall-clock times
    pub charge_start: String,
    pub charge_end: String,
    pub discharge_start: String,
    pub discharge_end: String,
    pub charge_price: f64,
    pub discharge_price: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_charge_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_charge_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_discharge_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_discharge_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_charge_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_discharge_price: Option<f64>,
}

/// Chart arrays in wire form, one entry per retained day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub dates: Vec<String>,
    pub price_diffs: Vec<f64>,
    pub daily_profits: Vec<f64>,
    pub cumulative_profits: Vec<f64>,
}

/// Monthly aggregation result in its response shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    pub total_profit: f64,
    pub total_days: usize,
    pub daily_profits: Vec<DailyProfitEntry>,
    pub chart_data: ChartData,
}

fn hhmm(time: DateTime<Utc>) -> String {
    time.format("%H:%M").to_string()
}

fn ymd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

impl From<&DailyResult> for DailyProfitEntry {
    fn from(day: &DailyResult) -> Self {
        // DailyResult guarantees at least one event
        let first = &day.events[0];
        let second = day.events.get(1);

        Self {
            date: ymd(day.date),
            profit: day.total_profit,
            price_diff: day.max_price_diff,
            charge_start: hhmm(first.charge_start),
            charge_end: hhmm(first.charge_end),
            discharge_start: hhmm(first.discharge_start),
            discharge_end: hhmm(first.discharge_end),
            charge_price: first.charge_price,
            discharge_price: first.discharge_price,
            second_charge_start: second.map(|event| hhmm(event.charge_start)),
            second_charge_end: second.map(|event| hhmm(event.charge_end)),
            second_discharge_start: second.map(|event| hhmm(event.discharge_start)),
            second_discharge_end: second.map(|event| hhmm(event.discharge_end)),
            second_charge_price: second.map(|event| event.charge_price),
            second_discharge_price: second.map(|event| event.discharge_price),
        }
    }
}

impl From<&MonthlyResult> for MonthlyReport {
    fn from(result: &MonthlyResult) -> Self {
        Self {
            total_profit: result.total_profit,
            total_days: result.total_days(),
            daily_profits: result
                .daily_results
                .iter()
                .map(DailyProfitEntry::from)
                .collect(),
            chart_data: ChartData {
                dates: result.chart.dates.iter().copied().map(ymd).collect(),
                price_diffs: result.chart.price_diffs.clone(),
                daily_profits: result.chart.daily_profits.clone(),
                cumulative_profits: result.chart.cumulative_profits.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{ChartSeries, CycleEvent, PriceWindow};
    use chrono::TimeZone;

    fn event(start_hour: u32, discharge_hour: u32, charge: f64, discharge: f64) -> CycleEvent {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        CycleEvent {
            charge_window: PriceWindow {
                start_index: (start_hour * 12) as usize,
                end_index: (start_hour * 12) as usize + 23,
            },
            discharge_window: PriceWindow {
                start_index: (discharge_hour * 12) as usize,
                end_index: (discharge_hour * 12) as usize + 23,
            },
            charge_start: date + chrono::Duration::hours(i64::from(start_hour)),
            charge_end: date + chrono::Duration::hours(i64::from(start_hour)) + chrono::Duration::minutes(115),
            discharge_start: date + chrono::Duration::hours(i64::from(discharge_hour)),
            discharge_end: date + chrono::Duration::hours(i64::from(discharge_hour)) + chrono::Duration::minutes(115),
            charge_price: charge,
            discharge_price: discharge,
            profit: discharge - charge,
        }
    }

    fn month_of(events: Vec<CycleEvent>, total: f64) -> MonthlyResult {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let day = DailyResult {
            date,
            total_profit: total,
            max_price_diff: events
                .iter()
                .map(|e| e.profit)
                .fold(f64::NEG_INFINITY, f64::max),
            events,
        };
        MonthlyResult {
            total_profit: total,
            chart: ChartSeries {
                dates: vec![date],
                price_diffs: vec![day.max_price_diff],
                daily_profits: vec![total],
                cumulative_profits: vec![total],
            },
            daily_results: vec![day],
        }
    }

    #[test]
    fn single_cycle_day_omits_second_fields() {
        let result = month_of(vec![event(0, 8, 10.0, 100.0)], 90.0);
        let report = MonthlyReport::from(&result);
        let json = serde_json::to_value(&report).unwrap();

        let entry = &json["daily_profits"][0];
        assert_eq!(entry["date"], "2024-01-15");
        assert_eq!(entry["charge_start"], "00:00");
        assert_eq!(entry["charge_end"], "01:55");
        assert_eq!(entry["discharge_start"], "08:00");
        assert_eq!(entry["charge_price"], 10.0);
        assert!(entry.get("second_charge_start").is_none());
        assert!(entry.get("second_discharge_price").is_none());

        assert_eq!(json["total_profit"], 90.0);
        assert_eq!(json["total_days"], 1);
        assert_eq!(json["chart_data"]["dates"][0], "2024-01-15");
    }

    #[test]
    fn double_cycle_day_carries_second_fields() {
        let result = month_of(
            vec![event(0, 8, 10.0, 100.0), event(12, 16, 20.0, 80.0)],
            150.0,
        );
        let report = MonthlyReport::from(&result);
        let json = serde_json::to_value(&report).unwrap();

        let entry = &json["daily_profits"][0];
        assert_eq!(entry["second_charge_start"], "12:00");
        assert_eq!(entry["second_charge_end"], "13:55");
        assert_eq!(entry["second_discharge_start"], "16:00");
        assert_eq!(entry["second_charge_price"], 20.0);
        assert_eq!(entry["second_discharge_price"], 80.0);
        assert_eq!(entry["price_diff"], 90.0);
    }
}
