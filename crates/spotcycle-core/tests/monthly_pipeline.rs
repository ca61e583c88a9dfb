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

//! End-to-end runs over hand-built months: aggregation plus the wire report.

use chrono::{Duration, TimeZone, Utc};
use spotcycle_core::aggregate_month;
use spotcycle_types::{CyclePolicy, MonthlyReport, PricePoint};

fn day_with_plateaus(day: u32, plateaus: &[(usize, usize, f64)], sample_count: usize) -> Vec<PricePoint> {
    let start = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
    let mut prices = vec![50.0; sample_count];
    for &(from, to, value) in plateaus {
        for slot in &mut prices[from..=to] {
            *slot = value;
        }
    }
    prices
        .iter()
        .enumerate()
        .map(|(i, &price)| PricePoint::new(start + Duration::minutes(i as i64 * 5), price))
        .collect()
}

#[test]
fn single_cycle_month_produces_expected_report() {
    // day 1: profit 90, day 2: too short (skipped), day 3: profit 150
    let mut series = day_with_plateaus(1, &[(0, 23, 10.0), (100, 123, 100.0)], 288);
    series.extend(day_with_plateaus(2, &[], 40));
    series.extend(day_with_plateaus(3, &[(0, 23, 10.0), (100, 123, 160.0)], 288));

    let result = aggregate_month(&series, CyclePolicy::OneChargeOneDischarge);
    let report = MonthlyReport::from(&result);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_profit"], 240.0);
    assert_eq!(json["total_days"], 2);
    assert_eq!(json["daily_profits"].as_array().unwrap().len(), 2);

    let first = &json["daily_profits"][0];
    assert_eq!(first["date"], "2024-01-01");
    assert_eq!(first["profit"], 90.0);
    assert_eq!(first["price_diff"], 90.0);
    assert_eq!(first["charge_start"], "00:00");
    assert_eq!(first["charge_end"], "01:55");
    assert_eq!(first["discharge_start"], "08:20");
    assert_eq!(first["discharge_end"], "10:15");
    assert_eq!(first["charge_price"], 10.0);
    assert_eq!(first["discharge_price"], 100.0);
    assert!(first.get("second_charge_start").is_none());

    // the short day is absent entirely
    assert!(
        json["daily_profits"]
            .as_array()
            .unwrap()
            .iter()
            .all(|entry| entry["date"] != "2024-01-02")
    );

    let chart = &json["chart_data"];
    assert_eq!(chart["dates"][0], "2024-01-01");
    assert_eq!(chart["dates"][1], "2024-01-03");
    assert_eq!(chart["daily_profits"][0], 90.0);
    assert_eq!(chart["daily_profits"][1], 150.0);
    assert_eq!(chart["cumulative_profits"][0], 90.0);
    assert_eq!(chart["cumulative_profits"][1], 240.0);
}

#[test]
fn double_cycle_month_reports_both_events() {
    let series = day_with_plateaus(
        1,
        &[
            (0, 23, 10.0),
            (100, 123, 100.0),
            (150, 173, 20.0),
            (200, 223, 80.0),
        ],
        288,
    );

    let result = aggregate_month(&series, CyclePolicy::TwoChargeTwoDischarge);
    let report = MonthlyReport::from(&result);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["total_profit"], 150.0);
    assert_eq!(json["total_days"], 1);

    let entry = &json["daily_profits"][0];
    assert_eq!(entry["profit"], 150.0);
    assert_eq!(entry["price_diff"], 90.0);
    assert_eq!(entry["charge_start"], "00:00");
    assert_eq!(entry["discharge_start"], "08:20");
    assert_eq!(entry["second_charge_start"], "12:30");
    assert_eq!(entry["second_charge_end"], "14:25");
    assert_eq!(entry["second_discharge_start"], "16:40");
    assert_eq!(entry["second_discharge_end"], "18:35");
    assert_eq!(entry["second_charge_price"], 20.0);
    assert_eq!(entry["second_discharge_price"], 80.0);
}

#[test]
fn double_cycle_events_never_share_slots() {
    let series = day_with_plateaus(
        1,
        &[
            (0, 23, 10.0),
            (100, 123, 100.0),
            (150, 173, 20.0),
            (200, 223, 80.0),
        ],
        288,
    );

    let result = aggregate_month(&series, CyclePolicy::TwoChargeTwoDischarge);
    let day = &result.daily_results[0];
    assert_eq!(day.events.len(), 2);

    let (first, second) = (&day.events[0], &day.events[1]);
    for window in [second.charge_window, second.discharge_window] {
        assert!(!window.overlaps(first.charge_window));
        assert!(!window.overlaps(first.discharge_window));
    }
    for event in &day.events {
        assert!(event.discharge_window.start_index > event.charge_window.end_index);
    }
}
