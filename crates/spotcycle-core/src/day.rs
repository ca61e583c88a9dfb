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

//! Per-day scheduling over the two cycling policies.

use chrono::NaiveDate;
use spotcycle_types::{CycleEvent, CyclePolicy, DailyResult, PricePoint};
use tracing::debug;

use crate::round2;
use crate::window::{CycleWindows, WINDOW_SIZE, find_cycle_windows};

/// Build the schedule for one calendar day, or `None` when no cycle fits.
///
/// Under [`CyclePolicy::TwoChargeTwoDischarge`] the second search runs over
/// the same series with the first event's windows masked out, so the two
/// events can never share a time slot. A day where only the first cycle
/// fits degrades to a one-event schedule rather than failing.
pub fn schedule_day(
    date: NaiveDate,
    prices: &[PricePoint],
    policy: CyclePolicy,
) -> Option<DailyResult> {
    let first = find_cycle_windows(prices, WINDOW_SIZE, &[])?;
    let first_event = build_event(prices, &first);

    let second_event = match policy {
        CyclePolicy::OneChargeOneDischarge => None,
        CyclePolicy::TwoChargeTwoDischarge => {
            let exclusions = [first.charge, first.discharge];
            let second = find_cycle_windows(prices, WINDOW_SIZE, &exclusions);
            if second.is_none() {
                debug!(%date, "no second cycle fits, keeping the single-cycle schedule");
            }
            second.map(|windows| build_event(prices, &windows))
        }
    };

    let mut events = vec![first_event];
    events.extend(second_event);

    let total_profit = round2(events.iter().map(|event| event.profit).sum::<f64>());
    let max_price_diff = events
        .iter()
        .map(|event| event.profit)
        .fold(f64::NEG_INFINITY, f64::max);

    Some(DailyResult {
        date,
        events,
        total_profit,
        max_price_diff,
    })
}

/// Materialize selected windows into an event with rounded prices.
fn build_event(prices: &[PricePoint], windows: &CycleWindows) -> CycleEvent {
    let charge_price = round2(windows.charge_price);
    let discharge_price = round2(windows.discharge_price);

    CycleEvent {
        charge_window: windows.charge,
        discharge_window: windows.discharge,
        charge_start: prices[windows.charge.start_index].timestamp,
        charge_end: prices[windows.charge.end_index].timestamp,
        discharge_start: prices[windows.discharge.start_index].timestamp,
        discharge_end: prices[windows.discharge.end_index].timestamp,
        charge_price,
        discharge_price,
        profit: round2(discharge_price - charge_price),
    }
}
