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

//! Lowest- and highest-mean window search within a single day.

use spotcycle_types::{PricePoint, PriceWindow};
use tracing::trace;

/// Samples per charge or discharge window: two hours at 5-minute cadence.
pub const WINDOW_SIZE: usize = 24;

/// Windows selected for one cycle, with their raw mean prices.
///
/// The means are carried unrounded; rounding happens once, when the event
/// is constructed, so a second scan never compounds rounding error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleWindows {
    pub charge: PriceWindow,
    pub discharge: PriceWindow,
    pub charge_price: f64,
    pub discharge_price: f64,
}

/// Find the cheapest `window_size`-sample window and, strictly after it,
/// the most expensive one.
///
/// Indices covered by `exclusions` (inclusive ranges over the same index
/// space as `prices`) are unusable, and a candidate window must consist
/// entirely of usable indices. Ties go to the earliest start. Returns
/// `None` when the day holds fewer than `2 * window_size` samples or when
/// either scan runs out of candidates; absence of a schedule is an
/// expected outcome, not an error.
pub fn find_cycle_windows(
    prices: &[PricePoint],
    window_size: usize,
    exclusions: &[PriceWindow],
) -> Option<CycleWindows> {
    if window_size == 0 || prices.len() < 2 * window_size {
        trace!(
            samples = prices.len(),
            needed = 2 * window_size,
            "not enough samples for a charge/discharge pair"
        );
        return None;
    }

    let mut usable = vec![true; prices.len()];
    for range in exclusions {
        for slot in usable
            .iter_mut()
            .skip(range.start_index)
            .take(range.sample_count())
        {
            *slot = false;
        }
    }

    let last_start = prices.len() - window_size;

    let mut charge: Option<PriceWindow> = None;
    let mut charge_price = f64::INFINITY;
    for start in 0..=last_start {
        let end = start + window_size - 1;
        if !usable[start..=end].iter().all(|&ok| ok) {
            continue;
        }
        let mean = mean_price(&prices[start..=end]);
        if mean < charge_price {
            charge_price = mean;
            charge = Some(PriceWindow {
                start_index: start,
                end_index: end,
            });
        }
    }
    let charge = charge?;

    let mut discharge: Option<PriceWindow> = None;
    let mut discharge_price = f64::NEG_INFINITY;
    for start in (charge.end_index + 1)..=last_start {
        let end = start + window_size - 1;
        if !usable[start..=end].iter().all(|&ok| ok) {
            continue;
        }
        let mean = mean_price(&prices[start..=end]);
        if mean > discharge_price {
            discharge_price = mean;
            discharge = Some(PriceWindow {
                start_index: start,
                end_index: end,
            });
        }
    }
    let discharge = discharge?;

    trace!(
        charge_start = charge.start_index,
        discharge_start = discharge.start_index,
        "selected cycle windows"
    );

    Some(CycleWindows {
        charge,
        discharge,
        charge_price,
        discharge_price,
    })
}

#[expect(
    clippy::cast_precision_loss,
    reason = "window sizes never exceed mantissa precision"
)]
fn mean_price(samples: &[PricePoint]) -> f64 {
    let total: f64 = samples.iter().map(|point| point.price).sum();
    total / samples.len() as f64
}
