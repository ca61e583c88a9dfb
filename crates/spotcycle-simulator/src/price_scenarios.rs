// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of SpotCycle.

//! Price scenario definitions for monthly simulation.
//!
//! Scenarios produce a full month of 5-minute spot-price samples that
//! represent typical market conditions:
//!
//! - **Usual Month**: cheap overnight, elevated day, noon dip, evening peak
//! - **Volatile**: large swings with strong arbitrage spreads
//! - **Negative Midday**: renewable-surplus periods below zero
//! - **Sparse Tail**: final day truncated below two window lengths

use chrono::{Datelike, Duration, NaiveDate, TimeZone, Utc};
use rand::Rng;
use spotcycle_types::PricePoint;

/// Samples per full day at 5-minute cadence.
pub const SAMPLES_PER_DAY: usize = 288;

/// Price scenario types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceScenario {
    /// "Usual month" - every day cheap overnight, elevated day, evening peak
    UsualMonth,

    /// Volatile prices with significant swings (5-160 EUR range)
    Volatile,

    /// Contains negative price periods around midday (renewable surplus)
    NegativeMidday,

    /// Usual pattern with a truncated final day (too short to schedule)
    SparseTail,
}

impl PriceScenario {
    /// Get the human-readable name of this scenario
    pub fn name(self) -> &'static str {
        match self {
            Self::UsualMonth => "Usual Month",
            Self::Volatile => "Volatile Prices",
            Self::NegativeMidday => "Negative Midday",
            Self::SparseTail => "Sparse Tail",
        }
    }

    /// Look up a scenario by its CLI identifier
    pub fn from_id(id: &str) -> Option<Self> {
        PRICE_PRESETS
            .iter()
            .find(|preset| preset.id == id)
            .map(|preset| preset.scenario)
    }

    /// Generate one month of 5-minute price samples
    pub fn generate(self, year: i32, month: u32) -> Vec<PricePoint> {
        let days = days_in_month(year, month);
        let mut samples = Vec::with_capacity(days as usize * SAMPLES_PER_DAY);

        for day in 1..=days {
            let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid day of month");
            let day_prices = match self {
                Self::UsualMonth | Self::SparseTail => usual_day_prices(),
                Self::Volatile => volatile_day_prices(),
                Self::NegativeMidday => negative_midday_prices(),
            };
            let keep = if self == Self::SparseTail && day == days {
                // leaves fewer than two window lengths on the last day
                40
            } else {
                day_prices.len()
            };

            let base = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).expect("valid time"));
            samples.extend(
                day_prices
                    .into_iter()
                    .take(keep)
                    .enumerate()
                    .map(|(i, price)| PricePoint::new(base + Duration::minutes(i as i64 * 5), price)),
            );
        }

        samples
    }
}

/// Price scenario preset with metadata
#[derive(Debug, Clone)]
pub struct PriceScenarioPreset {
    /// Unique identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Description
    pub description: &'static str,
    /// The scenario
    pub scenario: PriceScenario,
}

/// Available price scenario presets
pub const PRICE_PRESETS: &[PriceScenarioPreset] = &[
    PriceScenarioPreset {
        id: "usual_month",
        name: "Usual Month",
        description: "Cheap overnight (0-6), elevated day (6-12, 14-17), noon dip (12-14), evening peak (17-20)",
        scenario: PriceScenario::UsualMonth,
    },
    PriceScenarioPreset {
        id: "volatile",
        name: "Volatile",
        description: "Large price swings throughout each day, strong arbitrage spreads",
        scenario: PriceScenario::Volatile,
    },
    PriceScenarioPreset {
        id: "negative",
        name: "Negative Midday",
        description: "Includes negative price periods during midday (high renewable generation)",
        scenario: PriceScenario::NegativeMidday,
    },
    PriceScenarioPreset {
        id: "sparse",
        name: "Sparse Tail",
        description: "Usual pattern with a final day too short to schedule",
        scenario: PriceScenario::SparseTail,
    },
];

fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next_month
        .and_then(|date| date.pred_opt())
        .map(|date| date.day())
        .expect("valid month")
}

/// Generate the "usual day" price pattern (EUR/MWh)
///
/// Pattern:
/// - 00:00-06:00: 32 (cheap overnight)
/// - 06:00-12:00: 78 (morning elevated)
/// - 12:00-14:00: 55 (noon dip - solar surplus)
/// - 14:00-17:00: 70 (afternoon)
/// - 17:00-20:00: 112 (evening peak)
/// - 20:00-24:00: 52 (late evening decline)
fn usual_day_prices() -> Vec<f64> {
    let mut rng = rand::thread_rng();

    (0..SAMPLES_PER_DAY)
        .map(|i| {
            let hour = i / 12;
            let base_price = match hour {
                0..=5 => 32.0,
                6..=11 => 78.0,
                12..=13 => 55.0,
                14..=16 => 70.0,
                17..=19 => 112.0,
                _ => 52.0,
            };

            // Add small random noise (+/- 10%)
            let noise = rng.gen_range(-0.10..0.10);
            base_price * (1.0 + noise)
        })
        .collect()
}

/// Generate a volatile price pattern with deep valleys and sharp spikes
fn volatile_day_prices() -> Vec<f64> {
    let mut rng = rand::thread_rng();

    (0..SAMPLES_PER_DAY)
        .map(|i| {
            let hour = i / 12;
            let (low, high) = match hour {
                0..=2 => (8.0, 18.0),     // deep overnight valley
                3..=5 => (25.0, 40.0),    // morning ramp
                6..=8 => (90.0, 130.0),   // morning spike
                9..=11 => (45.0, 70.0),   // moderate
                12..=14 => (15.0, 30.0),  // solar dip
                15..=16 => (60.0, 85.0),  // afternoon ramp
                17..=19 => (120.0, 160.0), // extreme evening peak
                20..=21 => (55.0, 80.0),  // decline
                _ => (20.0, 35.0),        // night
            };
            rng.gen_range(low..high)
        })
        .collect()
}

/// Generate the usual pattern with negative prices between 11:00 and 14:00
fn negative_midday_prices() -> Vec<f64> {
    let mut rng = rand::thread_rng();

    (0..SAMPLES_PER_DAY)
        .map(|i| {
            let hour = i / 12;
            let base_price: f64 = match hour {
                0..=5 => 32.0,
                6..=10 => 75.0,
                11..=13 => -8.0, // NEGATIVE - renewable surplus
                14..=16 => 62.0,
                17..=19 => 110.0,
                _ => 52.0,
            };

            let noise_range = if base_price < 0.0 { 0.3 } else { 0.1 };
            let noise: f64 = rng.gen_range(-noise_range..noise_range);
            base_price + base_price.abs() * noise
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usual_month_covers_every_day_at_cadence() {
        let samples = PriceScenario::UsualMonth.generate(2024, 1);
        assert_eq!(samples.len(), 31 * SAMPLES_PER_DAY);

        // strictly increasing timestamps, 5 minutes apart within a day
        for pair in samples.windows(2) {
            assert!(pair[1].timestamp > pair[0].timestamp);
        }
    }

    #[test]
    fn usual_day_evening_peak_beats_overnight() {
        let prices = usual_day_prices();

        let night_avg: f64 = prices[0..72].iter().sum::<f64>() / 72.0;
        let evening_avg: f64 = prices[204..240].iter().sum::<f64>() / 36.0;

        assert!(
            evening_avg > night_avg * 2.0,
            "evening peak ({evening_avg:.2}) should be at least 2x overnight ({night_avg:.2})"
        );
    }

    #[test]
    fn negative_scenario_dips_below_zero() {
        let prices = negative_midday_prices();
        let has_negative = prices[132..168].iter().any(|&price| price < 0.0);
        assert!(has_negative, "should have negative prices around midday");
    }

    #[test]
    fn sparse_tail_truncates_the_final_day() {
        let samples = PriceScenario::SparseTail.generate(2023, 2);
        assert_eq!(samples.len(), 27 * SAMPLES_PER_DAY + 40);
    }

    #[test]
    fn all_presets_resolve_and_generate() {
        for preset in PRICE_PRESETS {
            assert_eq!(PriceScenario::from_id(preset.id), Some(preset.scenario));
            let samples = preset.scenario.generate(2024, 6);
            assert!(!samples.is_empty(), "preset '{}' generated nothing", preset.id);
        }
    }
}
