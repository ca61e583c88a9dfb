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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single spot-price sample.
///
/// Samples arrive at a fixed 5-minute cadence with strictly increasing,
/// duplicate-free timestamps and finite prices; the ingestion layer
/// guarantees all of that before a series reaches the scheduler, and the
/// scheduler does not re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp: DateTime<Utc>,

    /// Market price for 1 MWh delivered in this interval
    pub price: f64,
}

impl PricePoint {
    pub fn new(timestamp: DateTime<Utc>, price: f64) -> Self {
        Self { timestamp, price }
    }
}
