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

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Daily cycling policy selected by the caller.
///
/// The wire format uses the snake_case identifiers
/// (`one_charge_one_discharge`, `two_charge_two_discharge`). Anything else
/// is rejected at the boundary; an unknown policy must never masquerade as
/// a month with zero profitable days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CyclePolicy {
    /// One charge window followed by one discharge window per day
    #[default]
    OneChargeOneDischarge,

    /// Two disjoint charge/discharge cycles per day
    TwoChargeTwoDischarge,
}

impl CyclePolicy {
    /// Wire identifier for this policy
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneChargeOneDischarge => "one_charge_one_discharge",
            Self::TwoChargeTwoDischarge => "two_charge_two_discharge",
        }
    }
}

impl fmt::Display for CyclePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a policy string matches neither recognized value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unrecognized cycle policy '{0}', expected 'one_charge_one_discharge' or 'two_charge_two_discharge'"
)]
pub struct PolicyParseError(pub String);

impl FromStr for CyclePolicy {
    type Err = PolicyParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "one_charge_one_discharge" => Ok(Self::OneChargeOneDischarge),
            "two_charge_two_discharge" => Ok(Self::TwoChargeTwoDischarge),
            other => Err(PolicyParseError(other.to_owned())),
        }
    }
}
