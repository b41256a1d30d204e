// Copyright (c) 2025 SOLARE S.R.O.
//
// This file is part of WattCast.
//
// Licensed under the Creative Commons Attribution-NonCommercial-NoDerivatives 4.0 International
// (CC BY-NC-ND 4.0). You may use and share this file for non-commercial purposes only and you may not
// create derivatives. See <https://creativecommons.org/licenses/by-nc-nd/4.0/>.
//
// This software is provided "AS IS", without warranty of any kind.
//
// For commercial licensing, please contact: info@solare.cz

use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative climate label of a region
///
/// Drives the seasonal curve of the trend component, the category
/// adjustments of the breakdown and the choice of efficiency tips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClimateClass {
    Cold,
    Desert,
    HotDry,
    HotHumid,
    Humid,
    Moderate,
    Pleasant,
    Extreme,
}

impl ClimateClass {
    /// Wire name of the climate class (e.g. `hot-dry`)
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cold => "cold",
            Self::Desert => "desert",
            Self::HotDry => "hot-dry",
            Self::HotHumid => "hot-humid",
            Self::Humid => "humid",
            Self::Moderate => "moderate",
            Self::Pleasant => "pleasant",
            Self::Extreme => "extreme",
        }
    }
}

impl fmt::Display for ClimateClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static climate and tariff reference data for a state or territory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    /// Reference temperature (°C)
    #[serde(rename = "temp")]
    pub temperature: f64,

    /// Reference relative humidity (%)
    pub humidity: f64,

    /// Electricity price per unit (kWh)
    #[serde(rename = "tariff")]
    pub tariff_rate: f64,

    pub climate: ClimateClass,
}
