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

/// Days per month used for every kWh conversion (no calendar day counts)
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Purpose bucket an appliance's consumption is reported under
///
/// Deserialization never fails: any string that is not one of the known
/// bucket names lands in [`ApplianceCategory::Miscellaneous`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ApplianceCategory {
    Cooling,
    Heating,
    Kitchen,
    Entertainment,
    Lighting,
    Electronics,
    #[default]
    Miscellaneous,
}

impl ApplianceCategory {
    /// All buckets in reporting order
    pub const ALL: [Self; 7] = [
        Self::Cooling,
        Self::Heating,
        Self::Kitchen,
        Self::Entertainment,
        Self::Lighting,
        Self::Electronics,
        Self::Miscellaneous,
    ];

    /// Map a category name to its bucket, falling back to miscellaneous.
    /// Matching is exact (case-sensitive), like region names.
    #[must_use]
    pub fn parse(name: &str) -> Self {
        match name {
            "cooling" => Self::Cooling,
            "heating" => Self::Heating,
            "kitchen" => Self::Kitchen,
            "entertainment" => Self::Entertainment,
            "lighting" => Self::Lighting,
            "electronics" => Self::Electronics,
            _ => Self::Miscellaneous,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cooling => "cooling",
            Self::Heating => "heating",
            Self::Kitchen => "kitchen",
            Self::Entertainment => "entertainment",
            Self::Lighting => "lighting",
            Self::Electronics => "electronics",
            Self::Miscellaneous => "miscellaneous",
        }
    }
}

impl From<&str> for ApplianceCategory {
    fn from(name: &str) -> Self {
        Self::parse(name)
    }
}

impl From<String> for ApplianceCategory {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl fmt::Display for ApplianceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One appliance owned by the household
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplianceEntry {
    /// Display name, not used in any computation
    pub name: String,

    /// Rated power draw (W)
    #[serde(rename = "watts")]
    pub power_watts: u32,

    /// Average hours of use per day
    #[serde(rename = "hours")]
    pub daily_hours: f64,

    #[serde(default)]
    pub category: ApplianceCategory,
}

impl ApplianceEntry {
    pub fn new(
        name: impl Into<String>,
        power_watts: u32,
        daily_hours: f64,
        category: ApplianceCategory,
    ) -> Self {
        Self {
            name: name.into(),
            power_watts,
            daily_hours,
            category,
        }
    }

    /// Energy drawn over a 30-day month (kWh)
    #[must_use]
    pub fn monthly_kwh(&self) -> f64 {
        f64::from(self.power_watts) * self.daily_hours * DAYS_PER_MONTH / 1000.0
    }
}

/// Appliance preset offered to clients when building an appliance list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceArchetype {
    pub name: String,
    pub default_watts: u32,
    pub category: ApplianceCategory,
}
