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

use wattcast_types::{ApplianceEntry, RegionProfile};

/// Weight of historical usage in the regression baseline
pub const HISTORY_WEIGHT: f64 = 1.1;

/// Reference temperature (°C) with no temperature adjustment
pub const REFERENCE_TEMPERATURE: f64 = 25.0;
/// Adjustment per °C above the reference
pub const TEMPERATURE_SENSITIVITY: f64 = 0.01;

/// Reference relative humidity (%) with no humidity adjustment
pub const REFERENCE_HUMIDITY: f64 = 50.0;
/// Adjustment per humidity percentage point above the reference
pub const HUMIDITY_SENSITIVITY: f64 = 0.005;

/// Fixed population factor, identical for every region
pub const POPULATION_FACTOR: f64 = 1.05;

/// Combined monthly draw of all appliances (kWh over a 30-day month)
#[must_use]
pub fn appliance_energy_kwh(appliances: &[ApplianceEntry]) -> f64 {
    appliances.iter().map(ApplianceEntry::monthly_kwh).sum()
}

/// Load-regression forecast for one month
///
/// Independent of the month index: history and appliances are scaled by the
/// region's temperature, humidity and population factors.
#[must_use]
pub fn load_regression(avg_units: f64, appliances: &[ApplianceEntry], region: &RegionProfile) -> f64 {
    let base = avg_units * HISTORY_WEIGHT + appliance_energy_kwh(appliances);

    base * (1.0 + (region.temperature - REFERENCE_TEMPERATURE) * TEMPERATURE_SENSITIVITY)
        * (1.0 + (region.humidity - REFERENCE_HUMIDITY) * HUMIDITY_SENSITIVITY)
        * POPULATION_FACTOR
}
