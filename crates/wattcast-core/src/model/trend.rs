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

use wattcast_types::RegionProfile;

use super::seasonality;

/// Linear growth per month index (no compounding: December is +22%)
pub const MONTHLY_GROWTH: f64 = 0.02;

/// Trend-based forecast for `month` (1 = January)
#[must_use]
pub fn trend(avg_units: f64, month: u32, region: &RegionProfile) -> f64 {
    let growth = 1.0 + MONTHLY_GROWTH * (f64::from(month) - 1.0);
    avg_units * growth * seasonality(month, region.climate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wattcast_types::ClimateClass;

    fn region(climate: ClimateClass) -> RegionProfile {
        RegionProfile {
            temperature: 25.0,
            humidity: 50.0,
            tariff_rate: 6.0,
            climate,
        }
    }

    #[test]
    fn test_january_has_no_growth() {
        // Cold January: 1.4 seasonal, no growth yet
        let value = trend(100.0, 1, &region(ClimateClass::Cold));
        assert!((value - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_december_growth_is_twenty_two_percent() {
        let value = trend(100.0, 12, &region(ClimateClass::Cold));
        assert!((value - 100.0 * 1.22 * 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_trend_scales_linearly_with_baseline() {
        let profile = region(ClimateClass::Humid);
        for month in 1..=12 {
            let single = trend(150.0, month, &profile);
            let double = trend(300.0, month, &profile);
            assert!((double - 2.0 * single).abs() < 1e-9);
        }
    }
}
