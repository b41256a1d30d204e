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

//! Seasonal demand multiplier
//!
//! Cold and hot-dry climates have a hard step between a high and a low
//! season. All other climates follow a smooth ±30% sinusoid over the year.

use std::f64::consts::PI;

use wattcast_types::ClimateClass;

/// Multiplier for the cold climate's winter months (October-February)
pub const COLD_WINTER: f64 = 1.4;
pub const COLD_SUMMER: f64 = 0.8;

/// Multiplier for desert and hot-dry climates in April-July
pub const HOT_SEASON: f64 = 1.5;
pub const HOT_OFF_SEASON: f64 = 0.9;

/// Amplitude of the sinusoidal swing for the remaining climates
pub const SINUSOID_AMPLITUDE: f64 = 0.3;

/// Seasonal multiplier for `month` (1 = January .. 12 = December)
#[must_use]
pub fn seasonality(month: u32, climate: ClimateClass) -> f64 {
    match climate {
        ClimateClass::Cold => {
            if month >= 10 || month <= 2 {
                COLD_WINTER
            } else {
                COLD_SUMMER
            }
        }
        ClimateClass::Desert | ClimateClass::HotDry => {
            if (4..=7).contains(&month) {
                HOT_SEASON
            } else {
                HOT_OFF_SEASON
            }
        }
        ClimateClass::HotHumid
        | ClimateClass::Humid
        | ClimateClass::Moderate
        | ClimateClass::Pleasant
        | ClimateClass::Extreme => 1.0 + phase(month) * SINUSOID_AMPLITUDE,
    }
}

/// Position on a 12-month sine wave: zero in January, +1 in April, -1 in October
fn phase(month: u32) -> f64 {
    ((f64::from(month) - 1.0) * PI / 6.0).sin()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_cold_climate_winter_step() {
        assert_eq!(seasonality(12, ClimateClass::Cold), COLD_WINTER);
        assert_eq!(seasonality(6, ClimateClass::Cold), COLD_SUMMER);

        // Boundaries of the winter window
        assert_eq!(seasonality(1, ClimateClass::Cold), COLD_WINTER);
        assert_eq!(seasonality(2, ClimateClass::Cold), COLD_WINTER);
        assert_eq!(seasonality(3, ClimateClass::Cold), COLD_SUMMER);
        assert_eq!(seasonality(9, ClimateClass::Cold), COLD_SUMMER);
        assert_eq!(seasonality(10, ClimateClass::Cold), COLD_WINTER);
    }

    #[test]
    fn test_hot_dry_climates_share_the_summer_step() {
        for climate in [ClimateClass::Desert, ClimateClass::HotDry] {
            assert_eq!(seasonality(3, climate), HOT_OFF_SEASON);
            assert_eq!(seasonality(4, climate), HOT_SEASON);
            assert_eq!(seasonality(7, climate), HOT_SEASON);
            assert_eq!(seasonality(8, climate), HOT_OFF_SEASON);
        }
    }

    #[test]
    fn test_other_climates_follow_sinusoid() {
        let climate = ClimateClass::Moderate;

        assert_close(seasonality(1, climate), 1.0);
        assert_close(seasonality(4, climate), 1.3);
        assert_close(seasonality(7, climate), 1.0);
        assert_close(seasonality(10, climate), 0.7);
        assert_close(seasonality(2, climate), 1.15);
    }

    #[test]
    fn test_sinusoid_stays_within_amplitude() {
        for month in 1..=12 {
            let factor = seasonality(month, ClimateClass::Humid);
            assert!((0.7 - 1e-9..=1.3 + 1e-9).contains(&factor));
        }
    }
}
