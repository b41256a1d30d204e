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

//! Per-category redistribution of appliance consumption
//!
//! Each appliance's 30-day draw is adjusted by a region-conditional
//! multiplier for its own category only, then accumulated into its bucket.
//! The sum over all buckets always equals the sum of the adjusted draws.

use wattcast_types::{
    ApplianceCategory, ApplianceEntry, CategoryBreakdown, ClimateClass, RegionProfile,
};

/// Temperature (°C) from which cooling appliances run harder
pub const HOT_REGION_TEMPERATURE: f64 = 30.0;
/// Humidity (%) from which kitchen appliances run harder
pub const HUMID_KITCHEN_THRESHOLD: f64 = 70.0;

/// Monthly draw of `appliance` after its category's regional adjustment
#[must_use]
pub fn adjusted_kwh(appliance: &ApplianceEntry, region: &RegionProfile) -> f64 {
    let monthly_kwh = appliance.monthly_kwh();

    match appliance.category {
        ApplianceCategory::Cooling => {
            let mut adjusted = if region.temperature >= HOT_REGION_TEMPERATURE {
                monthly_kwh * 1.2
            } else {
                monthly_kwh * 0.9
            };
            // Stacks with the temperature factor
            if matches!(region.climate, ClimateClass::HotHumid | ClimateClass::Humid) {
                adjusted *= 1.1;
            }
            adjusted
        }
        ApplianceCategory::Heating => {
            if region.climate == ClimateClass::Cold {
                monthly_kwh * 1.3
            } else {
                monthly_kwh * 0.9
            }
        }
        ApplianceCategory::Kitchen if region.humidity >= HUMID_KITCHEN_THRESHOLD => {
            monthly_kwh * 1.1
        }
        ApplianceCategory::Kitchen
        | ApplianceCategory::Entertainment
        | ApplianceCategory::Lighting
        | ApplianceCategory::Electronics
        | ApplianceCategory::Miscellaneous => monthly_kwh,
    }
}

/// Accumulate every appliance's adjusted draw into its category bucket
#[must_use]
pub fn category_breakdown(appliances: &[ApplianceEntry], region: &RegionProfile) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::default();
    for appliance in appliances {
        breakdown.add(appliance.category, adjusted_kwh(appliance, region));
    }
    breakdown
}
