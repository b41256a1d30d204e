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

//! Illustrative feature-importance scores
//!
//! These are fixed ratios of the inputs, not attributions derived from the
//! forecast blend.

use tracing::debug;
use wattcast_types::{ApplianceEntry, FeatureImpact};

use crate::utils::calculate_mean;

pub const HISTORICAL_USAGE: &str = "Historical Usage";
pub const APPLIANCE_COUNT: &str = "Appliance Count";
pub const CLIMATE_TEMP: &str = "Climate/Temp";
pub const SEASONAL_VARIATION: &str = "Seasonal Variation";
pub const STATE_TARIFF: &str = "State Tariff";

/// Five feature scores in fixed order
///
/// `avg_monthly` is the average monthly units of a prior [`crate::predict`]
/// run on the same inputs; it stands in for the history mean when the
/// history is empty.
#[must_use]
pub fn explain(
    region: &str,
    bill_history: &[f64],
    appliances: &[ApplianceEntry],
    avg_monthly: f64,
) -> Vec<FeatureImpact> {
    let avg_units = calculate_mean(bill_history).unwrap_or(avg_monthly);
    let base_value = avg_monthly.max(1.0);

    #[expect(
        clippy::cast_precision_loss,
        reason = "appliance lists are far below 2^52 entries"
    )]
    let appliance_count = appliances.len() as f64;

    debug!(region = %region, avg_units, avg_monthly, "Computing feature impacts");

    vec![
        FeatureImpact::new(HISTORICAL_USAGE, avg_units / base_value * 30.0),
        FeatureImpact::new(APPLIANCE_COUNT, appliance_count / 10.0 * 25.0),
        FeatureImpact::new(CLIMATE_TEMP, 20.0),
        FeatureImpact::new(SEASONAL_VARIATION, 15.0),
        FeatureImpact::new(STATE_TARIFF, 10.0),
    ]
}
