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

//! Twelve-month forecast blender
//!
//! For each month January..December the trend and load-regression
//! components are blended with fixed weights, floored at
//! [`MIN_MONTHLY_UNITS`] and priced at the region's tariff.
//!
//! ## Rounding
//!
//! Per-month display values are rounded individually. Annual totals and the
//! monthly average are computed from the unrounded monthly figures and
//! rounded once, so `total_annual` can differ from the sum of the displayed
//! monthly units.

use tracing::debug;
use wattcast_types::{ApplianceEntry, MonthlyForecast, PredictionResult, RegionProfile};

use crate::breakdown::category_breakdown;
use crate::model::{load_regression, trend};
use crate::regions;
use crate::tips::generate_tips;
use crate::utils::{calculate_mean, round_half_even};

/// Baseline monthly usage assumed when no bill history is supplied
pub const DEFAULT_AVG_UNITS: f64 = 250.0;

/// No month is ever forecast below this many units
pub const MIN_MONTHLY_UNITS: f64 = 50.0;

pub const TREND_WEIGHT: f64 = 0.4;
pub const REGRESSION_WEIGHT: f64 = 0.6;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Unrounded forecast for one month
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthFigures {
    /// 1 = January .. 12 = December
    pub month: u32,
    pub units: f64,
    pub cost: f64,
}

/// Baseline usage: mean of the bill history, or [`DEFAULT_AVG_UNITS`]
#[must_use]
pub fn baseline_units(bill_history: &[f64]) -> f64 {
    calculate_mean(bill_history).unwrap_or(DEFAULT_AVG_UNITS)
}

/// Blend both components for every month, in calendar order
#[must_use]
pub fn forecast_months(
    avg_units: f64,
    appliances: &[ApplianceEntry],
    region: &RegionProfile,
) -> Vec<MonthFigures> {
    // Month-independent
    let regression = load_regression(avg_units, appliances, region);

    (1..=12)
        .map(|month| {
            let blended = trend(avg_units, month, region) * TREND_WEIGHT
                + regression * REGRESSION_WEIGHT;
            let units = blended.max(MIN_MONTHLY_UNITS);
            MonthFigures {
                month,
                units,
                cost: units * region.tariff_rate,
            }
        })
        .collect()
}

/// Predict the coming year's consumption, cost, breakdown and tips
///
/// Never fails: unknown regions use the default region, unknown appliance
/// categories count as miscellaneous and an empty history uses
/// [`DEFAULT_AVG_UNITS`].
#[must_use]
pub fn predict(region: &str, bill_history: &[f64], appliances: &[ApplianceEntry]) -> PredictionResult {
    let profile = regions::lookup(region);
    let avg_units = baseline_units(bill_history);

    let months = forecast_months(avg_units, appliances, profile);

    let mut total_units = 0.0;
    let mut total_cost = 0.0;
    let mut predictions = Vec::with_capacity(MONTH_LABELS.len());

    for (figures, label) in months.iter().zip(MONTH_LABELS) {
        total_units += figures.units;
        total_cost += figures.cost;

        predictions.push(MonthlyForecast {
            month: label.to_owned(),
            units: round_half_even(figures.units),
            cost: round_half_even(figures.cost),
        });
    }

    let appliance_breakdown = category_breakdown(appliances, profile);
    let tips = generate_tips(profile.climate, &appliance_breakdown);

    let result = PredictionResult {
        predictions,
        appliance_breakdown,
        total_annual: round_half_even(total_units),
        total_cost: round_half_even(total_cost),
        avg_monthly: round_half_even(total_units / 12.0),
        tips,
    };

    debug!(
        region = %region,
        avg_units,
        appliances = appliances.len(),
        total_annual = result.total_annual,
        total_cost = result.total_cost,
        "Prediction complete"
    );

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use wattcast_types::{ApplianceCategory, CategoryBreakdown};

    fn air_conditioner() -> ApplianceEntry {
        ApplianceEntry::new("Air Conditioner", 1500, 5.0, ApplianceCategory::Cooling)
    }

    fn delhi_scenario() -> PredictionResult {
        predict("Delhi", &[300.0, 320.0, 310.0], &[air_conditioner()])
    }

    #[test]
    fn test_twelve_months_in_calendar_order() {
        for region in regions::names() {
            let result = predict(region, &[120.0], &[air_conditioner()]);
            let labels: Vec<_> = result.predictions.iter().map(|p| p.month.as_str()).collect();
            assert_eq!(labels, MONTH_LABELS);
        }
    }

    #[test]
    fn test_units_never_below_floor() {
        for region in regions::names() {
            let result = predict(region, &[0.0], &[]);
            for forecast in &result.predictions {
                assert!(forecast.units >= 50, "{region} {}: {}", forecast.month, forecast.units);
            }
        }
    }

    #[test]
    fn test_zero_usage_is_floored_everywhere() {
        let result = predict("Atlantis", &[0.0], &[]);

        // Delhi tariff 6.5
        assert!(result.predictions.iter().all(|p| p.units == 50 && p.cost == 325));
        assert_eq!(result.total_annual, 600);
        assert_eq!(result.total_cost, 3900);
        assert_eq!(result.avg_monthly, 50);
    }

    #[test]
    fn test_delhi_monthly_values() {
        let result = delhi_scenario();

        let units: Vec<_> = result.predictions.iter().map(|p| p.units).collect();
        let costs: Vec<_> = result.predictions.iter().map(|p| p.cost).collect();

        assert_eq!(units, vec![534, 556, 573, 581, 579, 567, 549, 530, 517, 513, 520, 539]);
        assert_eq!(
            costs,
            vec![3472, 3611, 3722, 3777, 3763, 3686, 3569, 3447, 3358, 3332, 3382, 3502]
        );
        assert_eq!(result.avg_monthly, 546);
    }

    #[test]
    fn test_totals_round_after_summing_raw_values() {
        let result = delhi_scenario();

        let sum_of_rounded_units: i64 = result.predictions.iter().map(|p| p.units).sum();
        let sum_of_rounded_costs: i64 = result.predictions.iter().map(|p| p.cost).sum();

        // Raw sums: 6556.89 units, 42619.81 cost
        assert_eq!(result.total_annual, 6557);
        assert_eq!(result.total_cost, 42620);
        assert_eq!(sum_of_rounded_units, 6558);
        assert_eq!(sum_of_rounded_costs, 42621);
        assert_ne!(result.total_annual, sum_of_rounded_units);
    }

    #[test]
    fn test_empty_history_uses_default_baseline() {
        assert_eq!(baseline_units(&[]), DEFAULT_AVG_UNITS);
        assert!((baseline_units(&[300.0, 320.0, 310.0]) - 310.0).abs() < 1e-9);

        let empty = predict("Rajasthan", &[], &[]);
        let explicit = predict("Rajasthan", &[250.0], &[]);
        assert_eq!(empty, explicit);
        assert_eq!(empty.total_annual, 3653);
        assert_eq!(empty.avg_monthly, 304);
    }

    #[test]
    fn test_cold_region_heater_scenario() {
        let heater = ApplianceEntry::new("Heater", 2000, 3.0, ApplianceCategory::Heating);
        let result = predict("Himachal Pradesh", &[], &[heater]);

        assert_eq!(result.predictions[0].units, 413);
        assert_eq!(result.predictions[2].units, 356);
        assert_eq!(result.predictions[11].units, 444);
        assert_eq!(result.total_annual, 4682);
        assert_eq!(result.total_cost, 24345);
        assert_eq!(result.avg_monthly, 390);
        assert!((result.appliance_breakdown.heating - 234.0).abs() < 1e-9);
        assert_eq!(result.tips.len(), 6);
        assert_eq!(result.tips[3], crate::tips::HEATING_TIP);
    }

    #[test]
    fn test_breakdown_and_tips_attached() {
        let result = delhi_scenario();

        let expected = CategoryBreakdown {
            cooling: 270.0,
            ..CategoryBreakdown::default()
        };
        assert!((result.appliance_breakdown.cooling - expected.cooling).abs() < 1e-9);
        assert!((result.appliance_breakdown.total() - 270.0).abs() < 1e-9);
        assert_eq!(result.tips.len(), 5);
        assert_eq!(result.tips[2], crate::tips::COOLING_TIP);
    }

    #[test]
    fn test_raw_month_figures_blend_components() {
        let delhi = regions::lookup("Delhi");
        let appliances = [air_conditioner()];
        let months = forecast_months(310.0, &appliances, delhi);

        assert_eq!(months.len(), 12);
        let regression = load_regression(310.0, &appliances, delhi);
        for figures in &months {
            let expected = trend(310.0, figures.month, delhi) * 0.4 + regression * 0.6;
            assert!((figures.units - expected).abs() < 1e-9);
            assert!((figures.cost - expected * 6.5).abs() < 1e-9);
        }
    }
}
