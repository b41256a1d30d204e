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

use serde::{Deserialize, Serialize};

use crate::appliance::ApplianceCategory;

/// Forecast for a single calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyForecast {
    /// Three-letter month label (`Jan`..`Dec`)
    pub month: String,
    /// Predicted consumption, rounded
    pub units: i64,
    /// Predicted cost, rounded
    pub cost: i64,
}

/// Monthly energy (kWh) attributed to each appliance category
///
/// Every bucket is always present in the serialized form, zero when no
/// appliance contributed to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub cooling: f64,
    pub heating: f64,
    pub kitchen: f64,
    pub entertainment: f64,
    pub lighting: f64,
    pub electronics: f64,
    pub miscellaneous: f64,
}

impl CategoryBreakdown {
    #[must_use]
    pub fn get(&self, category: ApplianceCategory) -> f64 {
        match category {
            ApplianceCategory::Cooling => self.cooling,
            ApplianceCategory::Heating => self.heating,
            ApplianceCategory::Kitchen => self.kitchen,
            ApplianceCategory::Entertainment => self.entertainment,
            ApplianceCategory::Lighting => self.lighting,
            ApplianceCategory::Electronics => self.electronics,
            ApplianceCategory::Miscellaneous => self.miscellaneous,
        }
    }

    /// Accumulate `kwh` into the bucket for `category`
    pub fn add(&mut self, category: ApplianceCategory, kwh: f64) {
        let bucket = match category {
            ApplianceCategory::Cooling => &mut self.cooling,
            ApplianceCategory::Heating => &mut self.heating,
            ApplianceCategory::Kitchen => &mut self.kitchen,
            ApplianceCategory::Entertainment => &mut self.entertainment,
            ApplianceCategory::Lighting => &mut self.lighting,
            ApplianceCategory::Electronics => &mut self.electronics,
            ApplianceCategory::Miscellaneous => &mut self.miscellaneous,
        };
        *bucket += kwh;
    }

    /// Buckets in reporting order
    pub fn iter(&self) -> impl Iterator<Item = (ApplianceCategory, f64)> + '_ {
        ApplianceCategory::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, kwh)| kwh).sum()
    }
}

/// Full result of a yearly prediction run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Twelve forecasts, January first
    pub predictions: Vec<MonthlyForecast>,
    pub appliance_breakdown: CategoryBreakdown,
    /// Rounded sum of the unrounded monthly units
    pub total_annual: i64,
    /// Rounded sum of the unrounded monthly costs
    pub total_cost: i64,
    pub avg_monthly: i64,
    /// Efficiency tips in display order
    pub tips: Vec<String>,
}

/// Illustrative importance score of one input feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImpact {
    pub feature: String,
    pub impact: f64,
}

impl FeatureImpact {
    pub fn new(feature: impl Into<String>, impact: f64) -> Self {
        Self {
            feature: feature.into(),
            impact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_breakdown_serializes_all_seven_buckets() {
        let value = serde_json::to_value(CategoryBreakdown::default()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 7);
        for category in ApplianceCategory::ALL {
            assert_eq!(object[category.as_str()], serde_json::json!(0.0));
        }
    }

    #[test]
    fn add_accumulates_into_matching_bucket() {
        let mut breakdown = CategoryBreakdown::default();
        breakdown.add(ApplianceCategory::Kitchen, 10.0);
        breakdown.add(ApplianceCategory::Kitchen, 2.5);
        breakdown.add(ApplianceCategory::Lighting, 1.0);

        assert!((breakdown.kitchen - 12.5).abs() < 1e-9);
        assert!((breakdown.get(ApplianceCategory::Lighting) - 1.0).abs() < 1e-9);
        assert!((breakdown.total() - 13.5).abs() < 1e-9);
    }

    #[test]
    fn iter_follows_reporting_order() {
        let categories: Vec<_> = CategoryBreakdown::default()
            .iter()
            .map(|(category, _)| category)
            .collect();
        assert_eq!(categories, ApplianceCategory::ALL);
    }
}
