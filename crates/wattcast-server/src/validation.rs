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

//! Semantic checks on prediction requests
//!
//! Structural problems (missing fields, wrong types) are rejected by the
//! JSON extractor before these checks run. The engine itself never rejects
//! input, so out-of-range readings are caught here.

use serde::{Deserialize, Serialize};
use wattcast_core::ApplianceEntry;

pub const MAX_DAILY_HOURS: f64 = 24.0;

/// A single rejected field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Field path (e.g., "appliances[2].hours")
    pub field: String,
    /// Human-readable error message
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collected issues; valid when empty
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(ValidationIssue::new(field, message));
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

pub fn validate_bill_history(bill_history: &[f64], result: &mut ValidationResult) {
    for (i, reading) in bill_history.iter().enumerate() {
        if !reading.is_finite() {
            result.add_error(format!("bill_history[{i}]"), "must be a finite number");
        } else if *reading < 0.0 {
            result.add_error(format!("bill_history[{i}]"), "must be >= 0");
        }
    }
}

pub fn validate_appliances(appliances: &[ApplianceEntry], result: &mut ValidationResult) {
    for (i, appliance) in appliances.iter().enumerate() {
        let hours = appliance.daily_hours;
        if !hours.is_finite() || !(0.0..=MAX_DAILY_HOURS).contains(&hours) {
            result.add_error(
                format!("appliances[{i}].hours"),
                format!("must be between 0 and {MAX_DAILY_HOURS}"),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wattcast_core::ApplianceCategory;

    #[test]
    fn test_valid_inputs() {
        let mut result = ValidationResult::default();
        validate_bill_history(&[0.0, 310.5], &mut result);
        validate_appliances(
            &[
                ApplianceEntry::new("Fridge", 150, 24.0, ApplianceCategory::Kitchen),
                ApplianceEntry::new("Spare", 0, 0.0, ApplianceCategory::Miscellaneous),
            ],
            &mut result,
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_negative_and_non_finite_readings() {
        let mut result = ValidationResult::default();
        validate_bill_history(&[100.0, -1.0, f64::NAN], &mut result);

        assert_eq!(
            result.errors,
            vec![
                ValidationIssue::new("bill_history[1]", "must be >= 0"),
                ValidationIssue::new("bill_history[2]", "must be a finite number"),
            ]
        );
    }

    #[test]
    fn test_hours_outside_day_rejected() {
        let mut result = ValidationResult::default();
        validate_appliances(
            &[
                ApplianceEntry::new("AC", 1500, 25.0, ApplianceCategory::Cooling),
                ApplianceEntry::new("Fan", 75, -2.0, ApplianceCategory::Cooling),
                ApplianceEntry::new("TV", 100, 4.0, ApplianceCategory::Entertainment),
            ],
            &mut result,
        );

        let fields: Vec<_> = result.errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["appliances[0].hours", "appliances[1].hours"]);
    }
}
