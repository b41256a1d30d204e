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

//! Parsers for the compact command-line input forms

use std::str::FromStr;

use thiserror::Error;
use wattcast_core::{ApplianceCategory, ApplianceEntry};

const MAX_DAILY_HOURS: f64 = 24.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("expected NAME:WATTS:HOURS[:CATEGORY], got '{0}'")]
    Format(String),

    #[error("invalid wattage '{0}', expected a whole number of watts")]
    Watts(String),

    #[error("invalid daily hours '{0}', expected a number between 0 and 24")]
    Hours(String),

    #[error("invalid bill reading '{0}', expected a non-negative number")]
    Bill(String),
}

/// Appliance given on the command line as `NAME:WATTS:HOURS[:CATEGORY]`
#[derive(Debug, Clone, PartialEq)]
pub struct ApplianceArg(pub ApplianceEntry);

impl FromStr for ApplianceArg {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = input.split(':').map(str::trim).collect();

        let (name, watts, hours, category) = match parts.as_slice() {
            [name, watts, hours] => (*name, *watts, *hours, None),
            [name, watts, hours, category] => (*name, *watts, *hours, Some(*category)),
            _ => return Err(InputError::Format(input.to_owned())),
        };
        if name.is_empty() {
            return Err(InputError::Format(input.to_owned()));
        }

        let power_watts: u32 = watts
            .parse()
            .map_err(|_| InputError::Watts(watts.to_owned()))?;

        let daily_hours: f64 = hours
            .parse()
            .ok()
            .filter(|h: &f64| h.is_finite() && (0.0..=MAX_DAILY_HOURS).contains(h))
            .ok_or_else(|| InputError::Hours(hours.to_owned()))?;

        let category = category.map(ApplianceCategory::parse).unwrap_or_default();

        Ok(Self(ApplianceEntry::new(
            name,
            power_watts,
            daily_hours,
            category,
        )))
    }
}

/// clap value parser for `--bill`
pub fn parse_bill(input: &str) -> Result<f64, InputError> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|units| units.is_finite() && *units >= 0.0)
        .ok_or_else(|| InputError::Bill(input.to_owned()))
}
