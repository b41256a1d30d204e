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

//! WattCast prediction engine
//!
//! Deterministic, heuristic yearly electricity forecast for a household:
//! monthly units and cost, a per-category breakdown of appliance
//! consumption, efficiency tips and illustrative feature scores.
//!
//! Everything here is pure and synchronous. The region and appliance
//! catalogs are immutable process-wide tables safe for concurrent readers.

pub mod appliances;
pub mod breakdown;
pub mod explain;
pub mod forecast;
pub mod model;
pub mod regions;
pub mod tips;
pub mod utils;

pub use breakdown::category_breakdown;
pub use explain::explain;
pub use forecast::{DEFAULT_AVG_UNITS, MIN_MONTHLY_UNITS, MONTH_LABELS, predict};
pub use tips::generate_tips;
pub use utils::{calculate_mean, round_half_even};

// Re-export the data model so callers need a single dependency
pub use wattcast_types::{
    ApplianceArchetype, ApplianceCategory, ApplianceEntry, CategoryBreakdown, ClimateClass,
    FeatureImpact, MonthlyForecast, PredictionResult, RegionProfile,
};
