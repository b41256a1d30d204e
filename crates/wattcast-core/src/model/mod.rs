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

//! Heuristic forecast components
//!
//! Two independent estimators produce a monthly consumption figure each:
//!
//! - **Trend** ("Prophet-like"): baseline usage scaled by linear monthly
//!   growth and a climate-dependent seasonal multiplier
//! - **Load regression** ("XGBoost-like"): baseline plus the appliance
//!   list's draw, adjusted for the region's temperature and humidity
//!
//! Neither is a fitted model; both are fixed formulas. The forecast
//! blender combines them with fixed weights.

pub mod regression;
pub mod seasonality;
pub mod trend;

pub use regression::{appliance_energy_kwh, load_regression};
pub use seasonality::seasonality;
pub use trend::trend;
