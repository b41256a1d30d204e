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

//! Command-line interface of the `wattcast` binary.

pub mod args;
pub mod formatters;
pub mod input;

pub use args::{Cli, Commands, ForecastArgs, RegionsArgs};
pub use formatters::TableFormatter;
pub use input::ApplianceArg;
