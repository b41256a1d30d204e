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

//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use wattcast_core::regions::DEFAULT_REGION;

use super::input::{ApplianceArg, parse_bill};

#[derive(Debug, Parser)]
#[command(name = "wattcast")]
#[command(author, version, about = "WattCast household electricity forecast CLI")]
#[command(
    long_about = "Yearly electricity forecast for a household from its region, past bills\n\
    and appliance list.\n\
    \nExamples:\n  \
    wattcast predict --region Delhi --bill 300 --bill 320 --appliance \"AC:1500:5:cooling\"\n  \
    wattcast explain --region Kerala --appliance \"Fridge:150:24:kitchen\"\n  \
    wattcast regions Rajasthan\n  \
    wattcast appliances"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Forecast monthly units and cost for the next twelve months
    #[command(
        long_about = "Forecast monthly consumption and cost, Jan..Dec.\n\
        \nPrints the monthly table, the per-category appliance breakdown and\n\
        efficiency tips. Unknown regions fall back to Delhi.\n\
        \nExamples:\n  \
        wattcast predict\n  \
        wattcast predict --region \"Tamil Nadu\" --bill 410 --bill 395\n  \
        wattcast predict --appliance \"Heater:2000:3:heating\" --json"
    )]
    Predict(ForecastArgs),

    /// Show illustrative feature importance scores
    #[command(
        long_about = "Run a prediction and report the five feature importance scores\n\
        derived from it.\n\
        \nExamples:\n  \
        wattcast explain --region Delhi --bill 300 --appliance \"AC:1500:5:cooling\""
    )]
    Explain(ForecastArgs),

    /// List known regions, or show one region's profile
    Regions(RegionsArgs),

    /// List appliance presets with their default wattage
    Appliances,
}

#[derive(Debug, Args)]
pub struct ForecastArgs {
    /// Region (state or union territory) name, matched exactly
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    /// Past monthly bill reading in units; repeat for several months
    #[arg(
        long = "bill",
        value_name = "UNITS",
        value_parser = parse_bill,
        help = "Past monthly consumption reading (repeatable)",
        long_help = "Past monthly consumption reading in units (kWh).\n\
          Repeat the flag once per month; only the mean is used.\n\
          Without any readings a baseline of 250 units is assumed.\n\
          \nExample: --bill 300 --bill 320 --bill 310"
    )]
    pub bills: Vec<f64>,

    /// Appliance as NAME:WATTS:HOURS[:CATEGORY]; repeat for several
    #[arg(
        long = "appliance",
        value_name = "NAME:WATTS:HOURS[:CATEGORY]",
        help = "Household appliance (repeatable)",
        long_help = "Household appliance as NAME:WATTS:HOURS[:CATEGORY].\n\
          HOURS is average daily use (0-24). CATEGORY is one of cooling,\n\
          heating, kitchen, entertainment, lighting, electronics or\n\
          miscellaneous; anything else counts as miscellaneous.\n\
          \nExample: --appliance \"Air Conditioner:1500:5:cooling\""
    )]
    pub appliances: Vec<ApplianceArg>,

    /// Print the result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct RegionsArgs {
    /// Region to show; lists every region when omitted
    pub name: Option<String>,
}
