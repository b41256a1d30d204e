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

//! CLI entry point for WattCast

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wattcast_core::{ApplianceEntry, appliances, regions};

use crate::cli::{ApplianceArg, Cli, Commands, ForecastArgs, RegionsArgs, TableFormatter};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wattcast=warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict(args) => predict_command(&args),
        Commands::Explain(args) => explain_command(&args),
        Commands::Regions(args) => regions_command(&args),
        Commands::Appliances => {
            print!("{}", TableFormatter::format_appliances(appliances::catalog()));
            Ok(())
        }
    }
}

fn appliance_entries(args: &[ApplianceArg]) -> Vec<ApplianceEntry> {
    args.iter().map(|ApplianceArg(entry)| entry.clone()).collect()
}

fn predict_command(args: &ForecastArgs) -> Result<()> {
    let appliances = appliance_entries(&args.appliances);
    debug!(
        region = %args.region,
        bills = args.bills.len(),
        appliances = appliances.len(),
        "Running forecast"
    );

    let result = wattcast_core::predict(&args.region, &args.bills, &appliances);

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("Failed to serialize forecast")?;
        println!("{json}");
    } else {
        print!("{}", TableFormatter::format_prediction(&args.region, &result));
    }
    Ok(())
}

fn explain_command(args: &ForecastArgs) -> Result<()> {
    let appliances = appliance_entries(&args.appliances);
    let prediction = wattcast_core::predict(&args.region, &args.bills, &appliances);

    #[expect(
        clippy::cast_precision_loss,
        reason = "average monthly units are far below 2^52"
    )]
    let avg_monthly = prediction.avg_monthly as f64;

    let features = wattcast_core::explain(&args.region, &args.bills, &appliances, avg_monthly);

    if args.json {
        let json =
            serde_json::to_string_pretty(&features).context("Failed to serialize feature scores")?;
        println!("{json}");
    } else {
        print!("{}", TableFormatter::format_impacts(&features));
    }
    Ok(())
}

fn regions_command(args: &RegionsArgs) -> Result<()> {
    let output = match args.name.as_deref() {
        Some(name) => {
            let Some(profile) = regions::get(name) else {
                bail!(
                    "Unknown region: '{name}'\n\n\
                    Run `wattcast regions` to list the known names (matching is case-sensitive)."
                );
            };
            TableFormatter::format_regions([(name, profile)])
        }
        None => TableFormatter::format_regions(
            regions::names()
                .into_iter()
                .map(|name| (name, regions::lookup(name))),
        ),
    };

    print!("{output}");
    Ok(())
}
