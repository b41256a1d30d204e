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

//! Table output for forecasts, feature scores and catalogs.

use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, presets::UTF8_FULL};
use wattcast_core::{ApplianceArchetype, FeatureImpact, PredictionResult, RegionProfile};

/// Formatter for pretty terminal tables
#[derive(Debug)]
pub struct TableFormatter;

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
        .collect()
}

fn number(value: impl ToString) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

impl TableFormatter {
    /// Monthly forecast, category breakdown and tips
    #[must_use]
    pub fn format_prediction(region: &str, result: &PredictionResult) -> String {
        let mut output = String::new();

        let peak = result.predictions.iter().map(|m| m.units).max();

        let mut months = Table::new();
        months.load_preset(UTF8_FULL);
        months.set_header(header(&["Month", "Units\n(kWh)", "Cost"]));
        for forecast in &result.predictions {
            let month = if Some(forecast.units) == peak {
                Cell::new(&forecast.month)
                    .fg(Color::Red)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new(&forecast.month)
            };
            months.add_row(vec![month, number(forecast.units), number(forecast.cost)]);
        }
        months.add_row(vec![
            Cell::new("Total").add_attribute(Attribute::Bold),
            number(result.total_annual).add_attribute(Attribute::Bold),
            number(result.total_cost).add_attribute(Attribute::Bold),
        ]);

        output.push_str(&format!("Forecast for {region}\n"));
        output.push_str(&months.to_string());
        output.push('\n');
        output.push_str(&format!(
            "Average monthly consumption: {} kWh\n\n",
            result.avg_monthly
        ));

        let mut breakdown = Table::new();
        breakdown.load_preset(UTF8_FULL);
        breakdown.set_header(header(&["Category", "Monthly\n(kWh)"]));
        for (category, kwh) in result.appliance_breakdown.iter() {
            breakdown.add_row(vec![Cell::new(category), number(format!("{kwh:.1}"))]);
        }
        output.push_str(&breakdown.to_string());
        output.push_str("\n\nTips:\n");

        for tip in &result.tips {
            output.push_str(&format!("  {tip}\n"));
        }

        output
    }

    /// Feature importance scores, in the engine's order
    #[must_use]
    pub fn format_impacts(features: &[FeatureImpact]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(header(&["Feature", "Impact"]));
        for feature in features {
            table.add_row(vec![
                Cell::new(&feature.feature),
                number(format!("{:.2}", feature.impact)),
            ]);
        }

        let mut output = table.to_string();
        output.push('\n');
        output
    }

    /// One row per region
    #[must_use]
    pub fn format_regions<'a>(
        regions: impl IntoIterator<Item = (&'a str, &'a RegionProfile)>,
    ) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(header(&[
            "Region",
            "Temp\n(°C)",
            "Humidity\n(%)",
            "Tariff\n(per kWh)",
            "Climate",
        ]));
        for (name, profile) in regions {
            table.add_row(vec![
                Cell::new(name),
                number(format!("{:.0}", profile.temperature)),
                number(format!("{:.0}", profile.humidity)),
                number(format!("{:.2}", profile.tariff_rate)),
                Cell::new(profile.climate),
            ]);
        }

        let mut output = table.to_string();
        output.push('\n');
        output
    }

    #[must_use]
    pub fn format_appliances(archetypes: &[ApplianceArchetype]) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(header(&["Appliance", "Default\n(W)", "Category"]));
        for archetype in archetypes {
            table.add_row(vec![
                Cell::new(&archetype.name),
                number(archetype.default_watts),
                Cell::new(archetype.category),
            ]);
        }

        let mut output = table.to_string();
        output.push('\n');
        output
    }
}
