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

//! Appliance presets used to prefill client forms

use std::sync::LazyLock;

use wattcast_types::{ApplianceArchetype, ApplianceCategory};

const PRESETS: [(&str, u32, ApplianceCategory); 11] = [
    ("Air Conditioner", 1500, ApplianceCategory::Cooling),
    ("Heater", 2000, ApplianceCategory::Heating),
    ("Geyser", 2000, ApplianceCategory::Heating),
    ("Refrigerator", 150, ApplianceCategory::Kitchen),
    ("Washing Machine", 500, ApplianceCategory::Kitchen),
    ("Microwave", 1200, ApplianceCategory::Kitchen),
    ("Television", 100, ApplianceCategory::Entertainment),
    ("Fan", 75, ApplianceCategory::Cooling),
    ("Light Bulbs", 40, ApplianceCategory::Lighting),
    ("Desktop Computer", 200, ApplianceCategory::Electronics),
    ("Miscellaneous", 100, ApplianceCategory::Miscellaneous),
];

static CATALOG: LazyLock<Vec<ApplianceArchetype>> = LazyLock::new(|| {
    PRESETS
        .iter()
        .map(|&(name, default_watts, category)| ApplianceArchetype {
            name: name.to_owned(),
            default_watts,
            category,
        })
        .collect()
});

/// Appliance archetypes in display order
#[must_use]
pub fn catalog() -> &'static [ApplianceArchetype] {
    &CATALOG
}

/// Find a preset by its exact display name
#[must_use]
pub fn find(name: &str) -> Option<&'static ApplianceArchetype> {
    CATALOG.iter().find(|archetype| archetype.name == name)
}
