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

//! Efficiency tips
//!
//! Output order is part of the contract: climate tips first, then at most one
//! cooling-or-heating tip, then the two universal tips.

use wattcast_types::{CategoryBreakdown, ClimateClass};

const COLD_TIPS: [&str; 3] = [
    "🔥 Install thermal insulation to reduce heating costs by 20-30%",
    "🌡️ Use smart thermostats to optimize heating schedules",
    "🪟 Seal windows and doors to prevent heat loss",
];

const HOT_DRY_TIPS: [&str; 3] = [
    "❄️ Set AC to 24-26°C to reduce cooling load by 25%",
    "🏠 Use reflective roofing to reduce indoor temperature",
    "🌳 Plant shade trees around your home",
];

const HUMID_TIPS: [&str; 3] = [
    "💨 Use dehumidifiers efficiently to reduce AC runtime",
    "🪟 Ensure proper ventilation to reduce moisture",
    "☀️ Use natural ventilation during cooler hours",
];

const GENERAL_TIPS: [&str; 2] = [
    "⚡ Optimize appliance usage during off-peak hours",
    "📊 Track your monthly consumption to identify spikes",
];

pub const COOLING_TIP: &str =
    "❄️ Cooling appliances are your biggest consumers - consider upgrading to 5-star rated ACs";
pub const HEATING_TIP: &str = "🔥 Heating appliances dominate - consider solar water heaters";

pub const LED_TIP: &str = "💡 Switch to LED bulbs - save up to 75% on lighting costs";
pub const STANDBY_TIP: &str = "🔌 Unplug devices on standby mode - saves 5-10% monthly";

/// Climate-specific tips, in display order
#[must_use]
pub fn climate_tips(climate: ClimateClass) -> &'static [&'static str] {
    match climate {
        ClimateClass::Cold => &COLD_TIPS,
        ClimateClass::Desert | ClimateClass::HotDry => &HOT_DRY_TIPS,
        ClimateClass::Humid => &HUMID_TIPS,
        ClimateClass::HotHumid
        | ClimateClass::Moderate
        | ClimateClass::Pleasant
        | ClimateClass::Extreme => &GENERAL_TIPS,
    }
}

/// Build the ordered tip list for a region's climate and breakdown
#[must_use]
pub fn generate_tips(climate: ClimateClass, breakdown: &CategoryBreakdown) -> Vec<String> {
    let mut tips: Vec<String> = climate_tips(climate)
        .iter()
        .map(|&tip| tip.to_owned())
        .collect();

    if breakdown.cooling > breakdown.heating {
        tips.push(COOLING_TIP.to_owned());
    } else if breakdown.heating > breakdown.cooling {
        tips.push(HEATING_TIP.to_owned());
    }

    tips.push(LED_TIP.to_owned());
    tips.push(STANDBY_TIP.to_owned());
    tips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions;

    fn breakdown(cooling: f64, heating: f64) -> CategoryBreakdown {
        CategoryBreakdown {
            cooling,
            heating,
            ..CategoryBreakdown::default()
        }
    }

    #[test]
    fn test_rajasthan_cooling_dominant_order() {
        let climate = regions::lookup("Rajasthan").climate;
        let tips = generate_tips(climate, &breakdown(100.0, 0.0));

        assert_eq!(
            tips,
            vec![
                "❄️ Set AC to 24-26°C to reduce cooling load by 25%",
                "🏠 Use reflective roofing to reduce indoor temperature",
                "🌳 Plant shade trees around your home",
                COOLING_TIP,
                LED_TIP,
                STANDBY_TIP,
            ]
        );
    }

    #[test]
    fn test_heating_dominant_adds_heating_tip() {
        let tips = generate_tips(ClimateClass::Cold, &breakdown(0.0, 234.0));

        assert_eq!(tips.len(), 6);
        assert_eq!(tips[..3], COLD_TIPS);
        assert_eq!(tips[3], HEATING_TIP);
    }

    #[test]
    fn test_balanced_breakdown_adds_neither() {
        let tips = generate_tips(ClimateClass::Extreme, &breakdown(0.0, 0.0));
        assert_eq!(
            tips,
            vec![GENERAL_TIPS[0], GENERAL_TIPS[1], LED_TIP, STANDBY_TIP]
        );

        let tips = generate_tips(ClimateClass::Humid, &breakdown(50.0, 50.0));
        assert_eq!(tips.len(), 5);
        assert!(!tips.iter().any(|t| t == COOLING_TIP || t == HEATING_TIP));
    }

    #[test]
    fn test_hot_humid_uses_general_tips() {
        assert_eq!(climate_tips(ClimateClass::HotHumid), GENERAL_TIPS);
        assert_eq!(climate_tips(ClimateClass::HotDry), HOT_DRY_TIPS);
    }

    #[test]
    fn test_universal_tips_always_last() {
        for climate in [ClimateClass::Cold, ClimateClass::Pleasant, ClimateClass::Desert] {
            let tips = generate_tips(climate, &breakdown(10.0, 5.0));
            let n = tips.len();
            assert_eq!(tips[n - 2], LED_TIP);
            assert_eq!(tips[n - 1], STANDBY_TIP);
        }
    }
}
