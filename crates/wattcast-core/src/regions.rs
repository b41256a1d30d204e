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

//! Static climate and tariff catalog of Indian states and union territories
//!
//! The table is compiled in and never mutated. Name matching is exact and
//! case-sensitive. [`lookup`] never fails: unknown names resolve to the
//! [`DEFAULT_REGION`] profile.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use tracing::debug;
use wattcast_types::{ClimateClass, RegionProfile};

/// Region used whenever a lookup key is not in the catalog
pub const DEFAULT_REGION: &str = "Delhi";

const DEFAULT_REGION_INDEX: usize = 31;

const fn profile(
    temperature: f64,
    humidity: f64,
    tariff_rate: f64,
    climate: ClimateClass,
) -> RegionProfile {
    RegionProfile {
        temperature,
        humidity,
        tariff_rate,
        climate,
    }
}

use ClimateClass::{Cold, Desert, Extreme, HotDry, HotHumid, Humid, Moderate, Pleasant};

static REGIONS: [(&str, RegionProfile); 36] = [
    ("Andhra Pradesh", profile(33.0, 70.0, 6.0, HotHumid)),
    ("Arunachal Pradesh", profile(20.0, 75.0, 5.0, Pleasant)),
    ("Assam", profile(28.0, 80.0, 5.5, Humid)),
    ("Bihar", profile(31.0, 65.0, 6.0, Moderate)),
    ("Chhattisgarh", profile(32.0, 60.0, 5.8, HotDry)),
    ("Goa", profile(30.0, 75.0, 6.2, Humid)),
    ("Gujarat", profile(34.0, 60.0, 5.8, HotDry)),
    ("Haryana", profile(31.0, 62.0, 6.0, Moderate)),
    ("Himachal Pradesh", profile(18.0, 55.0, 5.2, Cold)),
    ("Jharkhand", profile(30.0, 65.0, 5.7, Moderate)),
    ("Karnataka", profile(28.0, 65.0, 6.8, Pleasant)),
    ("Kerala", profile(29.0, 80.0, 6.2, Humid)),
    ("Madhya Pradesh", profile(30.0, 55.0, 5.9, Moderate)),
    ("Maharashtra", profile(30.0, 70.0, 7.2, Moderate)),
    ("Manipur", profile(24.0, 75.0, 5.3, Pleasant)),
    ("Meghalaya", profile(22.0, 80.0, 5.1, Pleasant)),
    ("Mizoram", profile(23.0, 75.0, 5.2, Pleasant)),
    ("Nagaland", profile(24.0, 70.0, 5.2, Pleasant)),
    ("Odisha", profile(31.0, 75.0, 5.5, Humid)),
    ("Punjab", profile(30.0, 60.0, 5.8, Moderate)),
    ("Rajasthan", profile(36.0, 40.0, 6.0, Desert)),
    ("Sikkim", profile(18.0, 70.0, 5.0, Cold)),
    ("Tamil Nadu", profile(33.0, 75.0, 5.5, HotHumid)),
    ("Telangana", profile(32.0, 65.0, 6.5, HotDry)),
    ("Tripura", profile(28.0, 80.0, 5.4, Humid)),
    ("Uttar Pradesh", profile(31.0, 68.0, 6.3, Moderate)),
    ("Uttarakhand", profile(19.0, 60.0, 5.3, Cold)),
    ("West Bengal", profile(30.0, 78.0, 7.0, Humid)),
    ("Andaman and Nicobar Islands", profile(29.0, 85.0, 7.0, Humid)),
    ("Chandigarh", profile(29.0, 55.0, 6.0, Moderate)),
    (
        "Dadra and Nagar Haveli and Daman and Diu",
        profile(32.0, 70.0, 5.8, HotHumid),
    ),
    ("Delhi", profile(32.0, 65.0, 6.5, Extreme)),
    ("Jammu & Kashmir", profile(18.0, 55.0, 5.0, Cold)),
    ("Ladakh", profile(10.0, 40.0, 5.5, Cold)),
    ("Lakshadweep", profile(30.0, 80.0, 6.5, Humid)),
    ("Puducherry", profile(31.0, 75.0, 5.6, HotHumid)),
];

/// Name index over [`REGIONS`], sorted by name
static CATALOG: LazyLock<BTreeMap<&'static str, &'static RegionProfile>> =
    LazyLock::new(|| REGIONS.iter().map(|(name, profile)| (*name, profile)).collect());

/// Profile of [`DEFAULT_REGION`]
#[must_use]
pub fn default_region() -> &'static RegionProfile {
    let (_, profile) = &REGIONS[DEFAULT_REGION_INDEX];
    profile
}

/// Strict lookup, `None` if the region is not in the catalog
#[must_use]
pub fn get(name: &str) -> Option<&'static RegionProfile> {
    CATALOG.get(name).copied()
}

/// Profile for `name`, or the default region's profile if unknown
#[must_use]
pub fn lookup(name: &str) -> &'static RegionProfile {
    get(name).unwrap_or_else(|| {
        debug!(region = %name, fallback = DEFAULT_REGION, "Unknown region");
        default_region()
    })
}

/// All known region names in ascending order
#[must_use]
pub fn names() -> Vec<&'static str> {
    CATALOG.keys().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_index_points_at_default_region() {
        assert_eq!(REGIONS[DEFAULT_REGION_INDEX].0, DEFAULT_REGION);
    }

    #[test]
    fn test_unknown_region_is_the_delhi_profile() {
        let fallback = lookup("Atlantis");
        let delhi = lookup("Delhi");

        assert!(std::ptr::eq(fallback, delhi));
        assert_eq!(fallback.temperature, 32.0);
        assert_eq!(fallback.humidity, 65.0);
        assert_eq!(fallback.tariff_rate, 6.5);
        assert_eq!(fallback.climate, ClimateClass::Extreme);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(get("kerala").is_none());
        assert!(std::ptr::eq(lookup("kerala"), default_region()));
        assert_eq!(lookup("Kerala").climate, ClimateClass::Humid);
    }

    #[test]
    fn test_names_are_sorted_and_unique() {
        let names = names();
        assert_eq!(names.len(), REGIONS.len());
        assert!(names.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(names.first(), Some(&"Andaman and Nicobar Islands"));
        assert_eq!(names.last(), Some(&"West Bengal"));
    }

    #[test]
    fn test_get_returns_catalog_entry() {
        let rajasthan = get("Rajasthan").unwrap();
        assert_eq!(rajasthan.climate, ClimateClass::Desert);
        assert_eq!(rajasthan.temperature, 36.0);
        assert!(get("Atlantis").is_none());
    }
}
