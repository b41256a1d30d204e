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

//! Numeric helpers shared by the forecast components

/// Arithmetic mean of the values
///
/// # Returns
/// The mean, or None if values is empty
///
/// # Examples
/// ```
/// use wattcast_core::calculate_mean;
/// assert_eq!(calculate_mean(&[300.0, 320.0, 310.0]), Some(310.0));
/// assert_eq!(calculate_mean(&[]), None);
/// ```
#[must_use]
pub fn calculate_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    #[expect(
        clippy::cast_precision_loss,
        reason = "bill histories are far below 2^52 entries"
    )]
    let count = values.len() as f64;

    Some(values.iter().sum::<f64>() / count)
}

/// Round to the nearest integer, ties to even (banker's rounding)
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "forecast figures are bounded far below i64::MAX"
)]
pub fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_empty_values() {
        assert_eq!(calculate_mean(&[]), None);
    }

    #[test]
    fn test_mean_single_value() {
        assert_eq!(calculate_mean(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_mean_is_order_independent() {
        let forward = calculate_mean(&[100.0, 250.0, 400.0]).unwrap();
        let reversed = calculate_mean(&[400.0, 250.0, 100.0]).unwrap();
        assert!((forward - reversed).abs() < 1e-12);
        assert!((forward - 250.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_half_even_ties() {
        assert_eq!(round_half_even(0.5), 0);
        assert_eq!(round_half_even(1.5), 2);
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(546.4), 546);
        assert_eq!(round_half_even(546.6), 547);
    }
}
