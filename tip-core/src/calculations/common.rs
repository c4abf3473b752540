//! Common utility functions for tip calculations.
//!
//! This module provides shared functionality used across the calculation and
//! export paths, primarily display rounding.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero). Display rounding only; the
/// round-up-to-the-next-dollar tip policy is a separate rule and lives in
/// [`super::tip::tip_amount`].
///
/// # Arguments
///
/// * `value` - The decimal value to round
///
/// # Returns
///
/// The value rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(25.374)), dec!(25.37));
/// assert_eq!(round_half_up(dec!(25.375)), dec!(25.38));
/// assert_eq!(round_half_up(dec!(25.376)), dec!(25.38));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value to `dp` decimal places using half-up rounding.
///
/// Same convention as [`round_half_up`], for the places where the display
/// precision is not two (the percent column in CSV export uses one).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::round_half_up_dp;
///
/// assert_eq!(round_half_up_dp(dec!(18.25), 1), dec!(18.3));
/// assert_eq!(round_half_up_dp(dec!(18.24), 1), dec!(18.2));
/// ```
pub fn round_half_up_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a decimal value up to the next whole currency unit.
///
/// This is the round-up tip policy: ceiling, not nearest. Values already
/// integral are returned unchanged.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tip_core::calculations::common::ceil_to_unit;
///
/// assert_eq!(ceil_to_unit(dec!(7.50)), dec!(8));
/// assert_eq!(ceil_to_unit(dec!(7.01)), dec!(8));
/// assert_eq!(ceil_to_unit(dec!(10.00)), dec!(10));
/// ```
pub fn ceil_to_unit(value: Decimal) -> Decimal {
    value.ceil()
}
