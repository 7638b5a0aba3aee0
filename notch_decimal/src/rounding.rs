// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounding helpers usable without `std`.

use crate::decimal::Decimal;

// Every f64 at or above this magnitude is already an integer.
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Largest integer not greater than `value`.
#[inline]
pub fn floor(value: f64) -> f64 {
    if !value.is_finite() || value >= INTEGRAL_THRESHOLD || value <= -INTEGRAL_THRESHOLD {
        return value;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "magnitude is below 2^52, so the value fits in i64."
    )]
    let truncated = value as i64 as f64;
    if truncated > value {
        truncated - 1.0
    } else {
        truncated
    }
}

/// Nearest integer, with halves rounded towards positive infinity.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    floor(value + 0.5)
}

/// Round `value` to `places` fractional digits, halves away from zero.
///
/// Rounding happens on the decimal rendering, so `1.0005` rounds to `1.001`
/// even though its binary value is slightly below the midpoint.
pub fn round_to(value: f64, places: u32) -> f64 {
    let Some(d) = Decimal::from_f64(value) else {
        return value;
    };
    if d.scale <= places {
        return value;
    }
    let Some(divisor) = 10_i128.checked_pow(d.scale - places) else {
        // |value| < 10^(38 - scale), well under half a unit in the last place.
        return 0.0;
    };
    let mut mantissa = d.mantissa / divisor;
    let remainder = (d.mantissa % divisor).abs();
    if remainder >= divisor - remainder {
        mantissa += d.mantissa.signum();
    }
    Decimal::new(mantissa, places).to_f64()
}
