// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure conversions between pixel space and domain space.
//!
//! ## Quantization
//!
//! An offset is first expressed in step units (`cur_step`) and compared with the
//! number of step units across the whole domain (`all_step`). When
//! `max - min` is not a multiple of `step`, the last interval is shorter than a
//! full step:
//!
//! - Below that last interval, `cur_step` rounds to the nearest whole step.
//! - Inside it, the offset snaps to `max` if it lies past the midpoint of the
//!   partial interval, otherwise to the last full step.
//!
//! With `min = 0, max = 10, step = 3` the selectable values are
//! `0, 3, 6, 9, 10`, and `9` and `10` split the final interval at `9.5`.
//!
//! All arithmetic goes through [`notch_decimal`] so fractional steps do not
//! accumulate float residue.

use notch_decimal::{DecimalError, add, div, floor, mul, round_half_up, round_to, sub};

/// Decimal places kept for percentages.
pub const PERCENT_PLACES: u32 = 3;

/// Quantized domain value for a pointer `offset` (px from the track's left edge).
///
/// `offset` is expected within `[0, track_length]`; callers clamp it.
pub fn position_to_value(
    offset: f64,
    track_length: f64,
    min: f64,
    max: f64,
    step: f64,
) -> Result<f64, DecimalError> {
    let span = sub(max, min);
    let px_per_unit = div(track_length, span)?;
    let cur_step = div(div(offset, px_per_unit)?, step)?;
    let all_step = div(span, step)?;
    let cur_whole = floor(cur_step);
    let all_whole = floor(all_step);

    if cur_whole < all_whole {
        return Ok(add(mul(round_half_up(cur_step), step), min));
    }

    let cur_rest = sub(cur_step, cur_whole);
    let tail_midpoint = mul(sub(all_step, all_whole), 0.5);
    if cur_rest > tail_midpoint {
        Ok(max)
    } else {
        Ok(add(mul(all_whole, step), min))
    }
}

/// Offset of `value` from `min`, in percent of the domain, to three decimals.
pub fn value_to_offset_percent(value: f64, min: f64, max: f64) -> Result<f64, DecimalError> {
    let distance = sub(value, min);
    let distance = if distance < 0.0 { -distance } else { distance };
    let ratio = div(distance, sub(max, min))?;
    Ok(round_to(mul(ratio, 100.0), PERCENT_PLACES))
}

/// `offset` as a percentage of `track_length`, to three decimals.
pub fn offset_percent(offset: f64, track_length: f64) -> Result<f64, DecimalError> {
    Ok(round_to(mul(div(offset, track_length)?, 100.0), PERCENT_PLACES))
}

/// Which dual handle to mark active after (re)configuration.
///
/// Prefers the low handle when it sits further from the left edge than the
/// high handle sits from the right edge, or when it is pushed fully right.
pub fn prefers_low(low_percent: f64, high_percent: f64) -> bool {
    low_percent > sub(100.0, high_percent) || low_percent == 100.0
}
