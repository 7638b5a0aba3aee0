// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decimal-safe arithmetic as free functions.

use crate::decimal::{Decimal, pow10};
use crate::error::DecimalError;

/// `a + b`, exact for decimal operands of up to 15 significant digits.
pub fn add(a: f64, b: f64) -> f64 {
    match (Decimal::from_f64(a), Decimal::from_f64(b)) {
        (Some(x), Some(y)) => x.checked_add(y).map_or(a + b, Decimal::to_f64),
        _ => a + b,
    }
}

/// `a - b`, exact for decimal operands of up to 15 significant digits.
pub fn sub(a: f64, b: f64) -> f64 {
    add(a, -b)
}

/// `a × b`, exact when the product has at most 15 significant digits.
///
/// The result scale is the sum of the operand scales.
pub fn mul(a: f64, b: f64) -> f64 {
    match (Decimal::from_f64(a), Decimal::from_f64(b)) {
        (Some(x), Some(y)) => x.checked_mul(y).map_or(a * b, Decimal::to_f64),
        _ => a * b,
    }
}

/// `a ÷ b`.
///
/// Both operands are scaled to integers, divided, and the quotient is shifted
/// by the difference of their fractional digit counts. The quotient itself has
/// ordinary `f64` precision.
pub fn div(a: f64, b: f64) -> Result<f64, DecimalError> {
    if b == 0.0 {
        return Err(DecimalError::DivisionByZero);
    }
    let (Some(x), Some(y)) = (Decimal::from_f64(a), Decimal::from_f64(b)) else {
        return Ok(a / b);
    };
    let quotient = x.mantissa as f64 / y.mantissa as f64;
    Ok(if y.scale >= x.scale {
        quotient * pow10(y.scale - x.scale)
    } else {
        quotient / pow10(x.scale - y.scale)
    })
}
