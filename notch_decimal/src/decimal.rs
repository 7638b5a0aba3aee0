// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decomposition of `f64` values into an integer mantissa and a decimal scale.
//!
//! The decomposition reads the shortest round-trip rendering of the value
//! (`format!("{value}")`), so `0.1` decomposes to `1 × 10⁻¹` rather than to the
//! exact binary expansion of the nearest double.

use alloc::format;
use alloc::string::String;

/// A decimal number `mantissa × 10^-scale`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decimal {
    /// Signed integer digits.
    pub mantissa: i128,
    /// Number of fractional digits.
    pub scale: u32,
}

impl Decimal {
    /// Create a decimal from its parts.
    pub const fn new(mantissa: i128, scale: u32) -> Self {
        Self { mantissa, scale }
    }

    /// Decompose `value` by its textual rendering.
    ///
    /// Returns `None` for non-finite values and for values whose digits do not
    /// fit in an `i128` mantissa.
    pub fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let text = format!("{value}");
        let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let scale = u32::try_from(frac_part.len()).ok()?;
        let mut digits = String::with_capacity(text.len());
        digits.push_str(int_part);
        digits.push_str(frac_part);
        let mantissa = digits.parse::<i128>().ok()?;
        Some(Self { mantissa, scale })
    }

    /// Re-express this decimal with `scale` fractional digits.
    ///
    /// Only widening is supported; returns `None` when `scale` is smaller than
    /// the current scale or the mantissa would overflow.
    pub fn rescale(self, scale: u32) -> Option<Self> {
        let shift = scale.checked_sub(self.scale)?;
        let factor = 10_i128.checked_pow(shift)?;
        Some(Self {
            mantissa: self.mantissa.checked_mul(factor)?,
            scale,
        })
    }

    /// Exact sum, or `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        let scale = self.scale.max(other.scale);
        let a = self.rescale(scale)?;
        let b = other.rescale(scale)?;
        Some(Self {
            mantissa: a.mantissa.checked_add(b.mantissa)?,
            scale,
        })
    }

    /// Exact product, or `None` on overflow.
    pub fn checked_mul(self, other: Self) -> Option<Self> {
        Some(Self {
            mantissa: self.mantissa.checked_mul(other.mantissa)?,
            scale: self.scale.checked_add(other.scale)?,
        })
    }

    /// Nearest `f64` to this decimal.
    pub fn to_f64(self) -> f64 {
        // `str::parse` is correctly rounded, which the division fallback is not.
        format!("{}e-{}", self.mantissa, self.scale)
            .parse::<f64>()
            .unwrap_or_else(|_| self.mantissa as f64 / pow10(self.scale))
    }
}

/// Number of digits after the decimal separator in the rendering of `value`.
///
/// Integers and non-finite values have zero fractional digits.
pub fn fraction_digits(value: f64) -> u32 {
    Decimal::from_f64(value).map_or(0, |d| d.scale)
}

/// `10^exp` as an `f64`; exact up to `10^22`.
pub(crate) fn pow10(exp: u32) -> f64 {
    let mut out = 1.0;
    for _ in 0..exp {
        out *= 10.0;
    }
    out
}
