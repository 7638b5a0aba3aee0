// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notch Decimal: decimal-safe arithmetic over `f64`.
//!
//! Binary floating point cannot represent most decimal fractions, so a naive
//! `0.1 + 0.2` yields `0.30000000000000004`. For values that carry a small,
//! fixed number of fractional digits (slider steps like `0.1` or `0.25`) that
//! residue is visible to users and accumulates across operations.
//!
//! This crate decomposes each operand into an integer mantissa and a decimal
//! scale using the operand's shortest round-trip rendering, performs the
//! operation in integer space, and rescales once at the end.
//!
//! - [`add`], [`sub`] and [`mul`] are exact for operands of up to 15 significant digits.
//! - [`div`] rescales by the operands' fractional digits and otherwise has ordinary
//!   floating point precision. A zero divisor is reported as
//!   [`DecimalError::DivisionByZero`] instead of producing `inf` or `NaN`.
//!
//! Operands that cannot be decomposed (non-finite values, or mantissas too wide
//! for `i128`) are treated as having zero fractional digits and fall back to plain
//! floating point arithmetic.
//!
//! # Example
//!
//! ```rust
//! use notch_decimal::{add, div, mul, sub, DecimalError};
//!
//! assert_eq!(add(0.1, 0.2), 0.3);
//! assert_eq!(sub(1.1, 0.9), 0.2);
//! assert_eq!(mul(1.15, 100.0), 115.0);
//! assert_eq!(div(0.3, 0.1), Ok(3.0));
//! assert_eq!(div(1.0, 0.0), Err(DecimalError::DivisionByZero));
//! ```
//!
//! The [`rounding`] helpers (`floor`, `round_half_up`, `round_to`) are `no_std`
//! replacements for the `std` float methods, with [`round_to`] rounding on the
//! decimal rendering rather than the binary value.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod decimal;
pub mod error;
pub mod ops;
pub mod rounding;

pub use decimal::{Decimal, fraction_digits};
pub use error::DecimalError;
pub use ops::{add, div, mul, sub};
pub use rounding::{floor, round_half_up, round_to};
