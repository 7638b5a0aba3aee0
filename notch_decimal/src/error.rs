// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by decimal arithmetic.

/// Failure of a decimal operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    /// The divisor of [`div`](crate::div) was zero.
    #[error("division by zero")]
    DivisionByZero,
}
