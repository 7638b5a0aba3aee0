// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for configuration and drag handling.

use alloc::string::String;

use notch_decimal::DecimalError;

use crate::types::{HandleId, Mode};

/// The configuration invariant that was violated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigIssue {
    /// `min`, `max`, `step` or a value is NaN or infinite.
    NonFinite,
    /// `step <= 0`.
    NonPositiveStep,
    /// `min > max`.
    MinAboveMax,
    /// `step > max - min`.
    StepExceedsDomain,
    /// A value lies outside `[min, max]`.
    ValueOutOfRange,
    /// Dual mode with `low > high`.
    LowAboveHigh,
    /// A patch tried to switch between single and dual values.
    ModeMismatch,
}

impl core::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::NonFinite => "values must be finite",
            Self::NonPositiveStep => "step must be positive",
            Self::MinAboveMax => "min is greater than max",
            Self::StepExceedsDomain => "step is wider than the domain",
            Self::ValueOutOfRange => "value lies outside [min, max]",
            Self::LowAboveHigh => "low value is greater than high value",
            Self::ModeMismatch => "value kind does not match the slider mode",
        })
    }
}

/// Errors surfaced by the range slider.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RangeError {
    /// Configuration rejected; prior state is untouched.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(ConfigIssue),
    /// A numeric string could not be parsed.
    #[error("malformed numeric string: {0:?}")]
    MalformedNumericString(String),
    /// Decimal arithmetic hit a zero divisor.
    #[error(transparent)]
    DivisionByZero(#[from] DecimalError),
    /// Track geometry has no usable width.
    #[error("track width must be positive, got {0}")]
    DegenerateTrack(f64),
    /// Pointer coordinate was NaN or infinite.
    #[error("pointer coordinate must be finite, got {0}")]
    NonFinitePointer(f64),
    /// The pressed handle does not exist in this mode.
    #[error("handle {handle:?} does not exist in {mode:?} mode")]
    HandleMismatch {
        /// Handle named by the pointer input.
        handle: HandleId,
        /// Mode of the slider.
        mode: Mode,
    },
    /// The operation is not allowed while a drag session is active.
    #[error("a drag session is already active")]
    DragInProgress,
    /// An event name other than `dragstart`, `dragmove` or `dragend`.
    #[error("unknown event name: {0:?}")]
    UnknownEvent(String),
}

impl From<ConfigIssue> for RangeError {
    fn from(issue: ConfigIssue) -> Self {
        Self::InvalidConfiguration(issue)
    }
}
