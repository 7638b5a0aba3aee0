// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration: domain, step and value(s), with validation and patching.
//!
//! ## Invariants
//!
//! A [`RangeConfig`] accepted by [`RangeConfig::validate`] satisfies:
//! - every number is finite;
//! - `step > 0` and `step <= max - min` (so `min < max`);
//! - single: `min <= value <= max`;
//! - dual: `min <= low <= high <= max`.
//!
//! ## Textual form
//!
//! A value is either one number (`"20"`) or a comma separated pair (`"20,80"`).
//! Whitespace around each number is ignored. The pair form selects
//! [`Mode::Dual`].

use alloc::string::ToString;

use notch_decimal::sub;

use crate::error::{ConfigIssue, RangeError};
use crate::types::Mode;

/// Current value(s) of a slider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ValueRepr", into = "ValueRepr")
)]
pub enum RangeValue {
    /// One handle.
    Single(f64),
    /// Two handles, `(low, high)`.
    Dual(f64, f64),
}

impl RangeValue {
    /// Mode implied by this value.
    pub fn mode(self) -> Mode {
        match self {
            Self::Single(_) => Mode::Single,
            Self::Dual(..) => Mode::Dual,
        }
    }

    /// Lowest value (the only one in single mode).
    pub fn low(self) -> f64 {
        match self {
            Self::Single(v) | Self::Dual(v, _) => v,
        }
    }

    /// Highest value (the only one in single mode).
    pub fn high(self) -> f64 {
        match self {
            Self::Single(v) | Self::Dual(_, v) => v,
        }
    }

    /// Clamp every component into `[min, max]`.
    ///
    /// Requires `min <= max`.
    pub fn clamped(self, min: f64, max: f64) -> Self {
        match self {
            Self::Single(v) => Self::Single(v.clamp(min, max)),
            Self::Dual(low, high) => Self::Dual(low.clamp(min, max), high.clamp(min, max)),
        }
    }
}

impl Default for RangeValue {
    fn default() -> Self {
        Self::Single(0.0)
    }
}

impl core::fmt::Display for RangeValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Single(v) => write!(f, "{v}"),
            Self::Dual(low, high) => write!(f, "{low},{high}"),
        }
    }
}

impl core::str::FromStr for RangeValue {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            None => parse_number(s).map(Self::Single),
            Some((_, rest)) if rest.contains(',') => {
                Err(RangeError::MalformedNumericString(s.to_string()))
            }
            Some((low, high)) => Ok(Self::Dual(parse_number(low)?, parse_number(high)?)),
        }
    }
}

/// Parse one trimmed, finite number.
pub fn parse_number(text: &str) -> Result<f64, RangeError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RangeError::MalformedNumericString(trimmed.to_string())),
    }
}

/// Domain, step and value(s) of a slider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RangeConfig {
    /// Lower bound of the domain.
    pub min: f64,
    /// Upper bound of the domain.
    pub max: f64,
    /// Quantization step.
    pub step: f64,
    /// Current value(s).
    pub value: RangeValue,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            value: RangeValue::default(),
        }
    }
}

impl RangeConfig {
    /// Build and validate a configuration.
    pub fn new(min: f64, max: f64, step: f64, value: RangeValue) -> Result<Self, RangeError> {
        let config = Self {
            min,
            max,
            step,
            value,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build and validate a configuration from attribute-style strings.
    pub fn from_text(min: &str, max: &str, step: &str, value: &str) -> Result<Self, RangeError> {
        Self::new(
            parse_number(min)?,
            parse_number(max)?,
            parse_number(step)?,
            value.parse()?,
        )
    }

    /// Mode implied by the value.
    pub fn mode(&self) -> Mode {
        self.value.mode()
    }

    /// Check every invariant.
    pub fn validate(&self) -> Result<(), ConfigIssue> {
        self.validate_domain()?;
        self.validate_value()
    }

    fn validate_domain(&self) -> Result<(), ConfigIssue> {
        if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            return Err(ConfigIssue::NonFinite);
        }
        if self.step <= 0.0 {
            return Err(ConfigIssue::NonPositiveStep);
        }
        if self.min > self.max {
            return Err(ConfigIssue::MinAboveMax);
        }
        if self.step > sub(self.max, self.min) {
            return Err(ConfigIssue::StepExceedsDomain);
        }
        Ok(())
    }

    fn validate_value(&self) -> Result<(), ConfigIssue> {
        let (low, high) = (self.value.low(), self.value.high());
        if !(low.is_finite() && high.is_finite()) {
            return Err(ConfigIssue::NonFinite);
        }
        if low > high {
            return Err(ConfigIssue::LowAboveHigh);
        }
        if low < self.min || high > self.max {
            return Err(ConfigIssue::ValueOutOfRange);
        }
        Ok(())
    }

    /// Merge `patch` into a copy of this configuration and validate the result.
    ///
    /// A patch value must have the same [`Mode`] as `self`. When the patch
    /// carries no value, the current value(s) are clamped into the new domain.
    pub fn patched(&self, patch: &ConfigPatch) -> Result<Self, ConfigIssue> {
        let mut next = Self {
            min: patch.min.unwrap_or(self.min),
            max: patch.max.unwrap_or(self.max),
            step: patch.step.unwrap_or(self.step),
            value: self.value,
        };
        next.validate_domain()?;
        match patch.value {
            Some(value) if value.mode() != self.mode() => return Err(ConfigIssue::ModeMismatch),
            Some(value) => next.value = value,
            None => next.value = self.value.clamped(next.min, next.max),
        }
        next.validate_value()?;
        Ok(next)
    }
}

/// Partial update for [`RangeConfig`]; `None` fields keep their current value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ConfigPatch {
    /// New lower bound.
    pub min: Option<f64>,
    /// New upper bound.
    pub max: Option<f64>,
    /// New step.
    pub step: Option<f64>,
    /// New value(s).
    pub value: Option<RangeValue>,
}

impl ConfigPatch {
    /// Patch that only replaces the domain bounds.
    pub fn domain(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    /// Patch that only replaces the value(s).
    pub fn value(value: RangeValue) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }
}

/// Serde representation of a value: a number or the `"a,b"` text form.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum ValueRepr {
    Number(f64),
    Text(alloc::string::String),
}

#[cfg(feature = "serde")]
impl TryFrom<ValueRepr> for RangeValue {
    type Error = RangeError;

    fn try_from(repr: ValueRepr) -> Result<Self, Self::Error> {
        match repr {
            ValueRepr::Number(v) => Ok(Self::Single(v)),
            ValueRepr::Text(text) => text.parse(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<RangeValue> for ValueRepr {
    fn from(value: RangeValue) -> Self {
        match value {
            RangeValue::Single(v) => Self::Number(v),
            dual @ RangeValue::Dual(..) => Self::Text(dual.to_string()),
        }
    }
}
