// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The long-lived slider state: configuration, handle positions, track span and highlight.
//!
//! [`RangeModel`] is the single source of truth. The host renders it via
//! [`RangeModel::layout`] and [`RangeModel::highlight_rect`] and never reads
//! values back from its view.
//!
//! The model is mutated only by [`RangeModel::set_config`] /
//! [`RangeModel::reapply`] and by the [`drag`](crate::drag) controller.

use alloc::string::{String, ToString};

use kurbo::{Point, Rect, Size};
use notch_decimal::{DecimalError, add, div, mul, round_to, sub};

use crate::config::{ConfigPatch, RangeConfig, RangeValue};
use crate::error::RangeError;
use crate::mapper::{PERCENT_PLACES, prefers_low, value_to_offset_percent};
use crate::types::{HandleId, HandleState, Highlight, Mode, TrackGeometry, TrackSpan};

const LOG_TARGET: &str = "notch_range::model";

/// Validated configuration plus the state derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeModel {
    config: RangeConfig,
    // In single mode both hold the only handle.
    low: HandleState,
    high: HandleState,
    track: TrackSpan,
    highlight: Highlight,
}

/// Positions recomputed whenever configuration is applied.
struct Derived {
    low: HandleState,
    high: HandleState,
    track: TrackSpan,
    highlight: Highlight,
}

impl Derived {
    fn compute(config: &RangeConfig) -> Result<Self, DecimalError> {
        let (min, max) = (config.min, config.max);
        match config.value {
            RangeValue::Single(value) => {
                let percent = value_to_offset_percent(value, min, max)?;
                let handle = HandleState {
                    value,
                    offset_percent: percent,
                };
                Ok(Self {
                    low: handle,
                    high: handle,
                    track: TrackSpan {
                        left_percent: 0.0,
                        width_percent: percent,
                    },
                    highlight: Highlight::SINGLE,
                })
            }
            RangeValue::Dual(low, high) => {
                let low_percent = value_to_offset_percent(low, min, max)?;
                let width = div(sub(high, low), sub(max, min))?;
                let width = round_to(mul(width, 100.0), PERCENT_PLACES);
                let high_percent = add(low_percent, width);
                let highlight = if prefers_low(low_percent, high_percent) {
                    Highlight::LOW
                } else {
                    Highlight::HIGH
                };
                Ok(Self {
                    low: HandleState {
                        value: low,
                        offset_percent: low_percent,
                    },
                    high: HandleState {
                        value: high,
                        offset_percent: high_percent,
                    },
                    track: TrackSpan {
                        left_percent: low_percent,
                        width_percent: width,
                    },
                    highlight,
                })
            }
        }
    }
}

impl RangeModel {
    /// Validate `config` and derive handle positions from it.
    pub fn new(config: RangeConfig) -> Result<Self, RangeError> {
        config.validate().inspect_err(|issue| {
            log::warn!(target: LOG_TARGET, "rejected configuration {config:?}: {issue}");
        })?;
        let derived = Derived::compute(&config)?;
        log::debug!(target: LOG_TARGET, "initialised with {config:?}");
        Ok(Self {
            config,
            low: derived.low,
            high: derived.high,
            track: derived.track,
            highlight: derived.highlight,
        })
    }

    /// Current configuration; its value always mirrors the handles.
    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Single or dual.
    pub fn mode(&self) -> Mode {
        self.config.mode()
    }

    /// Current value(s).
    pub fn value(&self) -> RangeValue {
        self.config.value
    }

    /// Current value(s) as text: `"v"` or `"low,high"`.
    pub fn value_text(&self) -> String {
        self.config.value.to_string()
    }

    /// State of one handle. `Single` and `Low` address the same slot in single mode.
    pub fn handle(&self, handle: HandleId) -> HandleState {
        match handle {
            HandleId::Single | HandleId::Low => self.low,
            HandleId::High => self.high,
        }
    }

    /// Highlighted part of the track.
    pub fn track(&self) -> TrackSpan {
        self.track
    }

    /// Visual activation flags.
    pub fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// Merge `patch`, validate, and re-derive positions.
    ///
    /// On error the model is left unchanged.
    pub fn set_config(&mut self, patch: &ConfigPatch) -> Result<(), RangeError> {
        let next = self.config.patched(patch).inspect_err(|issue| {
            log::warn!(target: LOG_TARGET, "rejected patch {patch:?}: {issue}");
        })?;
        self.apply(next)
    }

    /// Re-derive positions and the default highlight from the current configuration.
    pub fn reapply(&mut self) -> Result<(), RangeError> {
        self.apply(self.config)
    }

    fn apply(&mut self, config: RangeConfig) -> Result<(), RangeError> {
        let derived = Derived::compute(&config)?;
        log::debug!(target: LOG_TARGET, "applied {config:?}");
        self.config = config;
        self.low = derived.low;
        self.high = derived.high;
        self.track = derived.track;
        self.highlight = derived.highlight;
        Ok(())
    }

    /// Project handle rects onto `track`, each centred on its offset.
    pub fn layout(&self, track: Rect, handle_size: Size) -> TrackGeometry {
        let at = |state: HandleState| {
            Rect::from_center_size(
                Point::new(percent_to_x(track, state.offset_percent), track.center().y),
                handle_size,
            )
        };
        TrackGeometry {
            track,
            low: at(self.low),
            high: at(self.high),
        }
    }

    /// Project the highlighted span onto `track`.
    pub fn highlight_rect(&self, track: Rect) -> Rect {
        let x0 = percent_to_x(track, self.track.left_percent);
        let x1 = percent_to_x(track, self.track.left_percent + self.track.width_percent);
        Rect::new(x0, track.y0, x1, track.y1)
    }

    pub(crate) fn place(&mut self, handle: HandleId, state: HandleState, track: TrackSpan) {
        match handle {
            HandleId::Single => {
                self.low = state;
                self.high = state;
                self.config.value = RangeValue::Single(state.value);
            }
            HandleId::Low => {
                self.low = state;
                self.config.value = RangeValue::Dual(state.value, self.high.value);
            }
            HandleId::High => {
                self.high = state;
                self.config.value = RangeValue::Dual(self.low.value, state.value);
            }
        }
        self.track = track;
    }

    pub(crate) fn activate(&mut self, handle: HandleId) {
        self.highlight = Highlight::for_handle(handle) | Highlight::TRACK | Highlight::LABEL;
    }

    pub(crate) fn deactivate_drag(&mut self) {
        self.highlight.remove(Highlight::TRACK | Highlight::LABEL);
    }
}

fn percent_to_x(track: Rect, percent: f64) -> f64 {
    track.x0 + track.width() * percent / 100.0
}
