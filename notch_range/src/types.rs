// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types: handles, modes, highlight flags, host geometry and drag events.
//!
//! ## Overview
//!
//! These types describe the inputs the host feeds in and the state it reads back.
//! They are referenced by the [`model`](crate::model), the [`drag`](crate::drag)
//! controller and the [`slider`](crate::slider) facade.

use alloc::string::String;

use kurbo::Rect;

use crate::error::RangeError;

/// Whether the slider has one handle or two.
///
/// Decided once, from the initial value, and never changes afterwards.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Mode {
    /// One handle; the track fills from `min` to the handle.
    Single,
    /// Two handles; the track highlights the span between them.
    Dual,
}

/// Identifies the handle a drag session or update targets.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HandleId {
    /// The only handle of a [`Mode::Single`] slider.
    Single,
    /// Left handle of a [`Mode::Dual`] slider.
    Low,
    /// Right handle of a [`Mode::Dual`] slider.
    High,
}

impl HandleId {
    /// Whether this handle exists on a slider of the given mode.
    pub fn belongs_to(self, mode: Mode) -> bool {
        matches!(
            (self, mode),
            (Self::Single, Mode::Single) | (Self::Low | Self::High, Mode::Dual)
        )
    }
}

bitflags::bitflags! {
    /// Visual activation state the host projects onto its styling.
    ///
    /// Handle bits mark the handle the user most likely moves next (or last moved).
    /// `TRACK` and `LABEL` are only set while a drag session is active.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Highlight: u8 {
        /// The single-mode handle is active.
        const SINGLE = 0b0000_0001;
        /// The low handle is active.
        const LOW    = 0b0000_0010;
        /// The high handle is active.
        const HIGH   = 0b0000_0100;
        /// The track is highlighted (dragging).
        const TRACK  = 0b0000_1000;
        /// The label of the active handle is emphasised (dragging).
        const LABEL  = 0b0001_0000;
    }
}

impl Highlight {
    /// Flag for the given handle.
    pub fn for_handle(handle: HandleId) -> Self {
        match handle {
            HandleId::Single => Self::SINGLE,
            HandleId::Low => Self::LOW,
            HandleId::High => Self::HIGH,
        }
    }
}

impl Default for Highlight {
    fn default() -> Self {
        Self::empty()
    }
}

/// Position and value of one handle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandleState {
    /// Quantized domain value.
    pub value: f64,
    /// Offset from the track's left edge in percent (0–100, three decimals).
    pub offset_percent: f64,
}

/// Highlighted part of the track, in percent of the track width.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TrackSpan {
    /// Left edge of the highlight.
    pub left_percent: f64,
    /// Width of the highlight.
    pub width_percent: f64,
}

/// Geometry supplied by the host when a drag starts.
///
/// All rectangles share one coordinate space (typically client coordinates).
/// Only the horizontal extent is consulted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackGeometry {
    /// Bounding rectangle of the track.
    pub track: Rect,
    /// Bounding rectangle of the low handle, or of the only handle in single mode.
    pub low: Rect,
    /// Bounding rectangle of the high handle; ignored in single mode.
    pub high: Rect,
}

impl TrackGeometry {
    /// Geometry with a track only; handle rects are empty.
    pub fn from_track(track: Rect) -> Self {
        Self {
            track,
            low: Rect::ZERO,
            high: Rect::ZERO,
        }
    }

    /// Rect of the given handle.
    pub fn handle(&self, handle: HandleId) -> Rect {
        match handle {
            HandleId::Single | HandleId::Low => self.low,
            HandleId::High => self.high,
        }
    }
}

/// Lifecycle events emitted during a drag gesture.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DragEventKind {
    /// A handle was pressed.
    DragStart,
    /// The pressed handle moved.
    DragMove,
    /// The gesture ended (pointer up or cancel).
    DragEnd,
}

impl DragEventKind {
    /// Conventional event name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DragStart => "dragstart",
            Self::DragMove => "dragmove",
            Self::DragEnd => "dragend",
        }
    }
}

impl core::str::FromStr for DragEventKind {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dragstart" => Ok(Self::DragStart),
            "dragmove" => Ok(Self::DragMove),
            "dragend" => Ok(Self::DragEnd),
            other => Err(RangeError::UnknownEvent(other.into())),
        }
    }
}

impl core::fmt::Display for DragEventKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.name())
    }
}

/// A lifecycle event and its payload.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DragEvent {
    /// Which lifecycle step this is.
    pub kind: DragEventKind,
    /// Current value(s), formatted like [`RangeModel::value_text`](crate::model::RangeModel::value_text).
    pub value: String,
}

impl DragEvent {
    /// Create an event.
    pub fn new(kind: DragEventKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
