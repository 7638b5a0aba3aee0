// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notch Range: the value-mapping and drag-interaction engine of a range slider.
//!
//! ## Overview
//!
//! A slider maps a numeric domain `[min, max]` onto a horizontal track and
//! quantizes it to `step`. It has one handle, or two handles selecting a
//! sub-range. This crate does the arithmetic and the interaction; it does not
//! render, lay out, style, or capture raw pointer events.
//!
//! - [`mapper`]: pure pixel ↔ value conversions with the last-partial-step tie-break.
//! - [`model`]: the validated configuration and the state derived from it.
//! - [`drag`]: the `Idle → Dragging → Idle` state machine and dual-handle non-crossing.
//! - [`observer`]: `dragstart` / `dragmove` / `dragend` handlers.
//! - [`slider`]: [`RangeSlider`], the facade tying them together.
//!
//! Arithmetic runs through [`notch_decimal`], so a step of `0.1` yields `0.3`,
//! not `0.30000000000000004`.
//!
//! ## Inputs
//!
//! The host supplies [`kurbo::Rect`]s for the track and handles when a drag
//! starts ([`TrackGeometry`]), then plain pointer x coordinates while moving.
//! Use [`RangeModel::layout`] to compute handle rects from the model.
//!
//! ## Errors
//!
//! Invalid configuration is rejected with [`RangeError::InvalidConfiguration`]
//! and never leaves a half-applied state behind.
//!
//! # Example
//!
//! ```rust
//! use notch_range::{HandleId, PointerInput, RangeConfig, RangeSlider, RangeValue};
//! use kurbo::{Rect, Size};
//!
//! let config = RangeConfig::new(0.0, 100.0, 10.0, RangeValue::Dual(20.0, 80.0)).unwrap();
//! let mut slider = RangeSlider::new(config).unwrap();
//!
//! let track = Rect::new(0.0, 0.0, 200.0, 8.0);
//! let geometry = slider.model().layout(track, Size::new(12.0, 12.0));
//!
//! slider
//!     .handle_pointer(PointerInput::Down { handle: HandleId::Low, geometry })
//!     .unwrap();
//! // 85% of the track is past the high handle: low is pinned to it.
//! slider.handle_pointer(PointerInput::Move { x: 170.0 }).unwrap();
//! slider.handle_pointer(PointerInput::Up).unwrap();
//!
//! assert_eq!(slider.get_value(), "80,80");
//! assert_eq!(slider.model().track().width_percent, 0.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod drag;
pub mod error;
pub mod mapper;
pub mod model;
pub mod observer;
pub mod slider;
pub mod types;

pub use config::{ConfigPatch, RangeConfig, RangeValue};
pub use drag::{DragController, DragSession, DragState, NoCapture, PointerCapture, PointerInput};
pub use error::{ConfigIssue, RangeError};
pub use model::RangeModel;
pub use observer::{ListenerId, Observers};
pub use slider::RangeSlider;
pub use types::{
    DragEvent, DragEventKind, HandleId, HandleState, Highlight, Mode, TrackGeometry, TrackSpan,
};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
