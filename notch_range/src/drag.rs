// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag lifecycle: `Idle → Dragging(handle) → Idle`.
//!
//! ## Overview
//!
//! A pointer-down on a handle opens a [`DragSession`] that snapshots the track
//! geometry and the opposite handle. Pointer moves are clamped to the track,
//! quantized by [`position_to_value`], constrained so dual handles never cross,
//! and written to the [`RangeModel`]. A pointer-up or cancel closes the session.
//!
//! ## Pointer capture
//!
//! While a session is open the host's document-level move/up listeners are held
//! through [`PointerCapture`]. The controller acquires on start and releases on
//! every exit path: [`DragController::end`], [`DragController::abort`], and drop.
//!
//! ## Dual handles
//!
//! The opposite handle does not move during a session, so its snapshot is
//! authoritative. A low handle that would reach or pass the high handle is
//! pinned to it (value and offset) and the track highlight collapses to zero
//! width; the high handle is treated symmetrically. Handles may touch.

use kurbo::Rect;
use notch_decimal::sub;

use crate::error::RangeError;
use crate::mapper::{offset_percent, position_to_value};
use crate::model::RangeModel;
use crate::types::{DragEvent, DragEventKind, HandleId, HandleState, TrackGeometry, TrackSpan};

const LOG_TARGET: &str = "notch_range::drag";

/// Exclusive hold on the host's document-level pointer listeners.
pub trait PointerCapture {
    /// Start receiving pointer move/up/cancel for the whole document.
    fn acquire(&mut self);
    /// Stop receiving them.
    fn release(&mut self);
}

/// A no-op capture for hosts that route pointer events themselves.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoCapture;

impl PointerCapture for NoCapture {
    #[inline]
    fn acquire(&mut self) {}

    #[inline]
    fn release(&mut self) {}
}

/// Typed pointer message fed to the slider.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PointerInput {
    /// Pointer pressed on `handle`, with the current geometry.
    Down {
        /// Pressed handle.
        handle: HandleId,
        /// Track and handle rects at the time of the press.
        geometry: TrackGeometry,
    },
    /// Pointer moved to horizontal coordinate `x`.
    Move {
        /// Pointer x in the geometry's coordinate space.
        x: f64,
    },
    /// Pointer released.
    Up,
    /// Gesture cancelled by the platform; handled like [`PointerInput::Up`].
    Cancel,
}

/// Controller state.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DragState {
    /// No gesture in progress.
    Idle,
    /// The given handle is being dragged.
    Dragging(HandleId),
}

/// Snapshot of the handle that is not being dragged.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OtherHandle {
    /// Value and offset at session start.
    pub state: HandleState,
    /// Centre of the handle, in px from the track's left edge.
    pub center_offset: f64,
}

/// State of one drag gesture, from press to release.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Handle being dragged.
    pub handle: HandleId,
    /// Left edge of the track, px.
    pub track_origin: f64,
    /// Width of the track, px.
    pub track_length: f64,
    /// Opposite handle in dual mode.
    pub other: Option<OtherHandle>,
}

/// Owns the drag session and the pointer capture.
pub struct DragController<C: PointerCapture = NoCapture> {
    capture: C,
    session: Option<DragSession>,
}

impl<C: PointerCapture> core::fmt::Debug for DragController<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DragController")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<C: PointerCapture + Default> Default for DragController<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<C: PointerCapture> DragController<C> {
    /// Create an idle controller.
    pub fn new(capture: C) -> Self {
        Self {
            capture,
            session: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> DragState {
        match &self.session {
            Some(session) => DragState::Dragging(session.handle),
            None => DragState::Idle,
        }
    }

    /// The active session, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The pointer capture provider.
    pub fn capture(&self) -> &C {
        &self.capture
    }

    /// Open a session on `handle` and return the `dragstart` event.
    pub fn start(
        &mut self,
        model: &mut RangeModel,
        handle: HandleId,
        geometry: &TrackGeometry,
    ) -> Result<DragEvent, RangeError> {
        if self.session.is_some() {
            return Err(RangeError::DragInProgress);
        }
        let mode = model.mode();
        if !handle.belongs_to(mode) {
            return Err(RangeError::HandleMismatch { handle, mode });
        }
        let track_length = track_width(geometry.track);
        // Negated so NaN is rejected too.
        if !(track_length > 0.0 && track_length.is_finite()) {
            return Err(RangeError::DegenerateTrack(track_length));
        }

        let opposite = match handle {
            HandleId::Single => None,
            HandleId::Low => Some(HandleId::High),
            HandleId::High => Some(HandleId::Low),
        };
        let other = opposite.map(|id| {
            let state = model.handle(id);
            OtherHandle {
                state,
                center_offset: center_offset(geometry.handle(id), geometry.track, state),
            }
        });

        self.capture.acquire();
        self.session = Some(DragSession {
            handle,
            track_origin: geometry.track.x0,
            track_length,
            other,
        });
        model.activate(handle);
        log::debug!(target: LOG_TARGET, "drag start on {handle:?} at {}", model.value_text());
        Ok(DragEvent::new(DragEventKind::DragStart, model.value_text()))
    }

    /// Move the dragged handle to pointer `x` and return the `dragmove` event.
    ///
    /// Returns `Ok(None)` when no session is active.
    pub fn drag_to(
        &mut self,
        model: &mut RangeModel,
        x: f64,
    ) -> Result<Option<DragEvent>, RangeError> {
        let Some(session) = self.session else {
            return Ok(None);
        };
        if !x.is_finite() {
            return Err(RangeError::NonFinitePointer(x));
        }
        let length = session.track_length;
        let offset = sub(x, session.track_origin).clamp(0.0, length);
        let pointer = offset_percent(offset, length)?;
        let config = model.config();
        let value = position_to_value(offset, length, config.min, config.max, config.step)?;
        let placed = HandleState {
            value,
            offset_percent: pointer,
        };

        match (session.handle, session.other) {
            (HandleId::Low, Some(high)) => {
                if pointer >= high.state.offset_percent || value > high.state.value {
                    let pinned = TrackSpan {
                        left_percent: high.state.offset_percent,
                        width_percent: 0.0,
                    };
                    model.place(HandleId::Low, high.state, pinned);
                } else {
                    let width = offset_percent((high.center_offset - offset).max(0.0), length)?;
                    let span = TrackSpan {
                        left_percent: pointer,
                        width_percent: width,
                    };
                    model.place(HandleId::Low, placed, span);
                }
            }
            (HandleId::High, Some(low)) => {
                let left_percent = model.track().left_percent;
                if pointer <= low.state.offset_percent || value < low.state.value {
                    let pinned = TrackSpan {
                        left_percent,
                        width_percent: 0.0,
                    };
                    model.place(HandleId::High, low.state, pinned);
                } else {
                    let width = offset_percent((offset - low.center_offset).max(0.0), length)?;
                    let span = TrackSpan {
                        left_percent,
                        width_percent: width,
                    };
                    model.place(HandleId::High, placed, span);
                }
            }
            (handle, _) => {
                let span = TrackSpan {
                    left_percent: 0.0,
                    width_percent: pointer,
                };
                model.place(handle, placed, span);
            }
        }

        log::trace!(target: LOG_TARGET, "drag move x={x} -> {}", model.value_text());
        Ok(Some(DragEvent::new(DragEventKind::DragMove, model.value_text())))
    }

    /// Close the session and return the `dragend` event.
    ///
    /// Returns `None` when no session is active.
    pub fn end(&mut self, model: &mut RangeModel) -> Option<DragEvent> {
        let session = self.close(model)?;
        log::debug!(
            target: LOG_TARGET,
            "drag end on {:?} at {}",
            session.handle,
            model.value_text()
        );
        Some(DragEvent::new(DragEventKind::DragEnd, model.value_text()))
    }

    /// Close the session without emitting an event. Returns whether one was open.
    pub fn abort(&mut self, model: &mut RangeModel) -> bool {
        let closed = self.close(model);
        if let Some(session) = &closed {
            log::debug!(target: LOG_TARGET, "drag on {:?} aborted", session.handle);
        }
        closed.is_some()
    }

    fn close(&mut self, model: &mut RangeModel) -> Option<DragSession> {
        let session = self.session.take()?;
        self.capture.release();
        model.deactivate_drag();
        Some(session)
    }
}

impl<C: PointerCapture> Drop for DragController<C> {
    fn drop(&mut self) {
        if self.session.take().is_some() {
            self.capture.release();
        }
    }
}

/// Centre of a handle relative to the track's left edge.
///
/// An empty rect means the host has no handle geometry; the model's offset is used instead.
fn center_offset(handle: Rect, track: Rect, state: HandleState) -> f64 {
    if handle.width() > 0.0 {
        sub(handle.center().x, track.x0)
    } else {
        track_width(track) * state.offset_percent / 100.0
    }
}

// Fractional client coordinates must not shift offsets off step midpoints.
fn track_width(track: Rect) -> f64 {
    sub(track.x1, track.x0)
}
